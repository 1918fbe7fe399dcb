// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::layout::{
    apply_truncation, fold_truncation, layout, LayoutConfig, TruncationEdit, TruncationMode,
};
use crate::validator;
use crate::{style_tokens, tokenize_str, Rect, Style, ValidatorRegistry};

use super::utils::{control, frame, hidden, lay_out, lay_out_with, measurer};

fn tail(width: f64, max_lines: usize) -> LayoutConfig {
    LayoutConfig::new(width)
        .with_max_lines(max_lines)
        .with_truncation(TruncationMode::TailTruncate)
}

#[test]
fn last_word_gets_an_ellipsis() {
    let (_, result) = lay_out("abc information more", &tail(150.0, 1));
    assert_eq!(
        result.truncation(),
        Some(&TruncationEdit {
            token_index: 2,
            replacement: "informatio\u{2026}".into(),
        })
    );
    assert_eq!(frame(&result, 2), Rect::new(40.0, 0.0, 150.0, 20.0));
    assert_eq!(hidden(&result), [3, 4]);
}

#[test]
fn word_truncated_into_the_space_left_by_the_control() {
    // "information" starts at 40 and the control takes 70 of the 150 available, which
    // leaves 40 for the word and its ellipsis.
    let control = control("more...", 1).with_horizontal_padding(0.0);
    let (_, result) = lay_out_with("abc information more", &tail(150.0, 0), &control);
    assert_eq!(
        result.truncation().map(|edit| edit.replacement.as_str()),
        Some("inf\u{2026}")
    );
    assert_eq!(frame(&result, 2), Rect::new(40.0, 0.0, 80.0, 20.0));
    assert_eq!(
        result.expansion_frame(),
        Some(Rect::new(80.0, 0.0, 150.0, 20.0))
    );
}

#[test]
fn custom_ellipsis() {
    let config = tail(150.0, 1).with_ellipsis("...");
    let (_, result) = lay_out("abc information more", &config);
    assert_eq!(
        result.truncation().map(|edit| edit.replacement.as_str()),
        Some("informat...")
    );
}

#[test]
fn falls_back_to_the_previous_word() {
    let config = tail(50.0, 1).with_ellipsis("...");
    let (_, result) = lay_out("ab cd more", &config);
    // "cd" starts at 30 and not even "..." fits in the remaining 20.
    assert_eq!(
        result.truncation(),
        Some(&TruncationEdit {
            token_index: 0,
            replacement: "ab...".into(),
        })
    );
    assert_eq!(hidden(&result), [1, 2, 3, 4]);
    assert_eq!(frame(&result, 0).width(), 50.0);
}

#[test]
fn lone_word_that_cannot_fit_collapses() {
    let config = tail(20.0, 1).with_ellipsis("...");
    let (_, result) = lay_out("abcdef more", &config);
    assert_eq!(result.truncation(), None);
    assert_eq!(frame(&result, 0), Rect::new(0.0, 0.0, 0.0, 20.0));
}

#[test]
fn oversized_last_word_is_truncated_without_overflow() {
    let (_, result) = lay_out("aaaaaaaaaaaaaaa", &tail(100.0, 1));
    assert_eq!(
        result.truncation().map(|edit| edit.replacement.as_str()),
        Some("aaaaaaaaa\u{2026}")
    );
    assert_eq!(frame(&result, 0).width(), 100.0);
}

#[test]
fn text_that_fits_is_left_alone() {
    let (_, result) = lay_out("ab cd", &tail(100.0, 1));
    assert_eq!(result.truncation(), None);
    assert!(hidden(&result).is_empty());
}

#[test]
fn unbounded_layouts_never_truncate() {
    let (_, result) = lay_out("aaaaaaaaaaaaaaa bb", &tail(100.0, 0));
    assert_eq!(result.truncation(), None);
    assert_eq!(frame(&result, 0).width(), 150.0);
}

#[test]
fn folded_edit_is_stable() {
    let config = tail(150.0, 1);
    let mut tokens = tokenize_str("abc information more");
    let first = layout(&tokens, &config, None, &measurer());
    let edit = first.truncation().cloned().unwrap();
    fold_truncation(&mut tokens, &edit);
    assert!(tokens[2].is_truncated());
    assert_eq!(tokens[2].text(), "informatio\u{2026}");

    let second = layout(&tokens, &config, None, &measurer());
    assert_eq!(second.truncation(), None);
    assert_eq!(second.placements(), first.placements());
}

#[test]
fn folded_edit_is_redone_when_space_shrinks() {
    let mut tokens = tokenize_str("abc information more");
    let first = layout(&tokens, &tail(150.0, 1), None, &measurer());
    fold_truncation(&mut tokens, first.truncation().unwrap());

    let control = control("more...", 1).with_horizontal_padding(0.0);
    let second = layout(&tokens, &tail(150.0, 0), Some(&control), &measurer());
    assert_eq!(
        second.truncation().map(|edit| edit.replacement.as_str()),
        Some("inf\u{2026}")
    );
}

#[test]
fn edit_targets_display_text_when_present() {
    let mut registry = ValidatorRegistry::new();
    registry
        .register_silent(validator::handlebars("name", "Jefferson"))
        .unwrap();
    let tokens = style_tokens(&tokenize_str("{{name}}"), &registry, &Style::new());

    let edit = TruncationEdit {
        token_index: 0,
        replacement: "Jeff\u{2026}".into(),
    };
    let edited = apply_truncation(&tokens, &edit);
    assert_eq!(edited[0].text(), "{{name}}");
    assert_eq!(edited[0].display_text(), Some("Jeff\u{2026}"));
    assert!(edited[0].is_truncated());
    // The input is untouched.
    assert!(!tokens[0].is_truncated());
}

#[test]
fn edit_out_of_range_is_ignored() {
    let tokens = tokenize_str("ab");
    let edit = TruncationEdit {
        token_index: 5,
        replacement: "x".into(),
    };
    assert_eq!(apply_truncation(&tokens, &edit), tokens);
}
