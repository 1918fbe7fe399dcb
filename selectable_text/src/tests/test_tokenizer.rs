// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{tokenize, tokenize_str, Style, StyleProperty, StyledText, TokenKind, TokenizerConfig};

use super::utils::{texts, WHITESPACE};

#[test]
fn empty_text_has_no_tokens() {
    assert!(tokenize_str("").is_empty());
}

#[test]
fn runs_of_each_class() {
    let tokens = tokenize_str(WHITESPACE);
    let kinds: Vec<_> = tokens.iter().map(|token| token.kind()).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Word,
            TokenKind::Space,
            TokenKind::Word,
            TokenKind::NewLine,
            TokenKind::Tab,
            TokenKind::Word,
            TokenKind::Word,
        ]
    );
    assert_eq!(
        texts(&tokens),
        ["one", "  ", "two", "", "    ", "three", "four"]
    );
    assert_eq!(tokens[1].len(), 2);
    assert_eq!(tokens[3].len(), 2, "both newlines fold into one token");
    assert_eq!(tokens[4].len(), 1);
}

#[test]
fn terminators_are_dropped() {
    let tokens = tokenize_str("a\0\0b");
    assert_eq!(texts(&tokens), ["a", "b"]);
    assert_eq!(tokens[0].range(), 0..1);
    assert_eq!(tokens[1].range(), 3..4);
}

#[test]
fn ranges_are_byte_offsets() {
    let tokens = tokenize_str("héllo wörld");
    assert_eq!(tokens[0].range(), 0..6);
    assert_eq!(tokens[0].len(), 5);
    assert_eq!(tokens[1].range(), 6..7);
    assert_eq!(tokens[2].range(), 7..13);
    assert_eq!(tokens[2].text(), "wörld");
}

#[test]
fn tab_width_is_configurable() {
    let styled = StyledText::new("a\t\tb");
    let tokens = tokenize(&styled, &TokenizerConfig::default().with_tab_width(2));
    assert_eq!(tokens[1].kind(), TokenKind::Tab);
    assert_eq!(tokens[1].text(), "    ");
    assert_eq!(tokens[1].source_text(), "\t\t");
}

#[test]
fn token_takes_style_at_run_start() {
    let bold = Style::from(StyleProperty::FontWeight(700.0));
    let mut styled = StyledText::new("plain bold").with_default_style(Style::from(
        StyleProperty::FontSize(12.0),
    ));
    styled.apply_style(6..10, bold).unwrap();

    let tokens = tokenize(&styled, &TokenizerConfig::default());
    assert_eq!(tokens[0].style().get(crate::StyleKey::FontWeight), None);
    assert_eq!(
        tokens[2].style().get(crate::StyleKey::FontWeight),
        Some(&StyleProperty::FontWeight(700.0))
    );
    assert_eq!(tokens[2].style().font_size(), 12.0);
}

#[test]
fn style_inside_a_word_follows_the_start() {
    let mut styled = StyledText::new("word");
    styled
        .apply_style(2..4, Style::from(StyleProperty::Italic(true)))
        .unwrap();
    let tokens = tokenize(&styled, &TokenizerConfig::default());
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].style().is_empty());
}

#[test]
fn new_tokens_are_plain() {
    for token in tokenize_str("#tag and more") {
        assert!(!token.is_selectable());
        assert!(!token.is_truncated());
        assert_eq!(token.display_text(), None);
        assert_eq!(token.visible_text(), token.text());
    }
}

#[test]
fn source_text_restores_input() {
    let tokens = tokenize_str(WHITESPACE);
    let restored: String = tokens.iter().map(|token| token.source_text()).collect();
    assert_eq!(restored, WHITESPACE.replace('\0', ""));
}
