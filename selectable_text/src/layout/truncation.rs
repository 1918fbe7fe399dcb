// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tail truncation of the last line.

use alloc::string::String;
use core::iter;

use smallvec::SmallVec;

use super::data::LayoutData;
use super::TruncationEdit;
use crate::{TextMeasurer, Token};

/// Returns `true` if the last line has to be truncated.
///
/// That is the case when the line cap stopped placement early, when something on the last
/// line was covered by the expansion control, or when the last visible token on the last
/// line runs past `width`.
pub(crate) fn needs_truncation(data: &LayoutData, width: f64, covered: bool) -> bool {
    if data.overflowed || covered {
        return true;
    }
    let Some(line) = data.lines.last() else {
        return false;
    };
    data.tokens[line.tokens.clone()]
        .iter()
        .rev()
        .find(|token| token.visible)
        .is_some_and(|token| token.x + token.measured_width > width)
}

/// Truncates the tail of the last line so that it ends before `width - reserved`.
///
/// Visible tokens are visited from the end of the line. Tokens that are not words are
/// hidden. For a word, the longest prefix that still fits once `ellipsis` is appended wins
/// and is recorded as the layout's truncation edit. A word with no fitting prefix is
/// hidden, unless it is the only token left on the line, in which case it keeps its place
/// with a width of zero.
pub(crate) fn truncate_tail(
    data: &mut LayoutData,
    tokens: &[Token],
    width: f64,
    reserved: f64,
    ellipsis: &str,
    measurer: &impl TextMeasurer,
) {
    let Some(line) = data.lines.last().map(|line| line.tokens.clone()) else {
        return;
    };
    let limit = width - reserved;

    for index in line.clone().rev() {
        if !data.tokens[index].visible {
            continue;
        }
        let token = &tokens[index];
        if !token.is_word() {
            data.tokens[index].visible = false;
            continue;
        }

        let available = limit - data.tokens[index].x;
        if token.is_truncated() && data.tokens[index].measured_width <= available {
            data.tokens[index].width = data.tokens[index].measured_width;
            return;
        }

        if let Some((replacement, replacement_width)) =
            fitting_prefix(token, available, ellipsis, measurer)
        {
            tracing::trace!(token = index, %replacement, "truncated word");
            data.tokens[index].width = replacement_width;
            data.truncation = Some(TruncationEdit {
                token_index: index,
                replacement,
            });
            return;
        }

        let is_only = !data.tokens[line.start..index]
            .iter()
            .any(|token| token.visible);
        if is_only {
            data.tokens[index].width = 0.0;
            return;
        }
        data.tokens[index].visible = false;
    }
}

/// Finds the longest prefix of `token`'s visible text that fits `available` once
/// `ellipsis` is appended.
fn fitting_prefix(
    token: &Token,
    available: f64,
    ellipsis: &str,
    measurer: &impl TextMeasurer,
) -> Option<(String, f64)> {
    let text = token.visible_text();
    // An earlier edit already ends in the ellipsis.
    let text = if token.is_truncated() {
        text.strip_suffix(ellipsis).unwrap_or(text)
    } else {
        text
    };
    let ends: SmallVec<[usize; 32]> = text
        .char_indices()
        .map(|(index, _)| index)
        .skip(1)
        .chain(iter::once(text.len()))
        .collect();

    let mut candidate = String::with_capacity(text.len() + ellipsis.len());
    for end in ends.iter().rev().copied().chain(iter::once(0)) {
        candidate.clear();
        candidate.push_str(&text[..end]);
        candidate.push_str(ellipsis);
        let candidate_width = measurer.width(&candidate, token.style());
        if candidate_width <= available {
            return Some((candidate, candidate_width));
        }
    }
    None
}
