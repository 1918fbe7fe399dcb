// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking.

use alloc::vec::Vec;

use super::data::{LayoutData, LineData};
use crate::{Token, TokenKind};

#[derive(Clone, Debug, Default)]
struct LineState {
    /// Index of the line being filled.
    index: usize,
    /// First token on the line.
    start: usize,
    x: f64,
    /// Whether anything other than a newline has been placed on the line.
    has_content: bool,
}

/// Breaks `tokens` into lines no wider than `width`, stopping at `cap` lines.
///
/// Tokens are placed left to right. A token that does not fit on a line that already holds
/// content moves to the next line; a token wider than `width` on an empty line is placed
/// there anyway. Each newline character forces a break. A `cap` of zero means unbounded.
///
/// Tokens after the point where the cap stopped placement stay hidden.
pub(crate) fn break_lines(data: &mut LayoutData, tokens: &[Token], width: f64, cap: usize) {
    let mut lines = Vec::new();
    let mut state = LineState::default();
    let at_cap = |line: usize| cap != 0 && line + 1 >= cap;
    let mut end = tokens.len();

    'tokens: for (index, token) in tokens.iter().enumerate() {
        if token.kind() == TokenKind::NewLine {
            for _ in 0..token.len().max(1) {
                if at_cap(state.index) {
                    data.overflowed = true;
                    end = index;
                    break 'tokens;
                }
                lines.push(LineData {
                    tokens: state.start..index,
                });
                state = LineState {
                    index: state.index + 1,
                    start: index,
                    ..LineState::default()
                };
                tracing::trace!(token = index, line = state.index, "mandatory line break");
            }
            let data = &mut data.tokens[index];
            data.width = 0.0;
            data.x = 0.0;
            data.line = state.index;
            data.visible = true;
            continue;
        }

        let token_width = data.tokens[index].width;
        if state.x + token_width > width && state.has_content {
            if at_cap(state.index) {
                data.overflowed = true;
                end = index;
                break;
            }
            lines.push(LineData {
                tokens: state.start..index,
            });
            state = LineState {
                index: state.index + 1,
                start: index,
                ..LineState::default()
            };
            tracing::trace!(token = index, line = state.index, "line break");
        }

        let data = &mut data.tokens[index];
        data.x = state.x;
        data.line = state.index;
        data.visible = true;
        state.x += token_width;
        state.has_content = true;
    }

    if !tokens.is_empty() {
        lines.push(LineData {
            tokens: state.start..end,
        });
    }
    data.lines = lines;
}
