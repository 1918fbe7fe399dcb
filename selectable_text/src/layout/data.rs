// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use super::TruncationEdit;
use crate::{Token, TextMeasurer};

/// Per-token state for a single layout pass.
#[derive(Clone, Debug, Default)]
pub(crate) struct TokenData {
    /// Width of the token's visible text.
    pub(crate) measured_width: f64,
    /// Width of the token's frame.
    pub(crate) width: f64,
    pub(crate) x: f64,
    pub(crate) line: usize,
    pub(crate) visible: bool,
}

impl TokenData {
    pub(crate) fn max_x(&self) -> f64 {
        self.x + self.width
    }
}

/// A line, as the range of tokens the breaker placed on it.
#[derive(Clone, Debug, Default)]
pub(crate) struct LineData {
    pub(crate) tokens: Range<usize>,
}

#[derive(Clone, Debug)]
pub(crate) struct ControlData {
    pub(crate) x: f64,
    pub(crate) width: f64,
    pub(crate) line: usize,
}

impl ControlData {
    pub(crate) fn max_x(&self) -> f64 {
        self.x + self.width
    }
}

/// Working state of a layout pass. Built from scratch for every pass.
#[derive(Clone, Debug, Default)]
pub(crate) struct LayoutData {
    pub(crate) tokens: Vec<TokenData>,
    pub(crate) lines: Vec<LineData>,
    pub(crate) max_height: f64,
    /// Set when the line cap stopped placement before every token was placed.
    pub(crate) overflowed: bool,
    pub(crate) control: Option<ControlData>,
    pub(crate) truncation: Option<TruncationEdit>,
}

impl LayoutData {
    pub(crate) fn measure(tokens: &[Token], measurer: &impl TextMeasurer) -> Self {
        let mut max_height = 0.0_f64;
        let tokens = tokens
            .iter()
            .map(|token| {
                let size = measurer.measure(token.visible_text(), token.style());
                max_height = max_height.max(size.height);
                TokenData {
                    measured_width: size.width,
                    width: size.width,
                    ..TokenData::default()
                }
            })
            .collect();
        Self {
            tokens,
            max_height,
            ..Self::default()
        }
    }

    /// Index of the last line holding content.
    pub(crate) fn last_line(&self) -> Option<usize> {
        let text_lines = self.lines.len().checked_sub(1);
        let control_line = self.control.as_ref().map(|control| control.line);
        text_lines.max(control_line)
    }

    /// The right edge of the visible content on `line`.
    pub(crate) fn line_extent(&self, line: usize) -> f64 {
        let tokens = self.lines.get(line).map(|l| l.tokens.clone()).unwrap_or(0..0);
        let mut extent = self.tokens[tokens]
            .iter()
            .filter(|data| data.visible)
            .map(TokenData::max_x)
            .fold(0.0, f64::max);
        if let Some(control) = self.control.as_ref().filter(|control| control.line == line) {
            extent = extent.max(control.max_x());
        }
        extent
    }
}
