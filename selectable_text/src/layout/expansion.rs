// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use super::data::LayoutData;
use crate::{Error, Style, TextMeasurer, Token};

/// Default horizontal padding on each side of the expansion control's text.
pub const DEFAULT_EXPANSION_PADDING: f64 = 4.0;

/// An inline "show more / show less" control placed after the text.
///
/// The control switches the layout between a collapsed line cap and an expanded one. While
/// it is present its active line count replaces the layout's own cap.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpansionControl {
    expanded: bool,
    collapsed_text: String,
    expanded_text: String,
    collapsed_line_count: usize,
    expanded_line_count: usize,
    style: Style,
    horizontal_padding: f64,
}

impl ExpansionControl {
    /// Creates a collapsed control.
    ///
    /// `collapsed_line_count` must be non-zero. `expanded_line_count` is either zero, for an
    /// unbounded expanded layout, or greater than `collapsed_line_count`.
    pub fn new(
        collapsed_text: impl Into<String>,
        collapsed_line_count: usize,
        expanded_text: impl Into<String>,
        expanded_line_count: usize,
        style: Style,
    ) -> Result<Self, Error> {
        if collapsed_line_count == 0 {
            return Err(Error::ZeroCollapsedLines);
        }
        if expanded_line_count != 0 && expanded_line_count <= collapsed_line_count {
            return Err(Error::InvalidExpansionLines {
                collapsed: collapsed_line_count,
                expanded: expanded_line_count,
            });
        }
        Ok(Self {
            expanded: false,
            collapsed_text: collapsed_text.into(),
            expanded_text: expanded_text.into(),
            collapsed_line_count,
            expanded_line_count,
            style,
            horizontal_padding: DEFAULT_EXPANSION_PADDING,
        })
    }

    /// Returns this control with `padding` on each side of its text.
    #[must_use]
    pub fn with_horizontal_padding(mut self, padding: f64) -> Self {
        self.horizontal_padding = padding;
        self
    }

    /// Returns `true` while expanded.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Sets the expanded state.
    pub fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    /// Flips between the collapsed and expanded state.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// The active line cap, where `0` means unbounded.
    pub fn line_count(&self) -> usize {
        if self.expanded {
            self.expanded_line_count
        } else {
            self.collapsed_line_count
        }
    }

    /// The line cap while collapsed.
    pub fn collapsed_line_count(&self) -> usize {
        self.collapsed_line_count
    }

    /// The line cap while expanded.
    pub fn expanded_line_count(&self) -> usize {
        self.expanded_line_count
    }

    /// The label for the current state.
    ///
    /// A collapsed control shows its collapsed text, which invites expanding.
    pub fn text(&self) -> &str {
        if self.expanded {
            &self.expanded_text
        } else {
            &self.collapsed_text
        }
    }

    /// The style of the label.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Padding on each side of the label.
    pub fn horizontal_padding(&self) -> f64 {
        self.horizontal_padding
    }

    /// The width the control occupies: its label plus padding on both sides.
    pub fn width(&self, measurer: &impl TextMeasurer) -> f64 {
        measurer.width(self.text(), &self.style) + 2.0 * self.horizontal_padding
    }
}

/// Hides the tokens on `line` that start at or after `x` and shrinks the ones that straddle
/// it.
///
/// Returns `true` if a word was hidden or shrunk.
pub(crate) fn cover(data: &mut LayoutData, tokens: &[Token], line: usize, x: f64) -> bool {
    let Some(range) = data.lines.get(line).map(|line| line.tokens.clone()) else {
        return false;
    };
    let mut covered_word = false;
    for index in range {
        let token = &mut data.tokens[index];
        if !token.visible || token.max_x() <= x {
            continue;
        }
        if token.x >= x {
            token.visible = false;
        } else {
            token.width = x - token.x;
        }
        covered_word |= tokens[index].is_word();
    }
    covered_word
}
