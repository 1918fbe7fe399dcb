// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Error, Style};

/// A block of text with styles applied to ranges within it.
///
/// Ranges are byte indices into the UTF-8 text and must fall on character boundaries.
/// Where spans overlap, later spans win key by key over earlier ones, and every span wins
/// over the default style.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledText {
    text: String,
    default_style: Style,
    spans: Vec<(Range<usize>, Style)>,
}

impl StyledText {
    /// Create a `StyledText` with no styles applied.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default_style: Style::default(),
            spans: Vec::new(),
        }
    }

    /// Returns this text with `style` used wherever no span applies.
    #[must_use]
    pub fn with_default_style(mut self, style: Style) -> Self {
        self.default_style = style;
        self
    }

    /// Replaces the style used wherever no span applies.
    pub fn set_default_style(&mut self, style: Style) {
        self.default_style = style;
    }

    /// The style used wherever no span applies.
    pub fn default_style(&self) -> &Style {
        &self.default_style
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the length of the underlying text, in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply `style` to a `range` within the text.
    pub fn apply_style(&mut self, range: Range<usize>, style: Style) -> Result<(), Error> {
        let len = self.text.len();
        if range.start > range.end {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > len {
            return Err(Error::InvalidBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        for index in [range.start, range.end] {
            if !self.text.is_char_boundary(index) {
                return Err(Error::NotOnCharBoundary {
                    start: range.start,
                    end: range.end,
                    index,
                });
            }
        }
        self.spans.push((range, style));
        Ok(())
    }

    /// Iterate over all spans and the ranges they apply to, in application order.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &Style)> {
        self.spans.iter().map(|(range, style)| (range, style))
    }

    /// Returns the effective style at byte `index`.
    ///
    /// This is the default style overridden by every span covering `index`, in the order
    /// the spans were applied.
    pub fn style_at(&self, index: usize) -> Style {
        self.spans
            .iter()
            .filter(|(range, _)| range.contains(&index))
            .fold(self.default_style.clone(), |style, (_, span)| {
                style.merged(span)
            })
    }

    /// Returns the longest range around `index` over which the set of covering spans is the
    /// same as at `index`, and therefore over which [`Self::style_at`] is constant.
    pub fn effective_range(&self, index: usize) -> Range<usize> {
        let mut start = 0;
        let mut end = self.text.len();
        for (range, _) in &self.spans {
            if range.is_empty() {
                continue;
            }
            for boundary in [range.start, range.end] {
                if boundary <= index {
                    start = start.max(boundary);
                } else {
                    end = end.min(boundary);
                }
            }
        }
        start..end
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
