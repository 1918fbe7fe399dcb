// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Token layout.
//!
//! [`layout`] places a styled token sequence into a container of fixed width. Lines are
//! filled greedily, word by word, optionally capped to a number of lines. Content past the
//! cap is either clipped or tail-truncated with an ellipsis, and an optional
//! [`ExpansionControl`] is fitted after the text.
//!
//! Layout is a pure function of its inputs. The only change it asks of the caller is the
//! optional [`TruncationEdit`], which has to be folded back into the tokens with
//! [`fold_truncation`] (or [`apply_truncation`]) before the next pass.

mod alignment;
mod data;
mod expansion;
mod line;
mod truncation;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::kurbo::{Rect, Size};

use crate::{TextMeasurer, Token};

use data::{ControlData, LayoutData};

pub use expansion::{ExpansionControl, DEFAULT_EXPANSION_PADDING};

/// Default marker appended to truncated words.
pub const DEFAULT_ELLIPSIS: &str = "\u{2026}";

/// Horizontal alignment of each line within the container.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Align content to the left edge.
    #[default]
    Left,
    /// Center each line within the container.
    Center,
    /// Align content to the right edge.
    Right,
}

/// What happens to the last line when content does not fit under the line cap.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TruncationMode {
    /// Keep measured widths and let the renderer clip.
    #[default]
    Clip,
    /// Shorten the last visible word and append an ellipsis.
    TailTruncate,
}

/// Parameters of a layout pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Width of the container.
    pub width: f64,
    /// Alignment of each line.
    pub alignment: Alignment,
    /// Maximum number of lines, where `0` means unbounded.
    ///
    /// Ignored while an [`ExpansionControl`] is present.
    pub max_lines: usize,
    /// Treatment of content past the line cap.
    pub truncation: TruncationMode,
    /// Vertical gap between consecutive lines.
    pub line_spacing: f64,
    /// Marker appended to truncated words.
    pub ellipsis: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 0.0,
            alignment: Alignment::default(),
            max_lines: 0,
            truncation: TruncationMode::default(),
            line_spacing: 0.0,
            ellipsis: DEFAULT_ELLIPSIS.into(),
        }
    }
}

impl LayoutConfig {
    /// Creates an unbounded, left aligned configuration for a container `width` wide.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Sets the alignment.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Sets the line cap. `0` means unbounded.
    #[must_use]
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Sets the truncation mode.
    #[must_use]
    pub fn with_truncation(mut self, truncation: TruncationMode) -> Self {
        self.truncation = truncation;
        self
    }

    /// Sets the gap between lines.
    #[must_use]
    pub fn with_line_spacing(mut self, line_spacing: f64) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Sets the marker appended to truncated words.
    #[must_use]
    pub fn with_ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }
}

/// Where a token ended up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Placement {
    /// The token is drawn in `frame` on `line`.
    Visible {
        /// Frame relative to the container's origin.
        frame: Rect,
        /// Zero-based line index.
        line: usize,
    },
    /// The token is not drawn.
    Hidden,
}

impl Placement {
    /// The frame, if visible.
    pub fn frame(&self) -> Option<Rect> {
        match self {
            Self::Visible { frame, .. } => Some(*frame),
            Self::Hidden => None,
        }
    }

    /// The line, if visible.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Visible { line, .. } => Some(*line),
            Self::Hidden => None,
        }
    }

    /// Returns `true` if the token is drawn.
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible { .. })
    }
}

/// A replacement for the text of one token, produced by tail truncation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruncationEdit {
    /// Index of the token to edit.
    pub token_index: usize,
    /// The truncated text, ellipsis included.
    pub replacement: String,
}

/// The outcome of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    placements: Vec<Placement>,
    content_size: Size,
    truncation: Option<TruncationEdit>,
    malformed: Vec<usize>,
    expansion_frame: Option<Rect>,
    line_count: usize,
    line_height: f64,
}

impl LayoutResult {
    /// Placement of every token, indexed like the input tokens.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of the token at `index`.
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.get(index)
    }

    /// Frame of the token at `index`, if it is visible.
    pub fn frame(&self, index: usize) -> Option<Rect> {
        self.placement(index).and_then(Placement::frame)
    }

    /// Indices of the tokens that are not drawn.
    pub fn hidden(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements
            .iter()
            .enumerate()
            .filter(|(_, placement)| !placement.is_visible())
            .map(|(index, _)| index)
    }

    /// Size of the laid out content. The width is the container width.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// The edit the caller has to fold into the tokens, if truncation shortened a word.
    pub fn truncation(&self) -> Option<&TruncationEdit> {
        self.truncation.as_ref()
    }

    /// Sorted indices of tokens wider than the container that were forced onto a line
    /// before the last one.
    ///
    /// The renderer decides how to draw these, for example by clipping or truncating
    /// them individually.
    pub fn malformed(&self) -> &[usize] {
        &self.malformed
    }

    /// Returns `true` if the token at `index` is malformed.
    pub fn is_malformed(&self, index: usize) -> bool {
        self.malformed.binary_search(&index).is_ok()
    }

    /// Frame of the expansion control, if one was laid out.
    pub fn expansion_frame(&self) -> Option<Rect> {
        self.expansion_frame
    }

    /// Number of lines, including a line holding only the expansion control.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Height of every line.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }
}

/// Lays out `tokens` according to `config`.
///
/// When `expansion` is present its active line count is the line cap and its frame is
/// fitted after the text: on the last line if there is room, otherwise on a line of its own
/// when the cap allows one more line, and otherwise over the end of the last line, hiding
/// or shrinking the tokens it covers.
pub fn layout(
    tokens: &[Token],
    config: &LayoutConfig,
    expansion: Option<&ExpansionControl>,
    measurer: &impl TextMeasurer,
) -> LayoutResult {
    let width = config.width;
    let cap = expansion.map_or(config.max_lines, ExpansionControl::line_count);
    let tail_truncate = cap != 0 && config.truncation == TruncationMode::TailTruncate;

    let mut data = LayoutData::measure(tokens, measurer);
    line::break_lines(&mut data, tokens, width, cap);

    let mut truncation_handled = false;
    if let Some(control) = expansion {
        let control_size = measurer.measure(control.text(), control.style());
        data.max_height = data.max_height.max(control_size.height);
        let control_width = control_size.width + 2.0 * control.horizontal_padding();
        let last_line = data.lines.len().saturating_sub(1);
        let end = data.line_extent(last_line);
        let room_below = cap == 0 || last_line + 1 < cap;

        if data.lines.is_empty() || (!data.overflowed && end + control_width <= width) {
            data.control = Some(ControlData {
                x: end,
                width: control_width,
                line: last_line,
            });
        } else if !data.overflowed && room_below {
            tracing::debug!(line = last_line + 1, "expansion control moved to its own line");
            if tail_truncate && truncation::needs_truncation(&data, width, false) {
                truncation::truncate_tail(
                    &mut data,
                    tokens,
                    width,
                    0.0,
                    &config.ellipsis,
                    measurer,
                );
            }
            truncation_handled = true;
            data.control = Some(ControlData {
                x: 0.0,
                width: control_width,
                line: last_line + 1,
            });
        } else {
            let x = width - control_width;
            let covered = expansion::cover(&mut data, tokens, last_line, x);
            if tail_truncate && truncation::needs_truncation(&data, width, covered) {
                truncation::truncate_tail(
                    &mut data,
                    tokens,
                    width,
                    control_width,
                    &config.ellipsis,
                    measurer,
                );
            }
            truncation_handled = true;
            let end = data.line_extent(last_line);
            data.control = Some(ControlData {
                x: if end + control_width <= width { end } else { x },
                width: control_width,
                line: last_line,
            });
        }
    }
    if !truncation_handled && tail_truncate && truncation::needs_truncation(&data, width, false) {
        truncation::truncate_tail(&mut data, tokens, width, 0.0, &config.ellipsis, measurer);
    }

    alignment::align(&mut data, width, config.alignment);

    let result = finish(data, config);
    tracing::debug!(
        tokens = tokens.len(),
        lines = result.line_count,
        truncation = ?result.truncation,
        malformed = result.malformed.len(),
        "laid out tokens"
    );
    result
}

fn finish(data: LayoutData, config: &LayoutConfig) -> LayoutResult {
    let line_height = data.max_height.ceil();
    let line_count = data.last_line().map_or(0, |line| line + 1);
    let line_top = |line: usize| line as f64 * (line_height + config.line_spacing);
    let frame = |x: f64, width: f64, line: usize| {
        let y = line_top(line);
        Rect::new(x, y, x + width, y + line_height)
    };

    let last_text_line = data.lines.len().saturating_sub(1);
    let malformed = data
        .tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| {
            token.visible && token.measured_width > config.width && token.line < last_text_line
        })
        .map(|(index, _)| index)
        .collect();

    let placements = data
        .tokens
        .iter()
        .map(|token| {
            if token.visible {
                Placement::Visible {
                    frame: frame(token.x, token.width, token.line),
                    line: token.line,
                }
            } else {
                Placement::Hidden
            }
        })
        .collect();

    let height = match line_count {
        0 => 0.0,
        n => n as f64 * line_height + (n - 1) as f64 * config.line_spacing,
    };

    LayoutResult {
        placements,
        content_size: Size::new(config.width, height),
        truncation: data.truncation,
        malformed,
        expansion_frame: data
            .control
            .as_ref()
            .map(|control| frame(control.x, control.width, control.line)),
        line_count,
        line_height,
    }
}

/// Returns a copy of `tokens` with `edit` folded in.
pub fn apply_truncation(tokens: &[Token], edit: &TruncationEdit) -> Vec<Token> {
    let mut tokens = tokens.to_vec();
    fold_truncation(&mut tokens, edit);
    tokens
}

/// Folds `edit` into `tokens` in place.
///
/// The replacement becomes the token's display text if it has one and its text otherwise,
/// and the token is marked as truncated. An edit for an index out of range is ignored.
pub fn fold_truncation(tokens: &mut [Token], edit: &TruncationEdit) {
    match tokens.get_mut(edit.token_index) {
        Some(token) => token.apply_truncation(&edit.replacement),
        None => tracing::warn!(
            index = edit.token_index,
            len = tokens.len(),
            "ignoring truncation edit for a token out of range"
        ),
    }
}
