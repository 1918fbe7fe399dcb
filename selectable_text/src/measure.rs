// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement.

use peniko::kurbo::Size;
use unicode_width::UnicodeWidthStr;

use crate::style::{Style, DEFAULT_FONT_SIZE};

/// Measures styled text.
///
/// The layout engine never shapes glyphs itself. Everything it knows about the size of a
/// piece of text comes through this trait, so the same engine can drive a GPU text stack,
/// a platform text system or a character grid.
pub trait TextMeasurer {
    /// Returns the size of `text` drawn with `style` on a single line.
    fn measure(&self, text: &str, style: &Style) -> Size;

    /// Returns the width of `text` drawn with `style`.
    fn width(&self, text: &str, style: &Style) -> f64 {
        self.measure(text, style).width
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, style: &Style) -> Size {
        (**self).measure(text, style)
    }
}

/// A measurer for fixed-pitch text.
///
/// Every terminal column is `cell_width` wide and every line `line_height` tall at the
/// default font size; styles with a different font size scale both proportionally. Column
/// counts follow `unicode-width`, so wide characters take two cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMeasurer {
    /// Width of a single column at the default font size.
    pub cell_width: f64,
    /// Height of a line at the default font size.
    pub line_height: f64,
}

impl MonospaceMeasurer {
    /// Creates a measurer with the given cell metrics.
    pub fn new(cell_width: f64, line_height: f64) -> Self {
        Self {
            cell_width,
            line_height,
        }
    }

    /// A measurer where one column is one unit wide and a line is one unit tall, suitable
    /// for laying out into a character grid.
    pub fn grid() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(10.0, 20.0)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, style: &Style) -> Size {
        let scale = f64::from(style.font_size() / DEFAULT_FONT_SIZE);
        let columns = text.width() as f64;
        Size::new(
            columns * self.cell_width * scale,
            self.line_height * scale,
        )
    }
}
