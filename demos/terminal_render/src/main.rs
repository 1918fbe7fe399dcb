// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out some selectable text into a character grid and prints it, collapsed and then
//! expanded.
//!
//! Set `RUST_LOG=selectable_text=debug` to see what the layout engine does.

use anyhow::{Context, Result};
use selectable_text::layout::Alignment;
use selectable_text::{
    validator, MonospaceMeasurer, SelectableText, SelectionOutcome, Style, StyleProperty,
    DEFAULT_FONT_SIZE,
};
use tracing::info;

const TEXT: &str = "Shine on #Stars with @friends. Read more at https://example.com \
or write to {{name}} at hello@example.com whenever you like.";

/// Width of the grid in columns.
const COLUMNS: usize = 36;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let measurer = MonospaceMeasurer::grid();
    let mut text = SelectableText::new(TEXT);
    text.set_width(COLUMNS as f64);
    text.set_alignment(Alignment::Left);
    // Keep every token one cell per column.
    text.set_selection_style(Style::from(StyleProperty::Underline(true)));

    text.register_validator(validator::hashtag(), |word, _| info!(word, "hashtag"))?;
    text.register_validator(validator::at_symbol_tag(), |word, _| info!(word, "mention"))?;
    text.register_validator(validator::https_link(), |word, _| info!(word, "link"))?;
    text.register_validator(validator::email(), |word, _| info!(word, "email"))?;
    text.register_validator(validator::handlebars("name", "Jefferson"), |word, v| {
        info!(word, replacement = v.replacement_text(), "placeholder");
    })?;

    let label_style = Style::from(StyleProperty::FontSize(DEFAULT_FONT_SIZE));
    text.add_expansion("more", 2, "less", 0, Some(&label_style))?;

    text.layout(&measurer);
    println!("{}", render(&text)?);

    let selectable: Vec<usize> = text
        .tokens()
        .iter()
        .enumerate()
        .filter(|(_, token)| token.is_selectable())
        .map(|(index, _)| index)
        .collect();
    for index in selectable {
        if text.select(index) == SelectionOutcome::Ignored {
            info!(index, "selection ignored");
        }
    }

    // One past the last token is the expansion control.
    let outcome = text.select(text.tokens().len());
    info!(?outcome, "selected the expansion control");
    let layout = text.layout(&measurer);
    info!(
        height = layout.content_size.height,
        changed = layout.height_changed(),
        "expanded"
    );
    println!("{}", render(&text)?);
    Ok(())
}

/// Draws the last layout of `text` into a framed block of characters.
fn render(text: &SelectableText) -> Result<String> {
    let result = text.layout_result().context("text has not been laid out")?;
    let mut grid = vec![vec![' '; COLUMNS]; result.line_count()];
    let mut put = |frame: selectable_text::Rect, label: &str| {
        let Some(row) = grid.get_mut(cell(frame.y0)) else {
            return;
        };
        let start = cell(frame.x0);
        for (offset, ch) in label.chars().take(cell(frame.width())).enumerate() {
            if let Some(slot) = row.get_mut(start + offset) {
                *slot = ch;
            }
        }
    };

    for (index, token) in text.tokens().iter().enumerate() {
        if let Some(frame) = result.frame(index) {
            put(frame, token.visible_text());
        }
    }
    if let (Some(frame), Some(control)) = (result.expansion_frame(), text.expansion()) {
        let padding = control.horizontal_padding();
        put(frame.inset((-padding, 0.0)), control.text());
    }

    let border = format!("+{}+", "-".repeat(COLUMNS));
    let mut out = border.clone();
    for row in grid {
        out.push_str("\n|");
        out.extend(row);
        out.push('|');
    }
    out.push('\n');
    out.push_str(&border);
    Ok(out)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "grid coordinates are small whole numbers"
)]
fn cell(value: f64) -> usize {
    value.max(0.0).round() as usize
}
