// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::data::LayoutData;
use super::Alignment;

pub(crate) fn align(data: &mut LayoutData, width: f64, alignment: Alignment) {
    if alignment == Alignment::Left {
        return;
    }
    let Some(last_line) = data.last_line() else {
        return;
    };

    for line in 0..=last_line {
        // Compute free space.
        let free_space = (width - data.line_extent(line)).floor();
        let offset = match alignment {
            Alignment::Left => 0.0,
            Alignment::Center => free_space / 2.0,
            Alignment::Right => free_space,
        };
        // Overflowing lines stay where they are.
        if offset <= 0.0 {
            continue;
        }

        if let Some(tokens) = data.lines.get(line).map(|line| line.tokens.clone()) {
            for token in &mut data.tokens[tokens] {
                if token.visible {
                    token.x += offset;
                }
            }
        }
        if let Some(control) = data.control.as_mut().filter(|control| control.line == line) {
            control.x += offset;
        }
    }
}
