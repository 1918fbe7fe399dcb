// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

mod samples;

pub(crate) use samples::*;

use crate::layout::{layout, ExpansionControl, LayoutConfig, LayoutResult};
use crate::{tokenize_str, MonospaceMeasurer, Rect, Style, Token};

/// Ten units per column and twenty per line at the default font size.
pub(crate) fn measurer() -> MonospaceMeasurer {
    MonospaceMeasurer::new(10.0, 20.0)
}

/// Tokenizes `text` and lays it out with [`measurer`].
pub(crate) fn lay_out(text: &str, config: &LayoutConfig) -> (Vec<Token>, LayoutResult) {
    let tokens = tokenize_str(text);
    let result = layout(&tokens, config, None, &measurer());
    (tokens, result)
}

/// Like [`lay_out`], with an expansion control.
pub(crate) fn lay_out_with(
    text: &str,
    config: &LayoutConfig,
    control: &ExpansionControl,
) -> (Vec<Token>, LayoutResult) {
    let tokens = tokenize_str(text);
    let result = layout(&tokens, config, Some(control), &measurer());
    (tokens, result)
}

/// A collapsed control labelled `label` with the default padding and an unstyled label.
pub(crate) fn control(label: &str, collapsed: usize) -> ExpansionControl {
    ExpansionControl::new(label, collapsed, "less", 0, Style::new()).unwrap()
}

/// Frame of a visible token, panicking with a useful message otherwise.
pub(crate) fn frame(result: &LayoutResult, index: usize) -> Rect {
    result
        .frame(index)
        .unwrap_or_else(|| panic!("token {index} should be visible"))
}

pub(crate) fn hidden(result: &LayoutResult) -> Vec<usize> {
    result.hidden().collect()
}

/// The text of every token, in order.
pub(crate) fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(Token::text).collect()
}
