// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{Style, Token, ValidatorRegistry};

/// Applies registered validators to a token sequence.
///
/// Each word is resolved against `registry` on its own. A word claimed by a validator takes
/// `base_selection_style` merged with the validator's selection style, shows the
/// validator's replacement text if it has one, and becomes selectable. Every other token is
/// copied unchanged.
pub fn style_tokens(
    tokens: &[Token],
    registry: &ValidatorRegistry,
    base_selection_style: &Style,
) -> Vec<Token> {
    tokens
        .iter()
        .map(|token| {
            let mut token = token.clone();
            if !token.is_word() {
                return token;
            }
            if let Some(registration) = registry.resolve(token.text()) {
                let validator = registration.validator();
                let style = match validator.selection_style() {
                    Some(style) => base_selection_style.merged(style),
                    None => base_selection_style.clone(),
                };
                token.set_style(style);
                if let Some(replacement) = validator.replacement_text() {
                    token.set_display_text(Some(replacement.to_string()));
                }
                token.set_selectable(true);
            }
            token
        })
        .collect()
}
