// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selectable rich text.
//!
//! Text is split into [tokens](Token) (words, runs of spaces, tabs and line breaks), each
//! with its own [`Style`]. Registered [validators](Validator) decide which words are
//! selectable and how they look, and the [layout engine](layout) places the tokens into a
//! container of fixed width with word wrapping, an optional line cap, tail truncation and
//! an optional "show more" control.
//!
//! The passes can be driven one by one:
//!
//! ```
//! use selectable_text::{
//!     layout::{layout, LayoutConfig},
//!     style_tokens, tokenize_str, validator, MonospaceMeasurer, Style, ValidatorRegistry,
//! };
//!
//! let mut registry = ValidatorRegistry::new();
//! registry.register_silent(validator::hashtag()).unwrap();
//!
//! let tokens = style_tokens(&tokenize_str("Shine on #Stars"), &registry, &Style::new());
//! assert!(tokens[4].is_selectable());
//!
//! let result = layout(&tokens, &LayoutConfig::new(100.0), None, &MonospaceMeasurer::default());
//! assert_eq!(result.line_count(), 2);
//! ```
//!
//! or through [`SelectableText`], which keeps them in sync.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `serde`: Implement `Serialize` and `Deserialize` for the configuration types.

#[cfg(not(feature = "std"))]
compile_error!("selectable_text requires the `std` feature to be enabled");

extern crate alloc;

mod error;
mod measure;
mod registry;
mod style;
mod styling;
mod text;
mod token;
mod view;

pub mod layout;
pub mod validator;

pub use peniko::kurbo::{Rect, Size};
pub use peniko::Color;

pub use error::Error;
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use registry::{
    ConflictResolver, FirstRegistered, LongestPrefixWins, Registration, SelectionAction,
    ValidatorRegistry,
};
pub use style::{Style, StyleKey, StyleProperty, DEFAULT_FONT_SIZE};
pub use styling::style_tokens;
pub use text::StyledText;
pub use token::{tokenize, tokenize_str, Token, TokenKind, TokenizerConfig};
pub use validator::Validator;
pub use view::{Insets, LayoutOutcome, SelectableText, SelectionOutcome};

#[cfg(test)]
mod tests;
