// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made validators for common kinds of selectable text.

use alloc::format;

use peniko::color::palette::css;

use super::{Composite, Container, Literal, Validator};
use crate::{Style, StyleProperty};

const EMAIL_PATTERN: &str = r"[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,64}";
const PHONE_NUMBER_PATTERN: &str =
    r"^([0-9]( |-)?)?(\(?[0-9]{3}\)?|[0-9]{3})( |-)?([0-9]{3}( |-)?[0-9]{4}|[a-zA-Z0-9]{7})$";

fn link_style() -> Style {
    Style::from(StyleProperty::Underline(true))
}

/// Words starting with `#`.
pub fn hashtag() -> Validator {
    Container::new(Validator::prefix("#"))
        .named("Hashtag")
        .into()
}

/// Words starting with `@`.
pub fn at_symbol_tag() -> Validator {
    Container::new(Validator::prefix("@"))
        .named("AtSymbolTag")
        .into()
}

/// Words wrapped in double quotes.
pub fn quotations() -> Validator {
    Composite::new([Validator::prefix("\""), Validator::suffix("\"")])
        .named("Quotations")
        .into()
}

/// The placeholder `{{searchable}}`, shown as `replacement`.
///
/// The placeholder name is compared case-sensitively.
pub fn handlebars(searchable: &str, replacement: &str) -> Validator {
    Composite::new([
        Validator::prefix("{{"),
        Validator::suffix("}}"),
        Validator::exact(Literal::case_sensitive(format!("{{{{{searchable}}}}}"))),
    ])
    .named("Handlebars")
    .with_replacement_text(replacement)
    .into()
}

/// Anything with a URL scheme separator.
pub fn link() -> Validator {
    Container::new(Validator::contains("://"))
        .named("Link")
        .with_style(link_style())
        .into()
}

/// `http` and `https` links.
pub fn http_link() -> Validator {
    Composite::new([Validator::prefix("http"), Validator::contains("://")])
        .named("HttpLink")
        .with_style(link_style())
        .into()
}

/// `https` links only.
pub fn https_link() -> Validator {
    Container::new(Validator::prefix("https://"))
        .named("HttpsLink")
        .with_style(link_style())
        .into()
}

/// Plain `http` links, highlighted in red.
pub fn unsafe_link() -> Validator {
    Container::new(Validator::prefix("http://"))
        .named("UnsafeLink")
        .with_style(Style::from(StyleProperty::Foreground(css::RED)))
        .into()
}

/// One specific URL, optionally shown as `replacement`.
pub fn custom_link(url: &str, replacement: Option<&str>) -> Validator {
    let container = Container::new(Validator::exact(url))
        .named("CustomLink")
        .with_style(link_style());
    match replacement {
        Some(text) => container.with_replacement_text(text).into(),
        None => container.into(),
    }
}

/// Email addresses.
pub fn email() -> Validator {
    Container::new(Validator::regex(EMAIL_PATTERN))
        .named("Email")
        .into()
}

/// North American phone numbers, with or without separators.
pub fn phone_number() -> Validator {
    Container::new(Validator::regex(PHONE_NUMBER_PATTERN))
        .named("PhoneNumber")
        .into()
}
