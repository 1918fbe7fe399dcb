// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composable text validators.
//!
//! A [`Validator`] is a predicate over the text of a word token, with an optional
//! selection style and replacement text. Validators come in four shapes:
//!
//! - [`Atomic`] predicates compare against a literal or a regular expression.
//! - [`Container`] wraps one validator and can override its appearance.
//! - [`Composite`] requires every member to match.
//! - `Reverse` negates one validator.
//!
//! Every validator has an [`identity`](Validator::identity): a string derived only from the
//! kind of validator and its literal parameters. Two validators built the same way always
//! share an identity, which is what registration deduplicates on. Parts are joined with `.`;
//! a `.` or `\` inside a name or literal is escaped with a backslash, so validators built
//! differently never share an identity.
//!
//! ```
//! use selectable_text::validator::{Literal, Validator};
//!
//! let hashtag = Validator::prefix("#");
//! assert_eq!(hashtag.identity(), "Prefix.begins_with.#");
//! assert!(hashtag.matches("#Stars"));
//!
//! let exact = Validator::exact(Literal::case_sensitive("Test"));
//! assert!(exact.matches("Test"));
//! assert!(!exact.matches("test"));
//! ```

mod atomic;
mod combinator;
mod presets;

use alloc::boxed::Box;
use alloc::string::String;

use crate::{Error, Style};

pub use atomic::{Atomic, Literal, Pattern};
pub use combinator::{Composite, Container};
pub use presets::{
    at_symbol_tag, custom_link, email, handlebars, hashtag, http_link, https_link, link,
    phone_number, quotations, unsafe_link,
};

/// A composable predicate over token text.
#[derive(Clone, Debug)]
pub enum Validator {
    /// A predicate against a literal or a pattern.
    Atomic(Atomic),
    /// A single validator with optional appearance overrides.
    Container(Container),
    /// A conjunction of validators.
    Composite(Composite),
    /// The negation of a validator.
    Reverse(Box<Validator>),
}

impl Validator {
    /// Matches text equal to `literal`.
    pub fn exact(literal: impl Into<Literal>) -> Self {
        Self::Atomic(Atomic::Matches(literal.into()))
    }

    /// Matches text containing `literal`.
    pub fn contains(literal: impl Into<Literal>) -> Self {
        Self::Atomic(Atomic::Contains(literal.into()))
    }

    /// Matches text starting with `literal`.
    pub fn prefix(literal: impl Into<Literal>) -> Self {
        Self::Atomic(Atomic::Prefix(literal.into()))
    }

    /// Matches text ending with `literal`.
    pub fn suffix(literal: impl Into<Literal>) -> Self {
        Self::Atomic(Atomic::Suffix(literal.into()))
    }

    /// Matches text in which the case-insensitive regular expression `pattern` finds a
    /// match.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Use [`Self::try_regex`] for
    /// patterns that are not known ahead of time.
    pub fn regex(pattern: &str) -> Self {
        match Pattern::new(pattern) {
            Ok(pattern) => Self::Atomic(Atomic::Regex(pattern)),
            Err(err) => panic!("{err}"),
        }
    }

    /// Matches text in which the regular expression `pattern` finds a match, reporting an
    /// invalid pattern as an error.
    pub fn try_regex(pattern: &str) -> Result<Self, Error> {
        Pattern::new(pattern).map(|pattern| Self::Atomic(Atomic::Regex(pattern)))
    }

    /// Wraps `inner` in a [`Container`] without overrides.
    pub fn container(inner: impl Into<Self>) -> Self {
        Self::Container(Container::new(inner))
    }

    /// Requires every validator in `members` to match.
    pub fn composite(members: impl IntoIterator<Item = Self>) -> Self {
        Self::Composite(Composite::new(members))
    }

    /// Matches exactly when `inner` does not.
    pub fn reverse(inner: impl Into<Self>) -> Self {
        Self::Reverse(Box::new(inner.into()))
    }

    /// Returns the deterministic identity of this validator.
    pub fn identity(&self) -> String {
        let mut identity = String::new();
        self.write_identity(&mut identity);
        identity
    }

    fn write_identity(&self, out: &mut String) {
        match self {
            Self::Atomic(atomic) => atomic.write_identity(out),
            Self::Container(container) => {
                push_escaped(out, container.name());
                out.push('.');
                container.inner().write_identity(out);
            }
            Self::Composite(composite) => {
                push_escaped(out, composite.name());
                for member in composite.members() {
                    out.push('.');
                    member.write_identity(out);
                }
            }
            Self::Reverse(inner) => {
                out.push_str("Reverse.");
                inner.write_identity(out);
            }
        }
    }

    /// Returns `true` if `text` satisfies this validator.
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Atomic(atomic) => atomic.matches(text),
            Self::Container(container) => container.inner().matches(text),
            Self::Composite(composite) => {
                composite.members().iter().all(|member| member.matches(text))
            }
            Self::Reverse(inner) => !inner.matches(text),
        }
    }

    /// The style applied to tokens this validator selects, if any.
    pub fn selection_style(&self) -> Option<&Style> {
        match self {
            Self::Atomic(_) | Self::Reverse(_) => None,
            Self::Container(container) => container
                .style()
                .or_else(|| container.inner().selection_style()),
            Self::Composite(composite) => composite.style(),
        }
    }

    /// The text shown instead of the token text for tokens this validator selects, if any.
    pub fn replacement_text(&self) -> Option<&str> {
        match self {
            Self::Atomic(_) | Self::Reverse(_) => None,
            Self::Container(container) => container
                .replacement_text()
                .or_else(|| container.inner().replacement_text()),
            Self::Composite(composite) => composite.replacement_text(),
        }
    }

    /// The longest prefix literal this validator requires, if it requires one.
    ///
    /// Used by [`LongestPrefixWins`](crate::LongestPrefixWins) to rank conflicting
    /// validators.
    pub fn required_prefix(&self) -> Option<&str> {
        match self {
            Self::Atomic(Atomic::Prefix(literal)) => Some(literal.as_str()),
            Self::Atomic(_) | Self::Reverse(_) => None,
            Self::Container(container) => container.inner().required_prefix(),
            Self::Composite(composite) => composite
                .members()
                .iter()
                .filter_map(Self::required_prefix)
                .max_by_key(|prefix| prefix.len()),
        }
    }
}

/// Appends `part` to an identity, escaping the separator.
fn push_escaped(out: &mut String, part: &str) {
    for ch in part.chars() {
        if matches!(ch, '.' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
}

impl From<Atomic> for Validator {
    fn from(atomic: Atomic) -> Self {
        Self::Atomic(atomic)
    }
}

impl From<Container> for Validator {
    fn from(container: Container) -> Self {
        Self::Container(container)
    }
}

impl From<Composite> for Validator {
    fn from(composite: Composite) -> Self {
        Self::Composite(composite)
    }
}

impl PartialEq for Validator {
    /// Validators are equal when their identities are.
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Validator {}
