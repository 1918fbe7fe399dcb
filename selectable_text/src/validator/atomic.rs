// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};

use regex::{Regex, RegexBuilder};

use super::push_escaped;
use crate::Error;

/// Appended to the operation name of identities whose case handling is not the default.
const CASE_SENSITIVE: &str = "_case_sensitive";

/// A literal compared against token text.
///
/// Literals compare case-insensitively unless built with [`Literal::case_sensitive`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Literal {
    text: String,
    folded: String,
    case_sensitive: bool,
}

impl Literal {
    /// A literal that ignores case.
    pub fn new(text: impl Into<String>) -> Self {
        Self::build(text.into(), false)
    }

    /// A literal that respects case.
    pub fn case_sensitive(text: impl Into<String>) -> Self {
        Self::build(text.into(), true)
    }

    fn build(text: String, case_sensitive: bool) -> Self {
        let folded = if case_sensitive {
            String::new()
        } else {
            text.to_lowercase()
        };
        Self {
            text,
            folded,
            case_sensitive,
        }
    }

    /// The literal text, as given.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether comparisons respect case.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    fn compare(&self, text: &str, test: impl Fn(&str, &str) -> bool) -> bool {
        if self.case_sensitive {
            test(text, &self.text)
        } else {
            test(&text.to_lowercase(), &self.folded)
        }
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Literal {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A compiled regular expression.
///
/// The expression is compiled once, when the pattern is built.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
    case_sensitive: bool,
}

impl Pattern {
    /// Compiles `pattern`, ignoring case.
    pub fn new(pattern: &str) -> Result<Self, Error> {
        Self::build(pattern, false)
    }

    /// Compiles `pattern`, respecting case.
    pub fn case_sensitive(pattern: &str) -> Result<Self, Error> {
        Self::build(pattern, true)
    }

    fn build(pattern: &str, case_sensitive: bool) -> Result<Self, Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            regex,
            case_sensitive,
        })
    }

    /// The source pattern.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether matching respects case.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

/// A leaf predicate.
#[derive(Clone, Debug)]
pub enum Atomic {
    /// The text equals the literal.
    Matches(Literal),
    /// The text contains the literal.
    Contains(Literal),
    /// The text starts with the literal.
    Prefix(Literal),
    /// The text ends with the literal.
    Suffix(Literal),
    /// The pattern finds a match somewhere in the text.
    Regex(Pattern),
}

impl Atomic {
    pub(super) fn matches(&self, text: &str) -> bool {
        match self {
            Self::Matches(literal) => literal.compare(text, |text, lit| text == lit),
            Self::Contains(literal) => literal.compare(text, |text, lit| text.contains(lit)),
            Self::Prefix(literal) => literal.compare(text, |text, lit| text.starts_with(lit)),
            Self::Suffix(literal) => literal.compare(text, |text, lit| text.ends_with(lit)),
            Self::Regex(pattern) => pattern.regex.is_match(text),
        }
    }

    pub(super) fn write_identity(&self, out: &mut String) {
        let (kind, operation, parameter, case_sensitive) = match self {
            Self::Matches(l) => ("Matches", "matches", l.as_str(), l.case_sensitive),
            Self::Contains(l) => ("Contains", "contains", l.as_str(), l.case_sensitive),
            Self::Prefix(l) => ("Prefix", "begins_with", l.as_str(), l.case_sensitive),
            Self::Suffix(l) => ("Suffix", "ends_with", l.as_str(), l.case_sensitive),
            Self::Regex(p) => ("Regex", "regex_matches", p.as_str(), p.case_sensitive),
        };
        out.push_str(kind);
        out.push('.');
        out.push_str(operation);
        if case_sensitive {
            out.push_str(CASE_SENSITIVE);
        }
        out.push('.');
        push_escaped(out, parameter);
    }
}
