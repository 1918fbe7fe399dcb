// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use super::Validator;
use crate::Style;

/// Wraps exactly one validator.
///
/// A container matches whatever its inner validator matches. Its selection style and
/// replacement text, when set, take precedence over the inner validator's.
///
/// The `name` replaces `"Container"` at the head of the identity. Named containers are how
/// the preset validators stay distinct from a bare wrapper around the same predicate.
#[derive(Clone, Debug)]
pub struct Container {
    name: Cow<'static, str>,
    inner: Box<Validator>,
    style: Option<Style>,
    replacement_text: Option<String>,
}

impl Container {
    /// Wraps `inner` without overrides.
    pub fn new(inner: impl Into<Validator>) -> Self {
        Self {
            name: Cow::Borrowed("Container"),
            inner: Box::new(inner.into()),
            style: None,
            replacement_text: None,
        }
    }

    /// Sets the name used at the head of the identity.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Overrides the selection style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Overrides the replacement text.
    #[must_use]
    pub fn with_replacement_text(mut self, text: impl Into<String>) -> Self {
        self.replacement_text = Some(text.into());
        self
    }

    /// The name at the head of the identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped validator.
    pub fn inner(&self) -> &Validator {
        &self.inner
    }

    /// The overriding selection style, if set.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// The overriding replacement text, if set.
    pub fn replacement_text(&self) -> Option<&str> {
        self.replacement_text.as_deref()
    }
}

/// Requires every member to match, checked in order.
#[derive(Clone, Debug)]
pub struct Composite {
    name: Cow<'static, str>,
    members: Vec<Validator>,
    style: Option<Style>,
    replacement_text: Option<String>,
}

impl Composite {
    /// Builds a conjunction of `members`.
    pub fn new(members: impl IntoIterator<Item = Validator>) -> Self {
        Self {
            name: Cow::Borrowed("Composite"),
            members: members.into_iter().collect(),
            style: None,
            replacement_text: None,
        }
    }

    /// Sets the name used at the head of the identity.
    #[must_use]
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the selection style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the replacement text.
    #[must_use]
    pub fn with_replacement_text(mut self, text: impl Into<String>) -> Self {
        self.replacement_text = Some(text.into());
        self
    }

    /// The name at the head of the identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The members, in evaluation order.
    pub fn members(&self) -> &[Validator] {
        &self.members
    }

    /// The selection style, if set.
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    /// The replacement text, if set.
    pub fn replacement_text(&self) -> Option<&str> {
        self.replacement_text.as_deref()
    }
}
