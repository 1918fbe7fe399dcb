// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text samples shared between tests.

/// Five words of four letters; each word is 40 units wide and each space 10.
pub(crate) const FOUR_LETTER_WORDS: &str = "aaaa bbbb cccc dddd eeee";

/// Words and mentions mixed with plain text.
pub(crate) const SOCIAL: &str = "Shine on #Stars with @friends https://example.com";

/// A templated greeting with a placeholder.
pub(crate) const TEMPLATE: &str = "Hello {{my_name}} and {{other}}";

/// Runs of every whitespace class, plus a terminator.
pub(crate) const WHITESPACE: &str = "one  two\n\n\tthree\0four";
