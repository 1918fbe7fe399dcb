// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tokens and the tokenizer that produces them.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{Style, StyledText};

/// The kind of a [`Token`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of characters that are not spaces, tabs, newlines or terminators.
    Word,
    /// A run of `' '` characters.
    Space,
    /// A run of `'\n'` characters.
    NewLine,
    /// A run of `'\t'` characters.
    Tab,
    /// A run of `'\0'` characters.
    ///
    /// Terminators let authored text carry an invisible boundary. They are classified like
    /// any other run but never emitted.
    Terminator,
}

impl TokenKind {
    /// Classifies a single character.
    pub fn of(ch: char) -> Self {
        match ch {
            ' ' => Self::Space,
            '\n' => Self::NewLine,
            '\t' => Self::Tab,
            '\0' => Self::Terminator,
            _ => Self::Word,
        }
    }

    fn source_char(self) -> Option<char> {
        match self {
            Self::Space => Some(' '),
            Self::NewLine => Some('\n'),
            Self::Tab => Some('\t'),
            Self::Terminator => Some('\0'),
            Self::Word => None,
        }
    }
}

/// An atomic unit of display text.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    kind: TokenKind,
    range: Range<usize>,
    len: usize,
    text: String,
    display_text: Option<String>,
    style: Style,
    selectable: bool,
    truncated: bool,
}

impl Token {
    /// Creates a word token.
    pub fn word(text: impl Into<String>, range: Range<usize>, style: Style) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            kind: TokenKind::Word,
            range,
            len,
            text,
            display_text: None,
            style,
            selectable: false,
            truncated: false,
        }
    }

    /// Creates a space token standing for `len` source spaces.
    pub fn space(len: usize, range: Range<usize>, style: Style) -> Self {
        Self::synthesized(TokenKind::Space, " ".repeat(len), len, range, style)
    }

    /// Creates a tab token standing for `len` source tabs, each shown as `tab_width` spaces.
    pub fn tab(len: usize, tab_width: usize, range: Range<usize>, style: Style) -> Self {
        Self::synthesized(TokenKind::Tab, " ".repeat(len * tab_width), len, range, style)
    }

    /// Creates a newline token standing for `len` source line breaks.
    pub fn new_line(len: usize, range: Range<usize>, style: Style) -> Self {
        Self::synthesized(TokenKind::NewLine, String::new(), len, range, style)
    }

    fn synthesized(
        kind: TokenKind,
        text: String,
        len: usize,
        range: Range<usize>,
        style: Style,
    ) -> Self {
        Self {
            kind,
            range,
            len,
            text,
            display_text: None,
            style,
            selectable: false,
            truncated: false,
        }
    }

    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns `true` for word tokens.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// The byte range of the source text this token was built from.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The number of source characters in this token's run.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the token covers no source characters.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The token text.
    ///
    /// For words this is the source substring, for spaces and tabs the synthesized run of
    /// spaces, and for newlines the empty string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text shown instead of [`Self::text`], if any.
    pub fn display_text(&self) -> Option<&str> {
        self.display_text.as_deref()
    }

    /// The text that is measured and drawn.
    pub fn visible_text(&self) -> &str {
        self.display_text.as_deref().unwrap_or(&self.text)
    }

    /// The style of this token.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Returns `true` if the token matched a validator and may be selected.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Returns `true` if a truncation edit has been folded into this token.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Reconstructs the source text this token was built from.
    pub fn source_text(&self) -> String {
        match self.kind.source_char() {
            Some(ch) => core::iter::repeat_n(ch, self.len).collect(),
            None => self.text.clone(),
        }
    }

    /// Sets the style of this token.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Sets the text shown instead of [`Self::text`].
    pub fn set_display_text(&mut self, display_text: Option<String>) {
        self.display_text = display_text;
    }

    /// Marks the token as selectable.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub(crate) fn apply_truncation(&mut self, replacement: &str) {
        if self.display_text.is_some() {
            self.display_text = Some(replacement.into());
        } else {
            self.text = replacement.into();
        }
        self.truncated = true;
    }
}

/// Configuration for [`tokenize`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenizerConfig {
    /// Number of spaces shown per tab character.
    pub tab_width: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { tab_width: 4 }
    }
}

impl TokenizerConfig {
    /// Returns this configuration with `tab_width` spaces shown per tab.
    #[must_use]
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }
}

/// Splits `styled` into tokens in document order.
///
/// Consecutive characters of the same [`TokenKind`] form one token whose style is the
/// style at the start of the run. Terminator runs are dropped.
pub fn tokenize(styled: &StyledText, config: &TokenizerConfig) -> Vec<Token> {
    let text = styled.as_str();
    let mut tokens = Vec::new();
    let mut chars = text.char_indices();
    let Some((_, first)) = chars.next() else {
        return tokens;
    };

    let mut run_kind = TokenKind::of(first);
    let mut run_start = 0;
    let mut run_len = 1;
    for (index, ch) in chars {
        let kind = TokenKind::of(ch);
        if kind != run_kind {
            push_run(&mut tokens, styled, config, run_kind, run_start..index, run_len);
            run_kind = kind;
            run_start = index;
            run_len = 0;
        }
        run_len += 1;
    }
    push_run(
        &mut tokens,
        styled,
        config,
        run_kind,
        run_start..text.len(),
        run_len,
    );
    tokens
}

/// Tokenizes unstyled text with the default configuration.
pub fn tokenize_str(text: &str) -> Vec<Token> {
    tokenize(&StyledText::new(text), &TokenizerConfig::default())
}

fn push_run(
    tokens: &mut Vec<Token>,
    styled: &StyledText,
    config: &TokenizerConfig,
    kind: TokenKind,
    range: Range<usize>,
    len: usize,
) {
    let style = styled.style_at(range.start);
    let token = match kind {
        TokenKind::Word => Token::word(&styled.as_str()[range.clone()], range, style),
        TokenKind::Space => Token::space(len, range, style),
        TokenKind::Tab => Token::tab(len, config.tab_width, range, style),
        TokenKind::NewLine => Token::new_line(len, range, style),
        TokenKind::Terminator => return,
    };
    tokens.push(token);
}
