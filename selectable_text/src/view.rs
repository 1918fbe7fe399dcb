// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stateful front end tying the tokenizer, the styling pass and the layout engine
//! together.

use alloc::vec::Vec;

use peniko::color::palette::css;
use peniko::kurbo::{Rect, Size, Vec2};

use crate::layout::{
    fold_truncation, layout, Alignment, ExpansionControl, LayoutConfig, LayoutResult,
    TruncationMode,
};
use crate::registry::ConflictResolver;
use crate::style::DEFAULT_FONT_SIZE;
use crate::{
    style_tokens, tokenize, Error, Style, StyleProperty, StyledText, TextMeasurer, Token,
    TokenizerConfig, Validator, ValidatorRegistry,
};

/// Space between the container's edges and the laid out text.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Insets {
    /// Space above the first line.
    pub top: f64,
    /// Space before the start of every line.
    pub left: f64,
    /// Space below the last line.
    pub bottom: f64,
    /// Space after the end of every line.
    pub right: f64,
}

impl Insets {
    /// Creates insets from each edge.
    pub fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on every edge.
    pub fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Sum of the left and right insets.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of the top and bottom insets.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Content size reported by [`SelectableText::layout`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutOutcome {
    /// Size of the new layout.
    pub content_size: Size,
    /// Size of the previous layout, if there was one.
    pub previous_content_size: Option<Size>,
}

impl LayoutOutcome {
    /// Returns `true` if the content height differs from the previous layout's.
    ///
    /// The first layout always counts as a change.
    pub fn height_changed(&self) -> bool {
        self.previous_content_size
            .is_none_or(|previous| previous.height != self.content_size.height)
    }
}

/// What [`SelectableText::select`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection action of the validator claiming the token ran.
    Action,
    /// The expansion control was toggled.
    ToggledExpansion,
    /// Nothing happened.
    Ignored,
}

/// Selectable rich text.
///
/// Owns the text, its tokens, the registered validators and the layout parameters, and
/// keeps the derived state in sync: every change re-tokenizes and re-styles the text and
/// drops the current layout.
///
/// ```
/// use selectable_text::{validator, MonospaceMeasurer, SelectableText, SelectionOutcome};
///
/// let mut text = SelectableText::new("Follow #rust for updates");
/// text.set_width(400.0);
/// text.register_validator(validator::hashtag(), |word, _| assert_eq!(word, "#rust"))
///     .unwrap();
///
/// text.layout(&MonospaceMeasurer::default());
/// assert_eq!(text.select(2), SelectionOutcome::Action);
/// assert_eq!(text.select(0), SelectionOutcome::Ignored);
/// ```
#[derive(Debug)]
pub struct SelectableText {
    text: StyledText,
    tokenizer: TokenizerConfig,
    registry: ValidatorRegistry,
    selection_style: Style,
    expansion_style: Style,
    width: f64,
    config: LayoutConfig,
    expansion: Option<ExpansionControl>,
    insets: Insets,
    selection_enabled: bool,
    overflow_fallback: TruncationMode,
    /// Styled tokens as produced from the text. Layout always starts from these.
    styled: Vec<Token>,
    /// `styled` with the truncation edit of the last layout applied.
    tokens: Vec<Token>,
    layout: Option<LayoutResult>,
    content_size: Option<Size>,
}

impl Default for SelectableText {
    fn default() -> Self {
        Self::new("")
    }
}

impl SelectableText {
    /// Creates selectable text with the default styles, capped to a single line.
    pub fn new(text: &str) -> Self {
        let mut this = Self {
            text: StyledText::new(text).with_default_style(default_style()),
            tokenizer: TokenizerConfig::default(),
            registry: ValidatorRegistry::new(),
            selection_style: default_selection_style(),
            expansion_style: default_expansion_style(),
            width: 0.0,
            config: LayoutConfig::default().with_max_lines(1),
            expansion: None,
            insets: Insets::default(),
            selection_enabled: true,
            overflow_fallback: TruncationMode::TailTruncate,
            styled: Vec::new(),
            tokens: Vec::new(),
            layout: None,
            content_size: None,
        };
        this.invalidate();
        this
    }

    /// Replaces the text, keeping the current default style.
    pub fn set_text(&mut self, text: &str) {
        let style = self.text.default_style().clone();
        self.text = StyledText::new(text).with_default_style(style);
        self.invalidate();
    }

    /// Replaces the text along with its styling.
    pub fn set_styled_text(&mut self, text: StyledText) {
        self.text = text;
        self.invalidate();
    }

    /// The current text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// The current text and its styling.
    pub fn styled_text(&self) -> &StyledText {
        &self.text
    }

    /// Sets the style of text not covered by any span.
    pub fn set_default_style(&mut self, style: Style) {
        self.text.set_default_style(style);
        self.invalidate();
    }

    /// Sets the base style of tokens claimed by a validator.
    ///
    /// A validator's own selection style is merged over it.
    pub fn set_selection_style(&mut self, style: Style) {
        self.selection_style = style;
        self.invalidate();
    }

    /// Sets the tokenizer configuration.
    pub fn set_tokenizer_config(&mut self, config: TokenizerConfig) {
        self.tokenizer = config;
        self.invalidate();
    }

    /// Sets the width of the container, insets included.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
        self.invalidate();
    }

    /// Sets the alignment of each line.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.config.alignment = alignment;
        self.invalidate();
    }

    /// Sets the line cap, where `0` means unbounded.
    ///
    /// With an expansion control present the control is marked expanded exactly when
    /// `max_lines` equals its expanded line count.
    pub fn set_max_lines(&mut self, max_lines: usize) {
        self.config.max_lines = max_lines;
        if let Some(expansion) = &mut self.expansion {
            expansion.set_expanded(max_lines == expansion.expanded_line_count());
        }
        self.invalidate();
    }

    /// The line cap currently in effect.
    pub fn max_lines(&self) -> usize {
        self.expansion
            .as_ref()
            .map_or(self.config.max_lines, ExpansionControl::line_count)
    }

    /// Sets how text past the line cap is treated.
    pub fn set_truncation(&mut self, truncation: TruncationMode) {
        self.config.truncation = truncation;
        self.invalidate();
    }

    /// Sets the gap between lines.
    pub fn set_line_spacing(&mut self, line_spacing: f64) {
        self.config.line_spacing = line_spacing;
        self.invalidate();
    }

    /// Sets the space between the container's edges and the text.
    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
        self.invalidate();
    }

    /// The current insets.
    pub fn insets(&self) -> Insets {
        self.insets
    }

    /// Enables or disables the selection actions of validators.
    ///
    /// The expansion control responds to selection either way.
    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }

    /// Sets the mode suggested by [`Self::line_break_fallback`] for malformed tokens.
    pub fn set_overflow_fallback(&mut self, mode: TruncationMode) {
        self.overflow_fallback = mode;
    }

    /// Registers `validator` with an action run when a token it claims is selected.
    pub fn register_validator(
        &mut self,
        validator: Validator,
        on_select: impl Fn(&str, &Validator) + Send + Sync + 'static,
    ) -> Result<(), Error> {
        self.registry.register(validator, on_select)?;
        self.invalidate();
        Ok(())
    }

    /// Removes the validator sharing `validator`'s identity.
    pub fn unregister_validator(&mut self, validator: &Validator) -> bool {
        let removed = self.registry.unregister(validator);
        if removed {
            self.invalidate();
        }
        removed
    }

    /// Replaces the policy used when several validators claim the same word.
    pub fn set_conflict_resolver(
        &mut self,
        resolver: impl ConflictResolver + Send + Sync + 'static,
    ) {
        self.registry.set_conflict_resolver(resolver);
        self.invalidate();
    }

    /// The registered validators.
    pub fn registry(&self) -> &ValidatorRegistry {
        &self.registry
    }

    /// Adds a collapsed expansion control.
    ///
    /// `style` is merged over the default expansion style. The line cap becomes the
    /// control's collapsed line count.
    pub fn add_expansion(
        &mut self,
        collapsed_text: &str,
        collapsed_lines: usize,
        expanded_text: &str,
        expanded_lines: usize,
        style: Option<&Style>,
    ) -> Result<(), Error> {
        let style = match style {
            Some(style) => self.expansion_style.merged(style),
            None => self.expansion_style.clone(),
        };
        let control = ExpansionControl::new(
            collapsed_text,
            collapsed_lines,
            expanded_text,
            expanded_lines,
            style,
        )?;
        self.config.max_lines = control.line_count();
        self.expansion = Some(control);
        self.invalidate();
        Ok(())
    }

    /// Removes the expansion control and caps the text to `max_lines`.
    pub fn remove_expansion(&mut self, max_lines: usize) {
        self.expansion = None;
        self.config.max_lines = max_lines;
        self.invalidate();
    }

    /// Switches the expansion control between its collapsed and expanded state.
    pub fn toggle_expansion(&mut self) -> Result<(), Error> {
        let expansion = self.expansion.as_mut().ok_or(Error::NoExpansionControl)?;
        expansion.toggle();
        self.config.max_lines = expansion.line_count();
        tracing::debug!(expanded = expansion.is_expanded(), "toggled expansion");
        self.invalidate();
        Ok(())
    }

    /// Whether the expansion control is expanded, or `None` without one.
    pub fn is_expanded(&self) -> Option<bool> {
        self.expansion.as_ref().map(ExpansionControl::is_expanded)
    }

    /// Expands or collapses the expansion control.
    pub fn set_expanded(&mut self, expanded: bool) -> Result<(), Error> {
        match self.is_expanded() {
            None => Err(Error::NoExpansionControl),
            Some(current) if current == expanded => Ok(()),
            Some(_) => self.toggle_expansion(),
        }
    }

    /// The expansion control, if present.
    pub fn expansion(&self) -> Option<&ExpansionControl> {
        self.expansion.as_ref()
    }

    /// The styled tokens, with the truncation edit of the last layout applied.
    ///
    /// The edit only affects what is shown. Every layout starts again from the tokens as
    /// produced from the text, so repeated layouts agree.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The last layout, unless something changed since.
    pub fn layout_result(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    /// Lays out the tokens and applies the resulting truncation edit to [`Self::tokens`].
    ///
    /// Frames are relative to the text area inside the insets.
    pub fn layout(&mut self, measurer: &impl TextMeasurer) -> LayoutOutcome {
        let result = layout(
            &self.styled,
            &self.layout_config(self.width),
            self.expansion.as_ref(),
            measurer,
        );
        self.tokens.clone_from(&self.styled);
        if let Some(edit) = result.truncation() {
            fold_truncation(&mut self.tokens, edit);
        }
        let content_size = result.content_size();
        let previous_content_size = self.content_size.replace(content_size);
        self.layout = Some(result);
        LayoutOutcome {
            content_size,
            previous_content_size,
        }
    }

    /// Frames of the visible words `validator` matches, relative to the container.
    ///
    /// Empty until [`Self::layout`] has run.
    pub fn frames_matching(&self, validator: &Validator) -> Vec<Rect> {
        let Some(result) = &self.layout else {
            return Vec::new();
        };
        let offset = Vec2::new(self.insets.left, self.insets.top);
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_word() && validator.matches(self.source_text(token)))
            .filter_map(|(index, _)| result.frame(index))
            .map(|frame| frame + offset)
            .collect()
    }

    /// Handles a selection of the token at `index`.
    ///
    /// The index one past the last token addresses the expansion control.
    pub fn select(&mut self, index: usize) -> SelectionOutcome {
        if index == self.tokens.len() && self.expansion.is_some() {
            return match self.toggle_expansion() {
                Ok(()) => SelectionOutcome::ToggledExpansion,
                Err(_) => SelectionOutcome::Ignored,
            };
        }
        if !self.selection_enabled {
            return SelectionOutcome::Ignored;
        }
        let Some(token) = self.tokens.get(index).filter(|token| token.is_word()) else {
            return SelectionOutcome::Ignored;
        };
        if self.registry.perform_action(self.source_text(token)) {
            SelectionOutcome::Action
        } else {
            SelectionOutcome::Ignored
        }
    }

    /// The mode a renderer should use for the token at `index` if the last layout marked it
    /// malformed.
    pub fn line_break_fallback(&self, index: usize) -> Option<TruncationMode> {
        self.layout
            .as_ref()
            .filter(|result| result.is_malformed(index))
            .map(|_| self.overflow_fallback)
    }

    /// The size the text wants within `proposed`, insets included.
    ///
    /// Lays out at the proposed width without touching the current layout. The height is
    /// capped at the proposed height.
    pub fn size_that_fits(&self, proposed: Size, measurer: &impl TextMeasurer) -> Size {
        let result = layout(
            &self.styled,
            &self.layout_config(proposed.width),
            self.expansion.as_ref(),
            measurer,
        );
        let height = result.content_size().height + self.insets.vertical();
        Size::new(proposed.width, height.min(proposed.height))
    }

    fn layout_config(&self, width: f64) -> LayoutConfig {
        let mut config = self.config.clone();
        config.width = (width - self.insets.horizontal()).max(0.0);
        config
    }

    fn source_text<'a>(&'a self, token: &'a Token) -> &'a str {
        self.text.as_str().get(token.range()).unwrap_or(token.text())
    }

    fn invalidate(&mut self) {
        let tokens = tokenize(&self.text, &self.tokenizer);
        self.styled = style_tokens(&tokens, &self.registry, &self.selection_style);
        self.tokens.clone_from(&self.styled);
        self.layout = None;
    }
}

fn default_style() -> Style {
    Style::from(StyleProperty::Foreground(css::BLACK))
        .with(StyleProperty::FontSize(DEFAULT_FONT_SIZE))
}

fn default_selection_style() -> Style {
    Style::from(StyleProperty::Foreground(css::DODGER_BLUE))
        .with(StyleProperty::FontWeight(700.0))
        .with(StyleProperty::FontSize(DEFAULT_FONT_SIZE + 2.0))
}

fn default_expansion_style() -> Style {
    Style::from(StyleProperty::Foreground(css::DODGER_BLUE))
        .with(StyleProperty::FontWeight(700.0))
        .with(StyleProperty::FontSize(DEFAULT_FONT_SIZE - 2.0))
}
