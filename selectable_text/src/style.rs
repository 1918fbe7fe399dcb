// Copyright 2026 the Selectable Text Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style properties carried by tokens.

use alloc::collections::BTreeMap;
use alloc::sync::Arc;

use peniko::Color;

/// Font size used when a style does not specify one.
pub const DEFAULT_FONT_SIZE: f32 = 17.0;

/// Identifies the slot a [`StyleProperty`] occupies inside a [`Style`].
///
/// A style holds at most one property per key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    /// See [`StyleProperty::Foreground`].
    Foreground,
    /// See [`StyleProperty::Background`].
    Background,
    /// See [`StyleProperty::SelectedBackground`].
    SelectedBackground,
    /// See [`StyleProperty::FontFamily`].
    FontFamily,
    /// See [`StyleProperty::FontSize`].
    FontSize,
    /// See [`StyleProperty::FontWeight`].
    FontWeight,
    /// See [`StyleProperty::Italic`].
    Italic,
    /// See [`StyleProperty::Underline`].
    Underline,
    /// See [`StyleProperty::Strikethrough`].
    Strikethrough,
}

/// A single formatting property.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleProperty {
    /// Color of the glyphs.
    Foreground(Color),
    /// Color painted behind the glyphs.
    Background(Color),
    /// Color painted behind a selectable token while it is being pressed.
    SelectedBackground(Color),
    /// Font family name.
    FontFamily(Arc<str>),
    /// Font size in layout units.
    FontSize(f32),
    /// Font weight, on the usual 100 to 900 scale.
    FontWeight(f32),
    /// Italic text.
    Italic(bool),
    /// Underline decoration.
    Underline(bool),
    /// Strikethrough decoration.
    Strikethrough(bool),
}

impl StyleProperty {
    /// Returns the key this property is stored under.
    pub fn key(&self) -> StyleKey {
        match self {
            Self::Foreground(_) => StyleKey::Foreground,
            Self::Background(_) => StyleKey::Background,
            Self::SelectedBackground(_) => StyleKey::SelectedBackground,
            Self::FontFamily(_) => StyleKey::FontFamily,
            Self::FontSize(_) => StyleKey::FontSize,
            Self::FontWeight(_) => StyleKey::FontWeight,
            Self::Italic(_) => StyleKey::Italic,
            Self::Underline(_) => StyleKey::Underline,
            Self::Strikethrough(_) => StyleKey::Strikethrough,
        }
    }
}

/// An immutable map of formatting properties.
///
/// Cloning a style is cheap; modifying a shared style copies it first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    properties: Arc<BTreeMap<StyleKey, StyleProperty>>,
}

impl Style {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this style with `property` set, replacing any property with the same key.
    #[must_use]
    pub fn with(mut self, property: StyleProperty) -> Self {
        self.set(property);
        self
    }

    /// Sets `property`, replacing any property with the same key.
    pub fn set(&mut self, property: StyleProperty) {
        Arc::make_mut(&mut self.properties).insert(property.key(), property);
    }

    /// Removes the property stored under `key`, returning it.
    pub fn remove(&mut self, key: StyleKey) -> Option<StyleProperty> {
        if !self.properties.contains_key(&key) {
            return None;
        }
        Arc::make_mut(&mut self.properties).remove(&key)
    }

    /// Returns the property stored under `key`.
    pub fn get(&self, key: StyleKey) -> Option<&StyleProperty> {
        self.properties.get(&key)
    }

    /// Returns a new style holding the properties of `self` overridden by those of `other`.
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut merged = self.clone();
        let properties = Arc::make_mut(&mut merged.properties);
        for (key, property) in other.properties.iter() {
            properties.insert(*key, property.clone());
        }
        merged
    }

    /// Iterates over the properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleProperty> + '_ {
        self.properties.values()
    }

    /// Returns the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The foreground color, if set.
    pub fn foreground(&self) -> Option<Color> {
        match self.get(StyleKey::Foreground) {
            Some(StyleProperty::Foreground(color)) => Some(*color),
            _ => None,
        }
    }

    /// The font size, or [`DEFAULT_FONT_SIZE`] when unset.
    pub fn font_size(&self) -> f32 {
        match self.get(StyleKey::FontSize) {
            Some(StyleProperty::FontSize(size)) => *size,
            _ => DEFAULT_FONT_SIZE,
        }
    }

    /// Whether the underline decoration is enabled.
    pub fn underline(&self) -> bool {
        matches!(self.get(StyleKey::Underline), Some(StyleProperty::Underline(true)))
    }
}

impl FromIterator<StyleProperty> for Style {
    fn from_iter<I: IntoIterator<Item = StyleProperty>>(iter: I) -> Self {
        let mut style = Self::new();
        for property in iter {
            style.set(property);
        }
        style
    }
}

impl From<StyleProperty> for Style {
    fn from(property: StyleProperty) -> Self {
        Self::new().with(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css;

    #[test]
    fn later_property_replaces_same_key() {
        let style = Style::new()
            .with(StyleProperty::FontSize(12.0))
            .with(StyleProperty::FontSize(20.0));
        assert_eq!(style.len(), 1);
        assert_eq!(style.font_size(), 20.0);
    }

    #[test]
    fn merged_prefers_other() {
        let base = Style::new()
            .with(StyleProperty::Foreground(css::BLACK))
            .with(StyleProperty::FontSize(12.0));
        let over = Style::from(StyleProperty::Foreground(css::RED));
        let merged = base.merged(&over);
        assert_eq!(merged.foreground(), Some(css::RED));
        assert_eq!(merged.font_size(), 12.0);
        // Inputs are untouched.
        assert_eq!(base.foreground(), Some(css::BLACK));
    }

    #[test]
    fn clones_share_until_modified() {
        let a = Style::from(StyleProperty::Underline(true));
        let mut b = a.clone();
        b.set(StyleProperty::Underline(false));
        assert!(a.underline());
        assert!(!b.underline());
    }
}
