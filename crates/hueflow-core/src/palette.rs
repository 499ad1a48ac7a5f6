//! Color ranges used to style data layers
//!
//! A `ColorRange` is an ordered list of hex colors plus naming metadata.
//! The custom palette editor never mutates a range in place: every edit
//! builds a new color sequence which the owner then stores wholesale.

use crate::color::normalize_hex;
use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Name given to every palette built in the custom palette editor
pub const CUSTOM_PALETTE_NAME: &str = "Custom Palette";

/// Category of a custom palette while it is being edited
pub const EDIT_CATEGORY: &str = "Uber";

/// Category of a custom palette once it has been confirmed
pub const CUSTOM_CATEGORY: &str = "custom";

/// Color appended when a palette unexpectedly has no colors to duplicate
pub const DEFAULT_STEP_COLOR: &str = "#FFFFFF";

/// An ordered color ramp with metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRange {
    /// Display name
    pub name: String,
    /// Ramp type such as "sequential" or "diverging"
    #[serde(rename = "type", default)]
    pub palette_type: Option<String>,
    /// Grouping category
    pub category: String,
    /// Hex color strings, first to last
    pub colors: Vec<String>,
}

impl Default for ColorRange {
    fn default() -> Self {
        Self::custom(vec![DEFAULT_STEP_COLOR.to_string()])
    }
}

impl ColorRange {
    /// Create a named color range
    pub fn new(
        name: impl Into<String>,
        palette_type: Option<&str>,
        category: impl Into<String>,
        colors: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            palette_type: palette_type.map(str::to_string),
            category: category.into(),
            colors,
        }
    }

    /// A palette as republished by the editor after each change
    pub fn custom(colors: Vec<String>) -> Self {
        Self {
            name: CUSTOM_PALETTE_NAME.to_string(),
            palette_type: None,
            category: EDIT_CATEGORY.to_string(),
            colors,
        }
    }

    /// The palette handed to the layer when the user confirms
    pub fn finalized(&self) -> Self {
        Self {
            name: CUSTOM_PALETTE_NAME.to_string(),
            palette_type: None,
            category: CUSTOM_CATEGORY.to_string(),
            colors: self.colors.clone(),
        }
    }

    /// Check the at-least-one-color invariant
    pub fn validate(&self) -> Result<()> {
        if self.colors.is_empty() {
            return Err(CoreError::EmptyPalette(self.name.clone()));
        }
        Ok(())
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the range has no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Whether this range was built in the custom palette editor
    pub fn is_custom(&self) -> bool {
        self.name == CUSTOM_PALETTE_NAME
    }

    /// Colors with the last one appended again
    pub fn with_color_added(&self, fallback: &str) -> Vec<String> {
        let mut colors = self.colors.clone();
        let last = colors
            .last()
            .cloned()
            .unwrap_or_else(|| fallback.to_string());
        colors.push(last);
        colors
    }

    /// Colors without the entry at `index`; never removes the final color
    pub fn with_color_deleted(&self, index: usize) -> Vec<String> {
        let mut colors = self.colors.clone();
        if colors.len() > 1 && index < colors.len() {
            colors.remove(index);
        }
        colors
    }

    /// Colors with `index` replaced by the uppercased `color`
    pub fn with_color_updated(&self, index: usize, color: &str) -> Vec<String> {
        let mut colors = self.colors.clone();
        if let Some(slot) = colors.get_mut(index) {
            *slot = normalize_hex(color);
        }
        colors
    }

    /// Colors with the entry at `from` moved to `to`
    pub fn with_color_moved(&self, from: usize, to: usize) -> Vec<String> {
        array_move(&self.colors, from, to)
    }
}

/// Remove the item at `from` and insert it at `to`.
///
/// An out-of-range `from` leaves the order unchanged; `to` is clamped to the
/// last position.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = items.to_vec();
    if from >= moved.len() {
        return moved;
    }
    let item = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, item);
    moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(colors: &[&str]) -> ColorRange {
        ColorRange::custom(colors.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_custom_metadata() {
        let r = range(&["#000000"]);
        assert_eq!(r.name, CUSTOM_PALETTE_NAME);
        assert_eq!(r.category, EDIT_CATEGORY);
        assert!(r.palette_type.is_none());
        assert!(r.is_custom());
    }

    #[test]
    fn test_finalized_switches_category() {
        let r = range(&["#000000", "#FFFFFF"]);
        let done = r.finalized();
        assert_eq!(done.category, CUSTOM_CATEGORY);
        assert_eq!(done.colors, r.colors);
    }

    #[test]
    fn test_add_with_empty_uses_fallback() {
        let r = ColorRange::custom(Vec::new());
        assert_eq!(r.with_color_added("#123456"), vec!["#123456"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let r = range(&["#000000", "#FFFFFF"]);
        assert_eq!(r.with_color_deleted(7), r.colors);
    }

    #[test]
    fn test_array_move_forward_and_back() {
        let items = ["a", "b", "c", "d"];
        assert_eq!(array_move(&items, 0, 2), vec!["b", "c", "a", "d"]);
        assert_eq!(array_move(&items, 3, 0), vec!["d", "a", "b", "c"]);
        assert_eq!(array_move(&items, 1, 1), vec!["a", "b", "c", "d"]);
        assert_eq!(array_move(&items, 1, 99), vec!["a", "c", "d", "b"]);
        assert_eq!(array_move(&items, 9, 0), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_json_shape() {
        let r = ColorRange::new(
            "Global Warming",
            Some("sequential"),
            "Uber",
            vec!["#5A1846".to_string()],
        );
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["type"], "sequential");
        assert_eq!(json["colors"][0], "#5A1846");

        let custom: ColorRange = serde_json::from_str(
            r##"{"name":"Custom Palette","type":null,"category":"custom","colors":["#FFF"]}"##,
        )
        .unwrap();
        assert!(custom.palette_type.is_none());
    }

    #[test]
    fn test_validate_empty() {
        let r = ColorRange::custom(Vec::new());
        assert_eq!(
            r.validate(),
            Err(CoreError::EmptyPalette(CUSTOM_PALETTE_NAME.to_string()))
        );
    }
}
