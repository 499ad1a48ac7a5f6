//! HueFlow UI - egui panels for styling map layers
//!
//! This crate provides the user interface layer, including:
//! - Custom palette editor (sortable swatch list, hex editing, picker modal)
//! - Layer color range selector with presets and undo/redo
//! - Theme, localization and user configuration

#![warn(missing_docs)]

// Categorized modules
#[allow(missing_docs)]
pub mod core;
#[allow(missing_docs)]
pub mod panels;
#[allow(missing_docs)]
pub mod widgets;

pub use crate::core::*;
pub use crate::panels::*;
pub use crate::widgets::*;

/// Application-level actions triggered from menus and shortcuts
#[derive(Debug, Clone, PartialEq)]
pub enum UIAction {
    /// Undo the last palette edit
    Undo,
    /// Redo the last undone palette edit
    Redo,
    /// Open the custom palette editor
    EditCustomPalette,
    /// Set UI language
    SetLanguage(String),
    /// Set UI theme
    SetTheme(Theme),
}
