//! HueFlow Core - Color Range Model
//!
//! This crate contains the UI-independent domain model for HueFlow, including:
//! - Hex color parsing and formatting
//! - Color ranges (palettes) and the custom palette edit operations
//! - Built-in preset ranges
//! - Undo/Redo history
//! - Logging configuration

#![warn(missing_docs)]

use thiserror::Error;

pub mod color;
pub use color::{ColorError, HexColor};

pub mod palette;
pub use palette::{
    array_move, ColorRange, CUSTOM_CATEGORY, CUSTOM_PALETTE_NAME, DEFAULT_STEP_COLOR,
    EDIT_CATEGORY,
};

pub mod presets;

pub mod history;
pub use history::History;

pub mod logging;
pub use logging::LogConfig;

/// Core error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A color range must always hold at least one color
    #[error("Color range '{0}' has no colors")]
    EmptyPalette(String),

    /// A color string could not be interpreted
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ColorError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
