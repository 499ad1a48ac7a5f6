pub mod color_picker;
pub mod color_range_selector;
pub mod custom_palette_panel;

pub use color_picker::*;
pub use color_range_selector::*;
pub use custom_palette_panel::*;
