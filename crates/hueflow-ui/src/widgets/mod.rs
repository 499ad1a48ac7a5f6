pub mod custom;
pub mod sortable;
pub mod swatch;

// Re-export commonly used custom widgets
pub use custom::*;
pub use sortable::*;
pub use swatch::*;
