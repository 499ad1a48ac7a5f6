pub mod config;
pub mod i18n;
pub mod theme;

pub use config::*;
pub use i18n::*;
pub use theme::*;
