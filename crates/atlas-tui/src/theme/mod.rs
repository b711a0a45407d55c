//! Light and dark themes for the TUI.
//!
//! - `palette` - color sets for each [`atlas_app::ThemeMode`]
//! - `styles` - semantic style builders over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
