//! Configuration file parsing for Atlas Explorer
//!
//! Settings live in `<config_dir>/atlas-explorer/config.toml` unless a path is
//! given on the command line. Nothing is ever written back.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, parse_settings, CONFIG_FILENAME};
pub use types::*;
