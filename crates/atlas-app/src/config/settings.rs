//! Settings loading

use std::path::{Path, PathBuf};

use atlas_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "atlas-explorer";

/// `<config_dir>/atlas-explorer/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    toml::from_str(content).map_err(|e| Error::config(e.to_string()))
}

/// Load settings from `path`, or from the default location.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let Some(config_path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        debug!("No config directory on this platform, using defaults");
        return Settings::default();
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_path() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("atlas-explorer/config.toml"));
        }
    }

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        let settings = load_settings(Some(&temp.path().join("config.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        let config = r#"
[catalog]
base_url = "http://localhost:8080/v3.1"
request_timeout_secs = 10

[ui]
theme = "dark"
"#;
        std::fs::write(&path, config).unwrap();

        let settings = load_settings(Some(&path));

        assert_eq!(settings.catalog.base_url, "http://localhost:8080/v3.1");
        assert_eq!(settings.catalog.request_timeout_secs, Some(10));
        assert_eq!(settings.catalog.list_fields.len(), 5);
        assert_eq!(settings.ui.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[catalog\nbase_url = ").unwrap();

        let settings = load_settings(Some(&path));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_settings_rejects_unknown_theme() {
        let err = parse_settings("[ui]\ntheme = \"sepia\"\n").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_parse_settings_partial() {
        let settings = parse_settings("[ui]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(settings.catalog, Default::default());
        assert_eq!(settings.ui.theme, ThemeMode::Dark);
    }
}
