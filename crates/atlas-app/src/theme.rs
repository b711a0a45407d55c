//! Light/dark preference shared by every screen
//!
//! The [`ThemeStore`] is created once when the engine starts and lives inside
//! [`crate::AppState`] for the rest of the process. It is session-only:
//! toggling never touches the configuration file. Fetch and filter state do
//! not read it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThemeStore {
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        tracing::debug!("Theme toggled to {:?}", self.mode);
    }

    /// Label of the toggle control: names the mode it switches *to*
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let store = ThemeStore::default();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.toggle_label(), "Dark Mode");
    }

    #[test]
    fn test_toggle_flips_mode_and_label() {
        let mut store = ThemeStore::new(ThemeMode::Light);
        store.toggle();
        assert!(store.is_dark());
        assert_eq!(store.toggle_label(), "Light Mode");
        store.toggle();
        assert!(!store.is_dark());
    }
}
