//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use atlas_client::{HttpCatalogClient, DEFAULT_BASE_URL, DEFAULT_LIST_FIELDS};
use atlas_core::prelude::*;

use crate::theme::ThemeMode;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote catalog settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    /// Root of the provider's REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Absent means requests may hang indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Fields requested for the catalog list
    #[serde(default = "default_list_fields")]
    pub list_fields: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            list_fields: default_list_fields(),
        }
    }
}

impl CatalogSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Build the HTTP provider described by these settings
    pub fn build_client(&self) -> Result<HttpCatalogClient> {
        let client = HttpCatalogClient::with_timeout(&self.base_url, self.request_timeout())?
            .with_list_fields(self.list_fields.iter().map(String::as_str));
        Ok(client)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_list_fields() -> Vec<String> {
    DEFAULT_LIST_FIELDS.iter().map(|f| f.to_string()).collect()
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme at startup; toggling at runtime is not saved
    #[serde(default)]
    pub theme: ThemeMode,
}
