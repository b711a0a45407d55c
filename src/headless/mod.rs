//! Headless mode - NDJSON event output instead of the TUI
//!
//! Each line on stdout is one JSON object with an `"event"` field naming its
//! type and a millisecond `"timestamp"`.
//!
//! ```json
//! {"event":"catalog_loading","timestamp":1704700001000}
//! {"event":"catalog_loaded","total":250,"visible":2,"timestamp":1704700002000}
//! {"event":"country","name":"Chad","region":"Africa","capital":"N'Djamena","population":16425859,"flag":"https://flagcdn.com/td.svg","timestamp":1704700002001}
//! ```

mod runner;

pub use runner::{run_headless, HeadlessOutcome, HeadlessRequest};

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use atlas_app::EngineEvent;
use atlas_core::prelude::*;
use atlas_core::Country;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    CatalogLoading {
        timestamp: i64,
    },

    CatalogLoaded {
        total: usize,
        visible: usize,
        timestamp: i64,
    },

    CatalogFailed {
        message: String,
        cause: String,
        timestamp: i64,
    },

    /// One visible record after filtering
    Country {
        name: String,
        region: String,
        capital: String,
        population: Option<u64>,
        flag: String,
        timestamp: i64,
    },

    DetailLoaded {
        country: Box<Country>,
        timestamp: i64,
    },

    DetailNotFound {
        name: String,
        timestamp: i64,
    },

    DetailFailed {
        name: String,
        message: String,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self).context("Failed to serialize headless event")?;
        writeln!(out, "{json}").context("Failed to write headless event")?;
        out.flush()?;
        Ok(())
    }

    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn country(country: &Country) -> Self {
        Self::Country {
            name: country.name.clone(),
            region: country.region.clone(),
            capital: country.capital_display(),
            population: country.population,
            flag: country.flag_uri().to_string(),
            timestamp: Self::now(),
        }
    }

    /// Map an engine event to its headless line, if it has one
    pub fn from_engine(event: &EngineEvent) -> Option<Self> {
        let timestamp = Self::now();
        let event = match event {
            EngineEvent::CatalogLoading => Self::CatalogLoading { timestamp },
            EngineEvent::CatalogLoaded { total, visible } => Self::CatalogLoaded {
                total: *total,
                visible: *visible,
                timestamp,
            },
            EngineEvent::CatalogFailed { message, cause } => Self::CatalogFailed {
                message: message.clone(),
                cause: cause.clone(),
                timestamp,
            },
            EngineEvent::DetailLoaded { country } => Self::DetailLoaded {
                country: country.clone(),
                timestamp,
            },
            EngineEvent::DetailNotFound { name } => Self::DetailNotFound {
                name: name.clone(),
                timestamp,
            },
            EngineEvent::DetailFailed { name, message } => Self::DetailFailed {
                name: name.clone(),
                message: message.clone(),
                timestamp,
            },
            EngineEvent::DetailLoading { .. } | EngineEvent::Shutdown => return None,
        };
        Some(event)
    }
}
