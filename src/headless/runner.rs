//! Headless mode runner - drives the engine without a terminal

use std::io::{self, Write};

use tokio::sync::broadcast;

use atlas_app::config::Settings;
use atlas_app::{AppState, Engine, EngineEvent, Message};
use atlas_client::CatalogProvider;
use atlas_core::prelude::*;

use super::HeadlessEvent;

/// What a headless run should fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadlessRequest {
    pub region: Option<String>,
    pub search: Option<String>,
    /// Look up one country instead of listing the catalog
    pub country: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadlessOutcome {
    Completed,
    /// The fetch failed or the country was not found
    Failed,
    /// Interrupted by a signal before the fetch settled
    Interrupted,
}

/// Run in headless mode, writing NDJSON to stdout
pub async fn run_headless<C>(
    provider: C,
    settings: Settings,
    request: HeadlessRequest,
) -> Result<HeadlessOutcome>
where
    C: CatalogProvider + Send + Sync + 'static,
{
    info!("Atlas Explorer starting in headless mode: {:?}", request);
    let mut stdout = io::stdout();
    run_headless_to(provider, settings, request, &mut stdout).await
}

/// Headless run writing to `out`
pub async fn run_headless_to<C, W>(
    provider: C,
    settings: Settings,
    request: HeadlessRequest,
    out: &mut W,
) -> Result<HeadlessOutcome>
where
    C: CatalogProvider + Send + Sync + 'static,
    W: Write,
{
    let mut engine = Engine::new(provider, settings);
    let mut events = engine.subscribe();

    match &request.country {
        Some(name) => engine.process_message(Message::OpenDetail { name: name.clone() }),
        None => {
            // Filters are inert until the catalog arrives
            if let Some(region) = &request.region {
                engine.process_message(Message::SelectRegion(region.clone()));
            }
            if let Some(term) = &request.search {
                engine.process_message(Message::SetSearch(term.clone()));
            }
            engine.mount();
        }
    }

    let single = request.country.is_some();
    let outcome = loop {
        write_engine_events(&mut events, out)?;

        if let Some(outcome) = settled(&engine.state, single) {
            break outcome;
        }
        if engine.should_quit() || !engine.process_next().await {
            warn!("Headless run interrupted");
            break HeadlessOutcome::Interrupted;
        }
    };

    if !single && outcome == HeadlessOutcome::Completed {
        for country in engine.state.list.visible_records() {
            HeadlessEvent::country(country).write_to(out)?;
        }
    }

    engine.shutdown();
    Ok(outcome)
}

/// Outcome once the fetch being waited on is no longer in flight
fn settled(state: &AppState, single: bool) -> Option<HeadlessOutcome> {
    let (ready, failed) = if single {
        let fetch = state.detail.fetch_state();
        (fetch.is_ready(), fetch.error().is_some())
    } else {
        let fetch = state.list.fetch_state();
        (fetch.is_ready(), fetch.error().is_some())
    };

    if ready {
        Some(HeadlessOutcome::Completed)
    } else if failed {
        Some(HeadlessOutcome::Failed)
    } else {
        None
    }
}

fn write_engine_events<W: Write>(
    events: &mut broadcast::Receiver<EngineEvent>,
    out: &mut W,
) -> Result<()> {
    loop {
        match events.try_recv() {
            Ok(event) => {
                if let Some(line) = HeadlessEvent::from_engine(&event) {
                    line.write_to(out)?;
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(n)) => {
                warn!("Headless output skipped {} engine events", n);
            }
            Err(_) => return Ok(()),
        }
    }
}
