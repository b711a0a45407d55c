//! Main TUI runner - entry point and event loop

use atlas_app::config::Settings;
use atlas_app::Engine;
use atlas_client::CatalogProvider;
use atlas_core::prelude::*;

use crate::{event, render, terminal};

/// Run the interactive browser against `provider`
pub async fn run<C>(provider: C, settings: Settings) -> Result<()>
where
    C: CatalogProvider + Send + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::try_init()
        .map_err(|e| Error::terminal(format!("Failed to enter raw mode: {e}")))?;
    let mut engine = Engine::new(provider, settings);
    engine.mount();

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop<C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: CatalogProvider + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results and signals posted by background tasks
        engine.drain_pending_messages();

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Leaving event loop");
    Ok(())
}
