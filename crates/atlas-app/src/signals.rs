//! OS signal handling for graceful shutdown

use std::future::Future;

use tokio::sync::mpsc;

use atlas_core::prelude::*;

use crate::message::Message;

/// Spawn a task that listens for OS signals and sends quit messages
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_shutdown(wait_for_signal(), tx));
}

/// Post [`Message::Quit`] once `signal` resolves. A listener that fails to
/// install posts nothing.
async fn forward_shutdown<F>(signal: F, tx: mpsc::Sender<Message>)
where
    F: Future<Output = Result<()>>,
{
    if let Err(e) = signal.await {
        error!("Signal handler error: {}", e);
        return;
    }

    info!("Shutdown signal received");
    if tx.send(Message::Quit).await.is_err() {
        debug!("Message channel closed before shutdown signal");
    }
}

/// Wait for a termination signal
async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::terminal(format!("Failed to create SIGINT handler: {}", e)))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::terminal(format!("Failed to create SIGTERM handler: {}", e)))?;

        tokio::select! {
            _ = sigint.recv() => info!("Received SIGINT"),
            _ = sigterm.recv() => info!("Received SIGTERM"),
        }

        Ok(())
    }

    #[cfg(windows)]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Failed to listen for Ctrl+C: {}", e)))?;
        info!("Received Ctrl+C");
        Ok(())
    }
}
