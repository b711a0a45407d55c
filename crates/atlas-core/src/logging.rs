//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Environment variable that overrides the log filter
pub const LOG_ENV_VAR: &str = "ATLAS_LOG";

const LOG_FILE_NAME: &str = "atlas.log";
const DEFAULT_FILTER: &str = "atlas_explorer=info,atlas_app=info,atlas_client=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/atlas-explorer/logs/` because the
/// terminal belongs to the UI. Log level is controlled by the `ATLAS_LOG`
/// environment variable.
///
/// # Examples
/// ```bash
/// ATLAS_LOG=debug cargo run
/// ATLAS_LOG=atlas_client=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Atlas Explorer starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("atlas-explorer").join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_lives_under_app_directory() {
        let path = get_log_directory().unwrap();
        assert!(path.ends_with("atlas-explorer/logs"));
    }
}
