//! File logging. The terminal belongs to the UI, so logs go to
//! `chromafield.log` in the configured log directory; tail it with
//! `tail -f`. `RUST_LOG` overrides the configured level.

use std::fs;

use chromafield_config::{Config, LOG_FILE_NAME};
use color_eyre::eyre::{WrapErr, eyre};
use tracing_subscriber::EnvFilter;

pub fn init(config: &Config) -> color_eyre::Result<()> {
    let dir = config.log_dir();
    fs::create_dir_all(&dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to initialize logging: {err}"))?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(())
}
