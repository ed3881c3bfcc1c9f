//! Logging and tracing initialization.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::FrameKitResult;

/// Install the global tracing subscriber described by `config`.
///
/// `RUST_LOG` takes precedence over `config.level`. When `config.file` is
/// set, logs are appended there instead of stderr. A second call leaves
/// the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) -> FrameKitResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let installed = match (&config.file, config.json) {
        (Some(path), json) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            if json {
                tracing::subscriber::set_global_default(builder.json().finish())
            } else {
                tracing::subscriber::set_global_default(builder.finish())
            }
        }
        (None, true) => tracing::subscriber::set_global_default(
            builder.with_writer(std::io::stderr).json().finish(),
        ),
        (None, false) => {
            tracing::subscriber::set_global_default(builder.with_writer(std::io::stderr).finish())
        }
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed; keeping it");
    }
    Ok(())
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    // Default config has no log file, so this cannot fail.
    init_logging(&LoggingConfig::default()).ok();
}
