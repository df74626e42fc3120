//! Logging bootstrap
//!
//! Structured logging for the app core: stdout plus an optional
//! daily-rolling file under the app data directory. The shell calls this
//! once at startup, before the config store loads.

use std::path::Path;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing. `RUST_LOG` overrides the defaults; a second call
/// fails (the global subscriber is already set).
pub fn init_logging(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cfg!(debug_assertions) {
            EnvFilter::new("info,adestra_app=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let stdout_layer = fmt::layer().with_target(true).with_level(true);

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "adestra.log");
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(file_appender);
            registry.with(file_layer).try_init()?;
        }
        None => registry.try_init()?,
    }

    tracing::info!("Logging initialized");
    Ok(())
}
