//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! - `error`: structural failures (empty input, unknown report type)
//! - `warn`: degraded behavior (column width not applied)
//! - `info`: report generated, byte counts
//! - `debug`: per-stage detail (row columns, section counts)

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter applied when no `RUST_LOG` override is honored.
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when the user passed no explicit level flags.
    pub use_env_filter: bool,
    pub format: LogFormat,
    /// When set, logs go to the file instead of stderr.
    pub log_file: Option<PathBuf>,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            format: LogFormat::default(),
            log_file: None,
            with_ansi: true,
        }
    }
}

/// Initialize the global tracing subscriber.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    };

    let writer: Box<dyn Fn() -> Box<dyn io::Write> + Send + Sync> = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            let file = Arc::new(file);
            Box::new(move || Box::new(Arc::clone(&file)) as Box<dyn io::Write>)
        }
        None => Box::new(|| Box::new(io::stderr()) as Box<dyn io::Write>),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.with_ansi && config.log_file.is_none())
        .with_writer(writer);

    match config.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
    Ok(())
}
