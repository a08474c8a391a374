//! JSON trace log for one CLI run.
//!
//! Each subcommand logs to its own file, `translit-<command>.jsonl`, in the
//! directory given by `--log-dir`. `RUST_LOG` overrides the default filter.
//! Without the `trace` feature every event is compiled out and
//! `init_tracing` only checks that the directory is usable.

use std::fs;
use std::path::Path;

pub const DEFAULT_FILTER: &str = "translit_core=debug,translit_session=debug,translit_cli=debug";

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("log directory {path}: {source}")]
    LogDir {
        path: String,
        source: std::io::Error,
    },
    #[error("tracing setup failed: {0}")]
    Init(String),
}

pub fn log_file_prefix(command: &str) -> String {
    format!("translit-{command}")
}

fn ensure_log_dir(log_dir: &Path) -> Result<(), TraceError> {
    fs::create_dir_all(log_dir).map_err(|source| TraceError::LogDir {
        path: log_dir.display().to_string(),
        source,
    })
}

#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path, command: &str) -> Result<(), TraceError> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::EnvFilter;

    ensure_log_dir(log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_file_prefix(command))
        .filename_suffix("jsonl")
        .build(log_dir)
        .map_err(|e| TraceError::Init(e.to_string()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    std::mem::forget(guard); // flushed at process exit

    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .try_init()
        .map_err(|e| TraceError::Init(e.to_string()))?;
    tracing::debug!(command, "trace log opened");
    Ok(())
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(log_dir: &Path, _command: &str) -> Result<(), TraceError> {
    ensure_log_dir(log_dir)
}
