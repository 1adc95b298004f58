//! Logging - Tracing Subscriber Setup
//!
//! The configuration decides where logs go, but loading it already logs. Work
//! done before that runs under a scoped stderr subscriber; the global one is
//! installed afterwards.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::Result;

const LOG_FILE: &str = "night-lights.log";

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}

/// Run `f` with a stderr-only subscriber
pub fn with_bootstrap_logging<T>(f: impl FnOnce() -> T) -> T {
    scoped(std::io::stderr, true, f)
}

fn scoped<W, T>(writer: W, ansi: bool, f: impl FnOnce() -> T) -> T
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let subscriber = fmt()
        .with_env_filter(env_filter())
        .with_ansi(ansi)
        .with_writer(writer)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global subscriber: stderr always, plus a daily rolling file when
/// `log_dir` is set. Keep the guard alive so buffered file logs are flushed.
pub fn init_tracing(log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let stderr = fmt::layer().with_writer(std::io::stderr);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(stderr)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)?;
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, LOG_FILE));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Ok(Some(guard))
}
