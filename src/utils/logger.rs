use snafu::{ResultExt, Snafu};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not init log file: {}", source))]
    InitLog { source: std::io::Error },

    #[snafu(display("Could not install global subscriber: {}", source))]
    SetGlobal {
        source: tracing::subscriber::SetGlobalDefaultError,
    },
}

const DEFAULT_FILTER: &str = "nursemap=info";

// Filter traces based on the RUST_LOG env var, or, if it's not set, show
// nursemap's own info messages.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. With a path, bunyan formatted JSON lines
/// go to that file (or to a daily rolling file if the path is a directory),
/// otherwise compact lines go to stderr. The returned guard must be kept
/// alive for the logs to be flushed.
pub fn logger_init(path: Option<&Path>) -> Result<WorkerGuard, Error> {
    match path {
        Some(path) => {
            let (non_blocking, guard) = if path.is_dir() {
                tracing_appender::non_blocking(tracing_appender::rolling::daily(
                    path,
                    "nursemap.log",
                ))
            } else {
                tracing_appender::non_blocking(
                    std::fs::OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(path)
                        .context(InitLogSnafu)?,
                )
            };

            let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION"));
            let subscriber = Registry::default()
                .with(env_filter())
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(app_name.to_string(), non_blocking));
            tracing::subscriber::set_global_default(subscriber).context(SetGlobalSnafu)?;
            Ok(guard)
        }
        None => {
            let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
            let subscriber = Registry::default().with(env_filter()).with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(non_blocking),
            );
            tracing::subscriber::set_global_default(subscriber).context(SetGlobalSnafu)?;
            Ok(guard)
        }
    }
}
