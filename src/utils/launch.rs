use futures::future::Future;
use std::path::Path;
use tracing::error;

use super::logger::logger_init;

/// Runs `future` to completion on a current thread runtime, the map state
/// is not `Send`.
///
/// The logger is initialized before the future starts and flushed only once
/// its outcome, errors included, has been logged.
pub fn launch_with_runtime<F>(
    log_path: Option<&Path>,
    future: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = Result<(), Box<dyn std::error::Error>>>,
{
    let guard = logger_init(log_path)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let res = runtime.block_on(future);
    if let Err(ref err) = res {
        error!("{}", err);
        if let Some(source) = err.source() {
            error!("caused by: {}", source);
        }
    }

    // Ensure the logger persists until the future is resolved
    // and is flushed before the process exits.
    drop(guard);
    res
}
