//! Sets up where log messages go.

use std::{fs::OpenOptions, io, path::Path, sync::Arc};

use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Print log messages at `level` and above to stdout, and if `log_file` is
/// given, append every message at the debug level and above to that file.
///
/// The `RUST_LOG` environment variable overrides `level` for stdout.
///
/// # Errors
///
/// Returns an error if `log_file` cannot be opened for appending.
///
/// # Panics
///
/// Panics if a global logger has already been set.
pub fn setup_logging(level: LevelFilter, log_file: Option<&Path>) -> io::Result<()> {
    let stdout_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(stdout_filter);

    let debug_log = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;

            Some(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_ansi(false)
                    .with_writer(Arc::new(file))
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();

    Ok(())
}
