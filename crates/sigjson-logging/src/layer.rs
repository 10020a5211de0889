//! Subscriber setup

use crate::reload::{ReloadHandle, convert_level_to_filter};
use sigjson_core::LogLevel;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, reload};

/// Initialize logging to stderr at `level`
///
/// `RUST_LOG`, when set, further narrows what is logged. Returns `false` if a
/// global subscriber was already installed, in which case nothing changes.
pub fn init_logging(level: LogLevel) -> bool {
    init_logging_with_writer(level, std::io::stderr)
}

/// Initialize logging with a custom writer
pub fn init_logging_with_writer<W>(level: LogLevel, writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    use tracing_subscriber::prelude::*;

    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));
    let env_filter = EnvFilter::try_from_default_env().ok();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(env_filter)
        .with(fmt_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    ReloadHandle::global().set_handle(handle);
    true
}
