//! sigjson-logging - Diagnostic logging to stderr
//!
//! Replies own stdout, so every diagnostic goes to stderr. This crate provides:
//! - [`init_logging`] to install the global subscriber
//! - [`ReloadHandle`] for changing the level after startup

mod layer;
mod reload;

pub use layer::{init_logging, init_logging_with_writer};
pub use reload::ReloadHandle;
pub use sigjson_core::LogLevel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
