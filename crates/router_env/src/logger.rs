//!
//! Logger of the system.
//!

pub use tracing::{debug, error, info, instrument, trace, warn, Level};

pub mod config;
mod setup;

pub use self::{
    config::{Config, Log, LogFormat},
    setup::{setup, TelemetryGuard},
};
