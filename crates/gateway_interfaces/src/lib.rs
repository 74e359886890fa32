//! Connector traits, the gateway driver and its configuration

#![warn(missing_docs, missing_debug_implementations)]

pub mod api;
pub mod configs;
pub mod consts;
pub mod errors;
pub mod types;
