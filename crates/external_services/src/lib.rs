//! Interactions of the gateway crates with external systems.

#![warn(missing_docs, missing_debug_implementations)]

pub mod http_client;
