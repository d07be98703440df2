//! # Connector Layer
//!
//! External integrations implementing application ports:
//! - HTTP adapter for the remote analysis service
//! - Offline mock adapter for demos and tests

pub mod adapter;

pub use adapter::*;
