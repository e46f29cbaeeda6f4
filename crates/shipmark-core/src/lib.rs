//! Shipmark Core - Core library for release automation
//!
//! This crate provides the foundational types, error handling, configuration,
//! and release planning for the Shipmark changelog and tagging tool.

pub mod config;
pub mod error;
pub mod types;
pub mod workflow;

pub use config::{Config, MissingUnreleased};
pub use error::{Result, ShipmarkError};
pub use types::ReleaseResult;
