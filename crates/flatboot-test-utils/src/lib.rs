//! Shared test utilities for the flatboot workspace.
//!
//! This crate is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`executor`] — [`RecordingExecutor`], a command executor that records
//!   instead of running and fails on demand
//! - [`config`] — host configuration files and context maps for tests

pub mod config;
pub mod executor;

pub use config::{context, write_config};
pub use executor::RecordingExecutor;
