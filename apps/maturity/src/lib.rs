//! # maturity
//!
//! Host crate for the maturity simulator: CLI, HTTP API and configuration.
//! The binary in `main.rs` is a thin wrapper over [`cli::execute`].

pub mod api;
pub mod cli;
pub mod config;
pub mod error;

pub use error::AppError;
