//! Core types and utilities

pub mod error;
pub mod logging;

pub use error::Error;
