//! Shared configuration, error and descriptor types for the FEEL built-in
//! function library.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
