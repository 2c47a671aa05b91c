//! Command handlers for the Glaze CLI.

pub mod config;
pub mod export;
pub mod interactive;
