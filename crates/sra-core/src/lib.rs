//! SRA Core Library
//!
//! Domain models and analysis pipeline for the Security Report Assistant.

pub mod analysis;
pub mod config;
pub mod error;
pub mod provider;

pub use error::{SraError, SraResult};
