//! Novideo - remove beatmap background videos from an osu! song library
//!
//! This crate provides functionality for:
//! - Sweeping the direct subdirectories of a song library and deleting
//!   every file with a given extension
//! - An append-only run log mirrored to the console
//! - A y/N confirmation prompt guarding the sweep

pub mod cleaner;
pub mod cli;
pub mod commands;
pub mod error;
pub mod prompt;

// Re-export commonly used types
pub use cleaner::{Cleaner, SweepOutcome, SweepReport};
pub use error::{Result, SweepError};
