//! Input/output operations: CLI, caching, configuration, errors, progress

/// Palette cache persistence
pub mod cache;
/// Command-line interface and run orchestration
pub mod cli;
/// Pipeline constants and defaults
pub mod configuration;
/// Error types and helpers
pub mod error;
/// Progress display
pub mod progress;
