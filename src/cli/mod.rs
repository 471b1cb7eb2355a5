//! Command-line interface for flickrset.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CacheArgs, CacheSubcommand, Cli, Commands, RenderArgs};
pub use commands::dispatch;
