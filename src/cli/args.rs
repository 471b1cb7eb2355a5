//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// flickrset - render Flickr photoset tags to HTML fragments.
#[derive(Debug, Parser)]
#[command(name = "flickrset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the site configuration file (defaults to ./_config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Cache directory (overrides the flickr.cache_dir config value)
    #[arg(long, global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress log output (errors only)
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a photoset tag invocation to an HTML fragment on stdout
    Render(RenderArgs),

    /// Inspect or empty the photoset cache
    Cache(CacheArgs),

    /// Verify the configured Flickr credentials
    Check,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Tag arguments: <photoset-id> [thumbnail] [embedded] [opened] [video]
    #[arg(required = true, num_args = 1..=5)]
    pub markup: Vec<String>,

    /// Bypass the cache read and fetch live (still refreshes the entry)
    #[arg(long)]
    pub fresh: bool,
}

/// Arguments for the `cache` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// List cached photoset entries
    List,
    /// Remove all cached photoset entries
    Clear,
}
