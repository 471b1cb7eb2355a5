//! Command implementations.

use std::path::PathBuf;

use crate::api::{FlickrClient, DEFAULT_ENDPOINT};
use crate::cache::PhotosetCache;
use crate::config::{find_site_config, load_site_config, Credentials, SiteConfig};
use crate::error::{FlickrsetError, Result};
use crate::pipeline::{render_photoset, PipelineOptions};
use crate::tag::RenderRequest;

use super::args::{CacheSubcommand, Cli, Commands, RenderArgs};

/// Dispatch the parsed CLI to its command implementation.
pub fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Render(args) => run_render(cli, args),
        Commands::Cache(args) => match args.command {
            CacheSubcommand::List => run_cache_list(cli),
            CacheSubcommand::Clear => run_cache_clear(cli),
        },
        Commands::Check => run_check(cli),
    }
}

/// Load the site configuration named by `--config`, or discover
/// `_config.yml` in the working directory.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    match &cli.config {
        Some(path) => load_site_config(path),
        None => {
            let cwd = std::env::current_dir()?;
            match find_site_config(&cwd) {
                Some(path) => load_site_config(&path),
                // Credentials may still arrive via the environment.
                None => Ok(SiteConfig::empty()),
            }
        }
    }
}

fn run_render(cli: &Cli, args: &RenderArgs) -> Result<()> {
    let config = load_config(cli)?;
    let request = RenderRequest::from_args(&args.markup)?;
    let options = PipelineOptions {
        cache_dir: cli.cache_dir.clone(),
        fresh: args.fresh,
        ..Default::default()
    };

    let fragment = render_photoset(&request, &config, &options)?;
    print!("{fragment}");
    Ok(())
}

/// The cache directory for cache subcommands: the `--cache-dir` flag, or
/// `flickr.cache_dir` from the site configuration.
fn cache_root(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.cache_dir {
        return Ok(dir.clone());
    }
    let config = load_config(cli)?;
    config.flickr.cache_dir.ok_or_else(|| {
        anyhow::anyhow!("No cache directory configured: pass --cache-dir or set flickr.cache_dir")
            .into()
    })
}

fn run_cache_list(cli: &Cli) -> Result<()> {
    let cache = PhotosetCache::new(cache_root(cli)?);
    let keys = cache.list()?;
    if keys.is_empty() {
        println!("Cache is empty ({})", cache.root().display());
        return Ok(());
    }
    for key in keys {
        println!("{key}");
    }
    Ok(())
}

fn run_cache_clear(cli: &Cli) -> Result<()> {
    let cache = PhotosetCache::new(cache_root(cli)?);
    let removed = cache.clear()?;
    println!("Removed {removed} cached photoset(s)");
    Ok(())
}

fn run_check(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let credentials = Credentials::resolve(&config.flickr)?;
    let token = credentials.access_token.clone();
    let endpoint = config
        .flickr
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let client = FlickrClient::with_endpoint(credentials, endpoint);
    client
        .test_login()
        .map_err(|e| FlickrsetError::Authentication {
            token,
            message: e.to_string(),
        })?;

    println!("Credentials OK");
    Ok(())
}
