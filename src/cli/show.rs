use crate::config::{Config, SitePaths};
use crate::error::Result;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show resolved site and cache paths
    Paths,
}

impl ShowResource {
    pub async fn execute(&self, paths: &SitePaths) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(paths),
        }
    }
}

fn show_paths(paths: &SitePaths) -> Result<()> {
    let token_cache = Config::cache_file("google_tokens.json")?;

    info!(path = ?paths.config_file(), "Config path");
    info!(path = ?paths.credentials_file(), "Credentials path");
    info!(path = ?paths.products_file(), "Snapshot path");
    info!(path = ?paths.images_dir(), "Images path");
    info!(path = ?token_cache, "Token cache path");

    Ok(())
}
