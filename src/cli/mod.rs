mod auth;
mod check;
mod configure;
mod seed;
mod show;
mod sync;

use crate::config::SitePaths;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "handicraft-sync")]
#[command(about = "Sync handicraft products from Google Sheets and Drive to a static website", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Root directory of the website (holds config.json, data/, images/)
    #[arg(long, global = true, default_value = ".")]
    pub site_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let paths = SitePaths::new(&self.site_dir);

        match &self.command {
            Commands::Sync => sync::execute(&paths).await,
            Commands::Auth { reset } => auth::execute(&paths, *reset).await,
            Commands::Configure => configure::execute(&paths),
            Commands::Check => check::execute(&paths),
            Commands::Seed => seed::execute(&paths),
            Commands::Show { resource } => resource.execute(&paths).await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pull products and images and rewrite the site snapshot
    Sync,
    /// Verify Google authentication
    Auth {
        /// Clear cached tokens before authenticating
        #[arg(long)]
        reset: bool,
    },
    /// Interactive wizard that writes config.json
    Configure,
    /// Check that the site directory is set up correctly
    Check,
    /// Write a snapshot of sample products for first-run testing
    Seed,
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}
