use crate::config::{Config, SitePaths};
use crate::error::{AppError, Result};
use crate::snapshot::Snapshot;
use tracing::{info, warn};

/// Setup doctor: reports everything the sync needs before it can run.
pub fn execute(paths: &SitePaths) -> Result<()> {
    let mut problems = 0;

    let config_path = paths.config_file();
    if config_path.exists() {
        info!(path = ?config_path, "Config file found");
    } else {
        warn!(path = ?config_path, "Config file missing, falling back to environment variables");
    }
    let config = Config::load(paths);

    if config.google.sheet_id.is_none() {
        warn!("Google Sheet ID not configured (config.json or GOOGLE_SHEET_ID)");
        problems += 1;
    } else {
        info!("Google Sheet ID configured");
    }

    if config.google.drive_folder_id.is_none() {
        warn!("Google Drive folder ID not configured (config.json or GOOGLE_DRIVE_FOLDER_ID)");
        problems += 1;
    } else {
        info!("Google Drive folder ID configured");
    }

    if std::env::var("GITHUB_ACTIONS").is_ok() {
        if std::env::var("GOOGLE_CREDENTIALS").is_ok() {
            info!("Service account credentials present in environment");
        } else {
            warn!("GOOGLE_CREDENTIALS not set for unattended run");
            problems += 1;
        }
    } else if paths.credentials_file().exists() {
        info!(path = ?paths.credentials_file(), "OAuth credentials file found");
    } else {
        warn!(path = ?paths.credentials_file(), "OAuth credentials file missing");
        problems += 1;
    }

    paths.ensure_directories()?;
    info!(data = ?paths.data_dir(), images = ?paths.images_dir(), "Site directories ready");

    let products_file = paths.products_file();
    if products_file.exists() {
        match Snapshot::read(&products_file) {
            Ok(snapshot) => info!(
                products = snapshot.products.len(),
                categories = snapshot.categories.len(),
                "Existing snapshot is valid"
            ),
            Err(e) => {
                warn!("Existing snapshot is unreadable: {}", e);
                problems += 1;
            }
        }
    } else {
        info!("No snapshot yet (normal before the first sync)");
    }

    if problems > 0 {
        return Err(AppError::Config(format!(
            "{} problem(s) found, see warnings above",
            problems
        )));
    }

    info!("Setup looks good, ready to sync");
    Ok(())
}
