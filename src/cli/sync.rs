use crate::config::{Config, SitePaths};
use crate::error::Result;
use crate::google;
use crate::sync::SyncEngine;
use tracing::info;

pub async fn execute(paths: &SitePaths) -> Result<()> {
    let config = Config::load(paths);
    let clients = google::connect(&config.google, paths).await?;

    let engine = SyncEngine::new(paths.clone(), clients.sheets, clients.drive);
    let summary = engine.sync().await?;

    info!(
        products = summary.products,
        categories = summary.categories,
        images_downloaded = summary.images_downloaded,
        images_missing = summary.images_missing,
        "Sync completed"
    );

    Ok(())
}
