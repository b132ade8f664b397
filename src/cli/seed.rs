use crate::config::SitePaths;
use crate::error::Result;
use crate::models::distinct_categories;
use crate::models::product::sample_products;
use crate::snapshot::Snapshot;
use tracing::info;

/// Write a snapshot of the sample products so the site renders something
/// before the sheet is wired up.
pub fn execute(paths: &SitePaths) -> Result<()> {
    paths.ensure_directories()?;

    let products = sample_products();
    let categories = distinct_categories(&products);
    let snapshot = Snapshot::new(products, categories);

    snapshot.write(&paths.products_file())?;

    info!("Seeded sample data, run `handicraft-sync sync` to replace it with real products");
    Ok(())
}
