use crate::config::SitePaths;
use crate::error::{AppError, Result};
use crate::google::{DriveOperations, SheetOperations};
use crate::models::{Product, distinct_categories};
use crate::snapshot::Snapshot;
use indicatif::ProgressStyle;
use std::fs;
use tracing::{Span, error, info, instrument, warn};
use tracing_indicatif::span_ext::IndicatifSpanExt;

#[derive(Debug, PartialEq)]
pub struct SyncSummary {
    pub products: usize,
    pub categories: usize,
    pub images_downloaded: usize,
    pub images_missing: usize,
}

pub struct SyncEngine<SC, DC> {
    paths: SitePaths,
    sheets_client: SC,
    drive_client: DC,
}

impl<SC, DC> SyncEngine<SC, DC>
where
    SC: SheetOperations + Sync,
    DC: DriveOperations + Sync,
{
    pub fn new(paths: SitePaths, sheets_client: SC, drive_client: DC) -> Self {
        Self {
            paths,
            sheets_client,
            drive_client,
        }
    }

    /// Run one full sync pass: products, categories, images, snapshot.
    ///
    /// An empty product batch aborts the run before anything is written, so a
    /// previous snapshot survives a broken or unconfigured sheet. Individual
    /// image failures are logged and skipped.
    #[instrument(name = "Sync", skip_all)]
    pub async fn sync(&self) -> Result<SyncSummary> {
        self.paths.ensure_directories()?;

        let products = match self.sheets_client.fetch_products().await {
            Ok(products) => products,
            Err(e) => {
                error!("Failed to fetch products: {}", e);
                Vec::new()
            }
        };

        if products.is_empty() {
            return Err(AppError::Sync(
                "no products fetched, keeping previous snapshot".to_string(),
            ));
        }

        let categories = distinct_categories(&products);

        let (images_downloaded, images_missing) = self.download_images(&products).await;

        let snapshot = Snapshot::new(products, categories);
        snapshot.write(&self.paths.products_file())?;

        Ok(SyncSummary {
            products: snapshot.products.len(),
            categories: snapshot.categories.len(),
            images_downloaded,
            images_missing,
        })
    }

    /// Best-effort image download: one missing or failing image never stops
    /// the rest of the batch.
    #[instrument(name = "Downloading images", skip_all)]
    async fn download_images(&self, products: &[Product]) -> (usize, usize) {
        let span = Span::current();
        if let Ok(style) = ProgressStyle::with_template(
            "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
        ) {
            span.pb_set_style(&style);
        }
        span.pb_set_message("Downloading images");
        span.pb_set_length(products.len() as u64);

        let mut downloaded = 0;
        let mut missing = 0;

        for product in products {
            match self.drive_client.fetch_image(&product.id).await {
                Ok(Some(bytes)) => {
                    let path = self.paths.image_file(&product.id);
                    match fs::write(&path, &bytes) {
                        Ok(()) => {
                            info!(product = %product.id, "Downloaded image");
                            downloaded += 1;
                        }
                        Err(e) => {
                            error!(product = %product.id, "Failed to write image: {}", e);
                            missing += 1;
                        }
                    }
                }
                Ok(None) => {
                    warn!(product = %product.id, "Image not found in Drive folder");
                    missing += 1;
                }
                Err(e) => {
                    error!(product = %product.id, "Failed to download image: {}", e);
                    missing += 1;
                }
            }
            span.pb_inc(1);
        }

        (downloaded, missing)
    }
}

#[cfg(test)]
mod mocks {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    pub(crate) struct MockSheetsClient {
        pub result: Result<Vec<Product>>,
    }

    impl MockSheetsClient {
        pub(crate) fn with_products(products: Vec<Product>) -> Self {
            Self {
                result: Ok(products),
            }
        }

        pub(crate) fn unconfigured() -> Self {
            Self {
                result: Err(AppError::Config(
                    "Google Sheet ID not configured".to_string(),
                )),
            }
        }
    }

    #[async_trait]
    impl SheetOperations for MockSheetsClient {
        async fn fetch_products(&self) -> Result<Vec<Product>> {
            match &self.result {
                Ok(products) => Ok(products.clone()),
                Err(e) => Err(AppError::Config(e.to_string())),
            }
        }
    }

    pub(crate) struct MockDriveClient {
        pub images: HashMap<String, Vec<u8>>,
    }

    impl MockDriveClient {
        pub(crate) fn with_images(ids: &[&str]) -> Self {
            let images = ids
                .iter()
                .map(|id| (id.to_string(), format!("jpeg bytes for {id}").into_bytes()))
                .collect();
            Self { images }
        }
    }

    #[async_trait]
    impl DriveOperations for MockDriveClient {
        async fn fetch_image(&self, product_id: &str) -> Result<Option<Vec<u8>>> {
            Ok(self.images.get(product_id).cloned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::{MockDriveClient, MockSheetsClient};
    use super::*;
    use crate::models::product::test_helpers::mock_product;

    fn three_products() -> Vec<Product> {
        vec![
            mock_product("pottery-001", "Pottery"),
            mock_product("pottery-002", "Pottery"),
            mock_product("wood-001", "Woodwork"),
        ]
    }

    #[tokio::test]
    async fn test_sync_writes_snapshot_and_images() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SitePaths::new(dir.path());

        let engine = SyncEngine::new(
            paths.clone(),
            MockSheetsClient::with_products(three_products()),
            MockDriveClient::with_images(&["pottery-001", "pottery-002", "wood-001"]),
        );

        let summary = engine.sync().await.unwrap();

        assert_eq!(summary.products, 3);
        assert_eq!(summary.categories, 2);
        assert_eq!(summary.images_downloaded, 3);
        assert_eq!(summary.images_missing, 0);

        let snapshot = Snapshot::read(&paths.products_file()).unwrap();
        assert_eq!(snapshot.categories, vec!["Pottery", "Woodwork"]);
        assert!(paths.image_file("pottery-001").exists());
    }

    #[tokio::test]
    async fn test_missing_image_does_not_block_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SitePaths::new(dir.path());

        // No image for the second product
        let engine = SyncEngine::new(
            paths.clone(),
            MockSheetsClient::with_products(three_products()),
            MockDriveClient::with_images(&["pottery-001", "wood-001"]),
        );

        let summary = engine.sync().await.unwrap();

        assert_eq!(summary.images_downloaded, 2);
        assert_eq!(summary.images_missing, 1);

        let snapshot = Snapshot::read(&paths.products_file()).unwrap();
        assert_eq!(snapshot.products.len(), 3);
        assert!(paths.image_file("pottery-001").exists());
        assert!(!paths.image_file("pottery-002").exists());
        assert!(paths.image_file("wood-001").exists());
    }

    #[tokio::test]
    async fn test_empty_batch_aborts_without_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SitePaths::new(dir.path());

        let engine = SyncEngine::new(
            paths.clone(),
            MockSheetsClient::with_products(Vec::new()),
            MockDriveClient::with_images(&[]),
        );

        let result = engine.sync().await;

        assert!(result.is_err());
        assert!(!paths.products_file().exists());
    }

    #[tokio::test]
    async fn test_unconfigured_sheet_aborts_and_preserves_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SitePaths::new(dir.path());
        paths.ensure_directories().unwrap();

        // A snapshot from an earlier, healthy run
        let previous = Snapshot::new(
            vec![mock_product("pottery-001", "Pottery")],
            vec!["Pottery".to_string()],
        );
        previous.write(&paths.products_file()).unwrap();

        let engine = SyncEngine::new(
            paths.clone(),
            MockSheetsClient::unconfigured(),
            MockDriveClient::with_images(&[]),
        );

        let result = engine.sync().await;

        assert!(result.is_err());
        let preserved = Snapshot::read(&paths.products_file()).unwrap();
        assert_eq!(preserved.products, previous.products);
    }

    #[tokio::test]
    async fn test_repeat_sync_payload_is_identical_except_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SitePaths::new(dir.path());

        let run = || {
            SyncEngine::new(
                paths.clone(),
                MockSheetsClient::with_products(three_products()),
                MockDriveClient::with_images(&["pottery-001", "pottery-002", "wood-001"]),
            )
        };

        run().sync().await.unwrap();
        let first = Snapshot::read(&paths.products_file()).unwrap();

        run().sync().await.unwrap();
        let second = Snapshot::read(&paths.products_file()).unwrap();

        assert_eq!(first.products, second.products);
        assert_eq!(first.categories, second.categories);
    }
}
