use crate::error::{AppError, Result};
use async_trait::async_trait;
use google_drive3::api::{DriveHub, Scope};
use http_body_util::BodyExt;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::{debug, instrument};

#[async_trait]
pub trait DriveOperations {
    /// Fetch the image bytes for a product, or `None` when the folder holds
    /// no file with that name.
    async fn fetch_image(&self, product_id: &str) -> Result<Option<Vec<u8>>>;
}

pub struct DriveClient {
    hub: DriveHub<HttpsConnector<HttpConnector>>,
    folder_id: Option<String>,
}

impl DriveClient {
    pub(super) fn new(
        hub: DriveHub<HttpsConnector<HttpConnector>>,
        folder_id: Option<String>,
    ) -> Self {
        Self { hub, folder_id }
    }

    async fn find_file(&self, folder_id: &str, name: &str) -> Result<Option<String>> {
        // Duplicate names are possible in Drive; prefer the most recently
        // modified file rather than whatever the service returns first.
        let query = format!(
            "name = '{}' and '{}' in parents and trashed = false",
            name, folder_id
        );

        let (_, file_list) = self
            .hub
            .files()
            .list()
            .q(&query)
            .order_by("modifiedTime desc")
            .page_size(1)
            .param("fields", "files(id, name, mimeType)")
            .add_scope(Scope::Readonly)
            .doit()
            .await
            .map_err(|e| AppError::Drive(format!("Failed to search for '{}': {}", name, e)))?;

        let file_id = file_list
            .files
            .and_then(|files| files.into_iter().next())
            .and_then(|file| file.id);

        Ok(file_id)
    }

    async fn download(&self, file_id: &str) -> Result<Vec<u8>> {
        let (response, _) = self
            .hub
            .files()
            .get(file_id)
            .param("alt", "media")
            .add_scope(Scope::Readonly)
            .doit()
            .await
            .map_err(|e| AppError::Drive(format!("Failed to download file {}: {}", file_id, e)))?;

        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| AppError::Drive(format!("Failed to read file {}: {}", file_id, e)))?
            .to_bytes();

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl DriveOperations for DriveClient {
    #[instrument(name = "Fetching image", skip(self))]
    async fn fetch_image(&self, product_id: &str) -> Result<Option<Vec<u8>>> {
        let folder_id = self
            .folder_id
            .as_deref()
            .ok_or_else(|| AppError::Config("Google Drive folder ID not configured".to_string()))?;

        let Some(file_id) = self.find_file(folder_id, product_id).await? else {
            return Ok(None);
        };

        debug!(file_id, "Found image in Drive folder");
        let bytes = self.download(&file_id).await?;

        Ok(Some(bytes))
    }
}
