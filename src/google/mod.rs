mod auth;
mod drive;
mod sheets;

pub use auth::{clear_tokens, verify_authentication};
pub use drive::{DriveClient, DriveOperations};
pub use sheets::{SheetOperations, SheetsClient};

use crate::config::{GoogleConfig, SitePaths};
use crate::error::{AppError, Result};
use google_drive3::api::DriveHub;
use google_sheets4::api::Sheets;
use hyper_util::client::legacy::Client;
use tracing::instrument;

/// Authenticated handles to both services, sharing one set of read-only
/// delegated credentials.
pub struct GoogleClients {
    pub sheets: SheetsClient,
    pub drive: DriveClient,
}

#[instrument(name = "Authenticating to Google APIs", skip_all)]
pub async fn connect(config: &GoogleConfig, paths: &SitePaths) -> Result<GoogleClients> {
    let auth = auth::create_and_verify_authenticator(paths).await?;

    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| AppError::Auth(format!("Failed to load TLS roots: {}", e)))?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);

    let sheets_hub = Sheets::new(client.clone(), auth.clone());
    let drive_hub = DriveHub::new(client, auth);

    Ok(GoogleClients {
        sheets: SheetsClient::new(sheets_hub, config.sheet_id.clone()),
        drive: DriveClient::new(drive_hub, config.drive_folder_id.clone()),
    })
}
