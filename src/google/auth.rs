use crate::config::{Config, SitePaths};
use crate::error::{AppError, Result};
use hyper_util::client::legacy::connect::HttpConnector;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use yup_oauth2::{
    InstalledFlowAuthenticator, InstalledFlowReturnMethod, ServiceAccountAuthenticator,
    authenticator::Authenticator, hyper_rustls::HttpsConnector,
};

/// Read-only access to both services; the sync never writes back.
const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/spreadsheets.readonly",
    "https://www.googleapis.com/auth/drive.readonly",
];

/// Marker for unattended runs, where no browser is available.
const CI_MARKER_VAR: &str = "GITHUB_ACTIONS";

/// JSON service-account key blob, provided as a secret in unattended runs.
const CREDENTIALS_VAR: &str = "GOOGLE_CREDENTIALS";

type AuthType = Authenticator<HttpsConnector<HttpConnector>>;

/// Create an authenticator and verify it by fetching a token.
///
/// Unattended environments use a service-account key from the environment;
/// everywhere else runs the installed-app consent flow with the token cached
/// on disk for reuse.
pub(super) async fn create_and_verify_authenticator(paths: &SitePaths) -> Result<AuthType> {
    let auth = match std::env::var(CI_MARKER_VAR) {
        Ok(_) => {
            debug!("Unattended environment detected, using service account credentials");
            from_service_account().await?
        }
        Err(_) => from_installed_flow(paths).await?,
    };

    // Trigger authentication by requesting a token
    let _token = auth
        .token(SCOPES)
        .await
        .map_err(|e| AppError::Auth(format!("Failed to get token: {}", e)))?;

    Ok(auth)
}

async fn from_service_account() -> Result<AuthType> {
    let raw = std::env::var(CREDENTIALS_VAR).map_err(|_| {
        AppError::Config(format!("{} environment variable not set", CREDENTIALS_VAR))
    })?;

    let key = yup_oauth2::parse_service_account_key(raw.as_bytes())
        .map_err(|e| AppError::Auth(format!("Failed to parse service account key: {}", e)))?;

    ServiceAccountAuthenticator::builder(key)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))
}

async fn from_installed_flow(paths: &SitePaths) -> Result<AuthType> {
    let credentials_path = paths.credentials_file();
    if !credentials_path.exists() {
        return Err(AppError::Config(format!(
            "Credentials file not found at {:?}. Download OAuth client credentials \
             from the Google Cloud console and place them there.",
            credentials_path
        )));
    }

    let secret = yup_oauth2::read_application_secret(&credentials_path)
        .await
        .map_err(|e| AppError::Auth(format!("Failed to read application secret: {}", e)))?;

    let token_cache_path = token_cache_path()?;

    if let Some(parent) = token_cache_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::Auth(format!("Failed to create token cache directory: {}", e))
        })?;
    }

    // Consent flow returns through a local redirect; cached tokens are
    // reloaded and refreshed on later runs without user interaction.
    let auth = InstalledFlowAuthenticator::builder(secret, InstalledFlowReturnMethod::HTTPRedirect)
        .persist_tokens_to_disk(token_cache_path)
        .build()
        .await
        .map_err(|e| AppError::Auth(format!("Failed to build authenticator: {}", e)))?;

    Ok(auth)
}

/// Verify that authentication works end to end, without touching any data.
pub async fn verify_authentication(paths: &SitePaths) -> Result<()> {
    let _auth = create_and_verify_authenticator(paths).await?;
    info!("Google authentication verified");
    Ok(())
}

/// Clear cached Google tokens by deleting the token cache file
#[instrument(name = "Clearing Google auth tokens", skip_all)]
pub fn clear_tokens() -> Result<()> {
    let token_path = token_cache_path()?;

    if !token_path.exists() {
        debug!("No Google tokens to clear");
        return Ok(());
    }

    fs::remove_file(&token_path)
        .map_err(|e| AppError::Auth(format!("Failed to delete tokens file: {}", e)))?;
    info!("Cleared cached Google tokens");

    Ok(())
}

fn token_cache_path() -> Result<PathBuf> {
    Config::cache_file("google_tokens.json")
}
