use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CACHE_DIR_PREFIX: &str = "handicraft-sync";

const CONFIG_FILE: &str = "config.json";
const CREDENTIALS_FILE: &str = "credentials.json";
const DATA_FILE: &str = "products.json";

/// Environment fallbacks for the Google resource identifiers, used when
/// config.json is missing or unreadable.
pub const SHEET_ID_VAR: &str = "GOOGLE_SHEET_ID";
pub const DRIVE_FOLDER_ID_VAR: &str = "GOOGLE_DRIVE_FOLDER_ID";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub business: BusinessConfig,
    pub website: WebsiteConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct BusinessConfig {
    pub name: String,
    pub tagline: String,
    pub whatsapp_phone: String,
    pub whatsapp_message: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Om Handicraft".to_string(),
            tagline: "Handmade Gift Items & Crafts".to_string(),
            whatsapp_phone: String::new(),
            whatsapp_message: "Hi! I'm interested in your handicraft products. \
                               Can you tell me more about availability and pricing?"
                .to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct WebsiteConfig {
    pub theme: ThemeConfig,
    pub features: FeatureFlags,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        // Amber/Orange scheme
        Self {
            primary: "#f59e0b".to_string(),
            secondary: "#ea580c".to_string(),
            accent: "#dc2626".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FeatureFlags {
    pub show_availability: bool,
    pub show_sizes: bool,
    pub show_notes: bool,
    pub enable_category_filter: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            show_availability: true,
            show_sizes: true,
            show_notes: true,
            enable_category_filter: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GoogleConfig {
    pub sheet_id: Option<String>,
    pub drive_folder_id: Option<String>,
}

impl Config {
    /// Load config.json from the site directory.
    ///
    /// Never fails: a missing or unparseable file degrades to defaults with
    /// the Google resource identifiers taken from the environment. Stages
    /// that need an identifier treat `None` as unconfigured and error there.
    pub fn load(paths: &SitePaths) -> Self {
        let config_path = paths.config_file();

        match fs::read_to_string(&config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = ?config_path, "Could not parse config.json: {e}");
                    Self::from_env()
                }
            },
            Err(e) => {
                warn!(path = ?config_path, "Could not read config.json: {e}");
                Self::from_env()
            }
        }
    }

    fn from_env() -> Self {
        Self {
            google: GoogleConfig {
                sheet_id: std::env::var(SHEET_ID_VAR).ok().filter(|s| !s.is_empty()),
                drive_folder_id: std::env::var(DRIVE_FOLDER_ID_VAR)
                    .ok()
                    .filter(|s| !s.is_empty()),
            },
            ..Default::default()
        }
    }

    /// Write config.json back to the site directory, replacing any existing
    /// content. Used by the `configure` wizard.
    pub fn save(&self, paths: &SitePaths) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(paths.config_file(), contents)
            .map_err(|e| AppError::Config(format!("Failed to write config.json: {}", e)))?;
        Ok(())
    }

    fn xdg_dirs() -> xdg::BaseDirectories {
        xdg::BaseDirectories::with_prefix(CACHE_DIR_PREFIX)
    }

    /// Get a cache file path (token cache lives here, not in the site tree)
    pub fn cache_file(filename: &str) -> Result<PathBuf> {
        let xdg = Self::xdg_dirs();
        xdg.place_cache_file(filename)
            .map_err(|e| AppError::Config(format!("Failed to create cache file path: {}", e)))
    }
}

/// Filesystem layout of a site directory: where the config, credentials,
/// snapshot, and images live.
#[derive(Debug, Clone)]
pub struct SitePaths {
    site_dir: PathBuf,
}

impl SitePaths {
    pub fn new(site_dir: impl AsRef<Path>) -> Self {
        Self {
            site_dir: site_dir.as_ref().to_path_buf(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.site_dir.join(CONFIG_FILE)
    }

    pub fn credentials_file(&self) -> PathBuf {
        self.site_dir.join(CREDENTIALS_FILE)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.site_dir.join("data")
    }

    pub fn products_file(&self) -> PathBuf {
        self.data_dir().join(DATA_FILE)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.site_dir.join("images")
    }

    pub fn image_file(&self, product_id: &str) -> PathBuf {
        self.images_dir().join(format!("{}.jpg", product_id))
    }

    /// Create the data/ and images/ directories if they don't exist
    pub fn ensure_directories(&self) -> Result<()> {
        fs::create_dir_all(self.data_dir())?;
        fs::create_dir_all(self.images_dir())?;
        Ok(())
    }
}
