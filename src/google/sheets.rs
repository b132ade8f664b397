use crate::error::{AppError, Result};
use crate::models::Product;
use async_trait::async_trait;
use google_sheets4::api::{Scope, Sheets};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use tracing::{info, instrument};

// Columns A-G of the first sheet: id, name, category, size, price,
// availability, note. Row 1 is the header.
const PRODUCT_RANGE: &str = "Sheet1!A:G";

#[async_trait]
pub trait SheetOperations {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

pub struct SheetsClient {
    hub: Sheets<HttpsConnector<HttpConnector>>,
    sheet_id: Option<String>,
}

impl SheetsClient {
    pub(super) fn new(hub: Sheets<HttpsConnector<HttpConnector>>, sheet_id: Option<String>) -> Self {
        Self { hub, sheet_id }
    }
}

#[async_trait]
impl SheetOperations for SheetsClient {
    #[instrument(name = "Fetching products", skip_all)]
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let sheet_id = self
            .sheet_id
            .as_deref()
            .ok_or_else(|| AppError::Config("Google Sheet ID not configured".to_string()))?;

        let (_, response) = self
            .hub
            .spreadsheets()
            .values_get(sheet_id, PRODUCT_RANGE)
            .major_dimension("ROWS")
            .value_render_option("FORMATTED_VALUE")
            .add_scope(Scope::SpreadsheetReadonly)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to fetch product rows: {}", e)))?;

        let values = response.values.unwrap_or_default();
        let products = Product::from_rows(&values);

        info!(
            rows = values.len(),
            products = products.len(),
            "Fetched products from Google Sheets"
        );

        Ok(products)
    }
}
