use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Number of sheet columns a row must populate to count as a product
/// (columns A-G: id, name, category, size, price, availability, note).
const REQUIRED_COLUMNS: usize = 7;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub size: String,
    pub price: u32,
    pub availability: String,
    pub image: String,
    pub note: String,
}

impl Product {
    /// Map raw sheet rows to products.
    ///
    /// The first row is the header and is discarded. Rows with fewer than
    /// seven cells are dropped without error; the batch-level log is the only
    /// signal. The image filename is derived from the id, whatever the source
    /// file in Drive is actually called.
    pub fn from_rows(rows: &[Vec<Value>]) -> Vec<Product> {
        rows.iter()
            .skip(1)
            .filter(|row| row.len() >= REQUIRED_COLUMNS)
            .map(|row| {
                let id = cell_text(&row[0]);
                Product {
                    image: format!("{}.jpg", id),
                    id,
                    name: cell_text(&row[1]),
                    category: cell_text(&row[2]),
                    size: cell_text(&row[3]),
                    price: parse_price(&cell_text(&row[4])),
                    availability: cell_text(&row[5]),
                    note: cell_text(&row[6]),
                }
            })
            .collect()
    }
}

/// Cells arrive as JSON values; formatted sheet output is strings, but
/// unformatted numbers and booleans can appear too.
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Digit strings become integers; anything else (including negatives and
/// currency-formatted values) defaults to zero.
fn parse_price(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Sorted, duplicate-free list of the category values in the batch.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|p| p.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Demonstration products for first-run testing, before the sheet is wired up.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "pottery-001".to_string(),
            name: "Handmade Ceramic Bowl".to_string(),
            category: "Pottery".to_string(),
            size: "Medium".to_string(),
            price: 450,
            availability: "In Stock".to_string(),
            image: "pottery-001.jpg".to_string(),
            note: "Beautiful handcrafted ceramic bowl perfect for serving".to_string(),
        },
        Product {
            id: "pottery-002".to_string(),
            name: "Handmade Ceramic Bowl".to_string(),
            category: "Pottery".to_string(),
            size: "Large".to_string(),
            price: 650,
            availability: "In Stock".to_string(),
            image: "pottery-002.jpg".to_string(),
            note: "Beautiful handcrafted ceramic bowl perfect for serving".to_string(),
        },
        Product {
            id: "wood-001".to_string(),
            name: "Carved Wooden Box".to_string(),
            category: "Woodwork".to_string(),
            size: "Small".to_string(),
            price: 800,
            availability: "Limited Stock".to_string(),
            image: "wood-001.jpg".to_string(),
            note: "Hand-carved wooden jewelry box with intricate details".to_string(),
        },
    ]
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use super::*;

    pub(crate) fn mock_product(id: &str, category: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("mock product: {id}"),
            category: category.to_string(),
            size: "Medium".to_string(),
            price: 450,
            availability: "In Stock".to_string(),
            image: format!("{id}.jpg"),
            note: String::new(),
        }
    }

    pub(crate) fn sheet_row(cells: &[&str]) -> Vec<Value> {
        cells.iter().map(|c| Value::String(c.to_string())).collect()
    }

    pub(crate) fn header_row() -> Vec<Value> {
        sheet_row(&[
            "ID",
            "Name",
            "Category",
            "Size",
            "Price",
            "Availability",
            "Note",
        ])
    }
}
