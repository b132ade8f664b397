pub mod product;

pub use product::{Product, distinct_categories};
