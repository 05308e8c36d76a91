//! Filterable product table.
//!
//! Search text is split into tokens that must all appear in a product's
//! name; an optional toggle hides out-of-stock products. The survivors are
//! laid out as rows with a category header wherever the category changes.
//!
//! ```
//! use strictly_catalog::{FilterableProductTable, seed_products};
//!
//! let mut table = FilterableProductTable::new(seed_products());
//! table.set_filter_text("pea");
//! let rows = table.rows();
//! assert_eq!(rows[0].category(), Some("Vegetables"));
//! assert_eq!(rows[1].product().map(|p| p.name().as_str()), Some("Peas"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod filter;
mod product;
mod query;
mod table;

pub use config::{CatalogConfig, CatalogError};
pub use filter::{Row, filter_products, group_rows, product_rows};
pub use product::{Product, seed_products};
pub use query::Query;
pub use table::{COLUMNS, FilterableProductTable, IN_STOCK_LABEL, SEARCH_PLACEHOLDER, TableCommand};
