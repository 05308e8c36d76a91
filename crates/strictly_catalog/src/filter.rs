//! Filtering products and grouping them into table rows.

use super::product::Product;
use super::query::Query;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Row {
    /// Category header spanning the table.
    Category {
        /// Category name.
        name: String,
    },
    /// A product line.
    Product {
        /// The product shown on this line.
        product: Product,
    },
}

impl Row {
    /// Returns the product on a product row.
    pub fn product(&self) -> Option<&Product> {
        match self {
            Row::Product { product } => Some(product),
            Row::Category { .. } => None,
        }
    }

    /// Returns the category name on a header row.
    pub fn category(&self) -> Option<&str> {
        match self {
            Row::Category { name } => Some(name.as_str()),
            Row::Product { .. } => None,
        }
    }
}

/// Products whose name matches `query` and, with `in_stock_only`, are stocked.
///
/// Source order is preserved.
#[instrument(skip(products), fields(products = products.len()))]
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &Query,
    in_stock_only: bool,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| query.matches(p.name()))
        .filter(|p| !in_stock_only || *p.stocked())
        .collect()
}

/// Interleaves category headers with products.
///
/// A header is emitted whenever a product's category differs from the
/// previous product's. Products are not re-sorted, so a category that
/// reappears after another one gets a second header.
pub fn group_rows<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut last_category: Option<&str> = None;

    for product in products {
        if last_category != Some(product.category().as_str()) {
            trace!(category = %product.category(), "Category header");
            rows.push(Row::Category {
                name: product.category().clone(),
            });
        }
        last_category = Some(product.category().as_str());
        rows.push(Row::Product {
            product: product.clone(),
        });
    }

    rows
}

/// Filters then groups: the rows the table displays.
pub fn product_rows(products: &[Product], query: &Query, in_stock_only: bool) -> Vec<Row> {
    group_rows(filter_products(products, query, in_stock_only))
}
