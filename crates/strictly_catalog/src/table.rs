//! Table state owner: the product list plus the two search controls.

use super::filter::{Row, filter_products, group_rows};
use super::product::Product;
use super::query::Query;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Column headers above the rows.
pub const COLUMNS: [&str; 2] = ["Name", "Price"];

/// Placeholder for the search text input.
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Label for the in-stock checkbox.
pub const IN_STOCK_LABEL: &str = "Only show products in stock";

/// A change forwarded from one of the search controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableCommand {
    /// The search text changed.
    SetFilterText(String),
    /// The in-stock checkbox changed.
    SetInStockOnly(bool),
}

/// Product table with a search box and an in-stock toggle.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct FilterableProductTable {
    /// Products in source order.
    products: Vec<Product>,
    /// Text in the search box.
    filter_text: String,
    /// State of the in-stock checkbox.
    in_stock_only: bool,
}

impl FilterableProductTable {
    /// Creates a table with an empty search and the toggle off.
    #[instrument(skip(products), fields(products = products.len()))]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            filter_text: String::new(),
            in_stock_only: false,
        }
    }

    /// Updates the search text.
    #[instrument(skip(self, text))]
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        debug!(filter_text = %self.filter_text, "Filter text changed");
    }

    /// Updates the in-stock toggle.
    #[instrument(skip(self))]
    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.in_stock_only = in_stock_only;
    }

    /// Applies a control change.
    pub fn dispatch(&mut self, command: TableCommand) {
        match command {
            TableCommand::SetFilterText(text) => self.set_filter_text(text),
            TableCommand::SetInStockOnly(flag) => self.set_in_stock_only(flag),
        }
    }

    /// The parsed search query.
    pub fn query(&self) -> Query {
        Query::parse(&self.filter_text)
    }

    /// Products passing both controls, in source order.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.query(), self.in_stock_only)
    }

    /// Rows to display: category headers interleaved with visible products.
    pub fn rows(&self) -> Vec<Row> {
        group_rows(self.visible_products())
    }
}
