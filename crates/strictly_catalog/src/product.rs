//! Product records and the built-in seed catalog.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A catalog entry.
///
/// Price is kept as the display string; nothing computes with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Product {
    /// Product name, matched against the search text.
    #[new(into)]
    name: String,
    /// Category used for header rows.
    #[new(into)]
    category: String,
    /// Display price, e.g. `"$1"`.
    #[new(into)]
    price: String,
    /// Whether the product is in stock.
    stocked: bool,
}

/// The six products the table starts with, already grouped by category.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new("Apple", "Fruits", "$1", true),
        Product::new("Dragonfruit", "Fruits", "$1", true),
        Product::new("Passionfruit", "Fruits", "$2", false),
        Product::new("Spinach", "Vegetables", "$2", true),
        Product::new("Pumpkin", "Vegetables", "$4", false),
        Product::new("Peas", "Vegetables", "$1", true),
    ]
}
