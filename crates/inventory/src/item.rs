use serde::{Deserialize, Serialize};

use boutique_core::{DomainError, DomainResult, Entity, Money, ValueObject};

/// Audience an item is sold to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Men,
    Women,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 2] = [Category::Men, Category::Women];

    pub fn label(self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
        }
    }

    /// Case-insensitive lookup by label.
    ///
    /// The store's Spanish labels (`Varones`, `Damas`) are accepted
    /// alongside the English ones. Anything else yields `None`.
    pub fn parse(s: &str) -> Option<Category> {
        match s.to_lowercase().as_str() {
            "men" | "varones" => Some(Category::Men),
            "women" | "damas" => Some(Category::Women),
            _ => None,
        }
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.label())
    }
}

/// Natural key of an item: lowercased description + category.
///
/// Two items with equal keys answer the same sell query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    description: String,
    category: Category,
}

impl ItemKey {
    pub fn new(description: &str, category: Category) -> Self {
        Self {
            description: description.to_lowercase(),
            category,
        }
    }
}

/// A sellable product.
///
/// Only `stock` changes after construction, and only through [`Item::sell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    description: String,
    price: Money,
    stock: u32,
    size: String,
    category: Category,
}

impl Item {
    /// `price` is in the smallest currency unit.
    pub fn new(
        description: impl Into<String>,
        price: u64,
        stock: u32,
        size: impl Into<String>,
        category: Category,
    ) -> DomainResult<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        Ok(Self {
            description,
            price: Money::new(price),
            stock,
            size: size.into(),
            category,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// One-line summary: description, price, stock, size, category.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Takes one unit out of stock.
    ///
    /// Returns `false` and leaves the item untouched when nothing is left.
    pub fn sell(&mut self) -> bool {
        match self.stock.checked_sub(1) {
            Some(remaining) => {
                self.stock = remaining;
                true
            }
            None => false,
        }
    }
}

impl Entity for Item {
    type Id = ItemKey;

    fn id(&self) -> ItemKey {
        ItemKey::new(&self.description, self.category)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:<20} | ${:>10} | Stock: {:>3} | Size: {:<4} | {}",
            self.description, self.price, self.stock, self.size, self.category
        )
    }
}
