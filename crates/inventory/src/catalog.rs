use serde::Serialize;

use boutique_core::Entity;

use crate::item::{Category, Item, ItemKey};
use crate::section::Section;

/// Result of a sell attempt. None of these is an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "item", rename_all = "snake_case")]
pub enum SaleOutcome {
    /// One unit was sold; carries the item as it stands after the sale.
    Sold(Item),
    /// The first matching item has no stock left.
    OutOfStock,
    /// No item matches the name/category pair.
    NotFound,
}

impl SaleOutcome {
    pub fn is_sold(&self) -> bool {
        matches!(self, SaleOutcome::Sold(_))
    }

    /// Short machine-friendly name, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            SaleOutcome::Sold(_) => "sold",
            SaleOutcome::OutOfStock => "out_of_stock",
            SaleOutcome::NotFound => "not_found",
        }
    }
}

/// The whole store: sections in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Every section's rendering, in catalog order.
    ///
    /// Clearing the screen beforehand is up to the caller.
    pub fn render_catalog(&self) -> String {
        self.sections.iter().map(Section::render_catalog).collect()
    }

    /// Units in stock across the whole catalog.
    pub fn total_units(&self) -> u64 {
        self.items().map(|item| u64::from(item.stock())).sum()
    }

    /// First item matching `item_name` (case-insensitive) under `category_name`.
    pub fn find(&self, item_name: &str, category_name: &str) -> Option<&Item> {
        let key = Self::lookup_key(item_name, category_name)?;
        self.items().find(|item| item.id() == key)
    }

    /// Sells one unit of the first item matching the name/category pair.
    ///
    /// The scan stops at the first match whatever its stock: a sold-out first
    /// match is `OutOfStock` even if a later section carries the same item.
    /// An unknown category never matches.
    pub fn sell(&mut self, item_name: &str, category_name: &str) -> SaleOutcome {
        let Some(key) = Self::lookup_key(item_name, category_name) else {
            return SaleOutcome::NotFound;
        };

        let found = self
            .sections
            .iter_mut()
            .flat_map(|section| section.items_mut().iter_mut())
            .find(|item| item.id() == key);

        match found {
            Some(item) => {
                if item.sell() {
                    SaleOutcome::Sold(item.clone())
                } else {
                    SaleOutcome::OutOfStock
                }
            }
            None => SaleOutcome::NotFound,
        }
    }

    fn items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|section| section.items().iter())
    }

    fn lookup_key(item_name: &str, category_name: &str) -> Option<ItemKey> {
        Category::parse(category_name).map(|category| ItemKey::new(item_name, category))
    }
}

impl Extend<Section> for Catalog {
    fn extend<T: IntoIterator<Item = Section>>(&mut self, iter: T) {
        for section in iter {
            self.add_section(section);
        }
    }
}
