use crate::item::Item;

const RULE_WIDTH: usize = 70;
const COLUMN_HEADER: &str = "Item                 | Price       | Stock      | Size       | Category";

/// A titled, ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    title: String,
    items: Vec<Item>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item. Duplicates are not checked.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Title, column header and one line per item, in insertion order.
    ///
    /// An empty section renders as the empty string.
    pub fn render_catalog(&self) -> String {
        if self.items.is_empty() {
            return String::new();
        }

        let rule = "-".repeat(RULE_WIDTH);
        let mut out = format!("\n{}:\n{rule}\n{COLUMN_HEADER}\n{rule}\n", self.title);
        for item in &self.items {
            out.push_str(&item.describe());
            out.push('\n');
        }
        out
    }
}

impl Extend<Item> for Section {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        for item in iter {
            self.add_item(item);
        }
    }
}
