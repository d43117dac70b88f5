//! Host data shown by the demo table.

/// A named group of items, drawn as one collapsible section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// Icon class list, e.g. `"fas fa-apple-whole"`
    pub icon: String,
    /// Whether the section should start out open
    pub open: bool,
    pub items: Vec<Item>,
    pub subcategories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub quantity: u32,
    pub note: String,
    /// Short status shown as a pill, if any
    pub tag: Option<String>,
}

impl Item {
    pub fn new(name: &str, quantity: u32, note: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            note: note.to_string(),
            tag: None,
        }
    }

    pub fn tagged(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }
}

impl Category {
    pub fn new(name: &str, icon: &str, open: bool) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
            open,
            items: Vec::new(),
            subcategories: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn with_subcategory(mut self, category: Category) -> Self {
        self.subcategories.push(category);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub categories: Vec<Category>,
}

impl Inventory {
    /// The sample data the demo starts with
    pub fn sample() -> Self {
        Self {
            categories: vec![
                Category::new("Fruits", "fas fa-apple-whole", true)
                    .with_items([
                        Item::new("Apple", 12, "Braeburn, from the orchard down the road"),
                        Item::new("Banana", 6, "Still a little green").tagged("ripening"),
                        Item::new("Pear", 3, "Conference"),
                    ])
                    .with_subcategory(Category::new("Citrus", "fas fa-lemon", false).with_items(
                        [
                            Item::new("Lemon", 4, "Unwaxed"),
                            Item::new("Orange", 8, "Blood oranges").tagged("seasonal"),
                        ],
                    )),
                Category::new("Veggies", "fas fa-carrot", false).with_items([
                    Item::new("Carrot", 10, "Bunched with tops"),
                    Item::new("Leek", 2, "Thick stems"),
                ]),
                Category::new("Herbs", "fas fa-leaf", false),
            ],
        }
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Category> {
        fn find<'a>(categories: &'a mut [Category], name: &str) -> Option<&'a mut Category> {
            for category in categories {
                if category.name == name {
                    return Some(category);
                }
                if let Some(found) = find(&mut category.subcategories, name) {
                    return Some(found);
                }
            }
            None
        }
        find(&mut self.categories, name)
    }

    /// Appends a placeholder item to `category`. Returns the new item's name.
    pub fn add_item(&mut self, category: &str) -> Option<String> {
        let category = self.find_mut(category)?;
        let name = format!("New item {}", category.items.len() + 1);
        category.items.push(Item::new(&name, 1, ""));
        Some(name)
    }
}
