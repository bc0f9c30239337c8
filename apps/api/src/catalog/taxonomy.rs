//! Gift taxonomy — the fixed category → item mapping used by the keyword
//! fallback and the catalog endpoints.
//!
//! Built once in `main` and shared as `Arc<GiftTaxonomy>`. There is no write
//! access after construction.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Closed set of gift categories. Declaration order is the taxonomy's
/// iteration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftCategory {
    Tech,
    Fashion,
    Home,
    Hobbies,
    Wellness,
    Food,
}

impl GiftCategory {
    pub const ALL: [GiftCategory; 6] = [
        GiftCategory::Tech,
        GiftCategory::Fashion,
        GiftCategory::Home,
        GiftCategory::Hobbies,
        GiftCategory::Wellness,
        GiftCategory::Food,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GiftCategory::Tech => "tech",
            GiftCategory::Fashion => "fashion",
            GiftCategory::Home => "home",
            GiftCategory::Hobbies => "hobbies",
            GiftCategory::Wellness => "wellness",
            GiftCategory::Food => "food",
        }
    }
}

impl fmt::Display for GiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown gift category: {0}")]
pub struct UnknownCategory(pub String);

/// Exact, case-sensitive match on the lowercase key.
impl FromStr for GiftCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GiftCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// One category and its representative items, in display order.
#[derive(Debug, Clone)]
pub struct CategoryItems {
    pub category: GiftCategory,
    pub items: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GiftTaxonomy {
    categories: Vec<CategoryItems>,
    relationships: Vec<String>,
}

const TECH: &[&str] = &[
    "Smartphone",
    "Wireless Earbuds",
    "Smart Watch",
    "Laptop",
    "Tablet",
    "Gaming Console",
    "VR Headset",
];

const FASHION: &[&str] = &[
    "Designer Bag",
    "Watch",
    "Jewelry",
    "Shoes",
    "Clothing",
    "Accessories",
    "Perfume",
];

const HOME: &[&str] = &[
    "Kitchen Appliances",
    "Home Decor",
    "Furniture",
    "Smart Home Devices",
    "Plants",
    "Artwork",
];

const HOBBIES: &[&str] = &[
    "Books",
    "Musical Instruments",
    "Sports Equipment",
    "Craft Supplies",
    "Camera",
    "Board Games",
];

const WELLNESS: &[&str] = &[
    "Spa Gift Card",
    "Fitness Tracker",
    "Yoga Mat",
    "Meditation App",
    "Massage Chair",
    "Essential Oils",
];

const FOOD: &[&str] = &[
    "Gourmet Food Basket",
    "Wine/Champagne",
    "Cooking Class",
    "Restaurant Gift Card",
    "Chocolate Box",
    "Coffee/Tea Set",
];

const RELATIONSHIPS: &[&str] = &[
    "Partner",
    "Parent",
    "Child",
    "Sibling",
    "Friend",
    "Colleague",
    "Boss",
    "Teacher",
    "Neighbor",
];

impl GiftTaxonomy {
    /// The built-in taxonomy. Every category has at least one item, which the
    /// keyword fallback's fill loop depends on.
    pub fn builtin() -> Self {
        let categories = GiftCategory::ALL
            .into_iter()
            .map(|category| {
                let items = match category {
                    GiftCategory::Tech => TECH,
                    GiftCategory::Fashion => FASHION,
                    GiftCategory::Home => HOME,
                    GiftCategory::Hobbies => HOBBIES,
                    GiftCategory::Wellness => WELLNESS,
                    GiftCategory::Food => FOOD,
                };
                CategoryItems {
                    category,
                    items: items.iter().map(|s| s.to_string()).collect(),
                }
            })
            .collect();

        Self {
            categories,
            relationships: RELATIONSHIPS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn categories(&self) -> &[CategoryItems] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&'static str> {
        self.categories.iter().map(|c| c.category.as_str()).collect()
    }

    pub fn relationships(&self) -> &[String] {
        &self.relationships
    }

    pub fn items(&self, category: GiftCategory) -> &[String] {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }
}
