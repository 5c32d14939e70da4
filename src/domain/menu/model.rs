//! Menu domain entities

use rust_decimal::Decimal;

/// The fixed set of menu sections the assistant can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCategory {
    Starters,
    Traditional,
    Seafood,
    Mains,
    Desserts,
    Drinks,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 6] = [
        Self::Starters,
        Self::Traditional,
        Self::Seafood,
        Self::Mains,
        Self::Desserts,
        Self::Drinks,
    ];

    /// Row id in `menu_categories`.
    pub fn id(&self) -> i32 {
        match self {
            Self::Starters => 1,
            Self::Traditional => 2,
            Self::Seafood => 3,
            Self::Mains => 4,
            Self::Desserts => 5,
            Self::Drinks => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starters => "starters",
            Self::Traditional => "traditional",
            Self::Seafood => "seafood",
            Self::Mains => "mains",
            Self::Desserts => "desserts",
            Self::Drinks => "drinks",
        }
    }

    /// Exact, lowercase match on the name the voice tool sends.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An item on the menu, joined with its category name.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub allergens: Vec<String>,
    pub dietary_flags: Vec<String>,
    pub category_id: i32,
    pub category_name: String,
    pub popular: bool,
    pub spicy_level: i32,
    pub available: bool,
}

impl MenuItem {
    pub fn has_dietary_flag(&self, flag: &str) -> bool {
        self.dietary_flags.iter().any(|f| f == flag)
    }

    /// Requested allergens present in this item, compared case-insensitively.
    /// The caller's spelling is kept.
    pub fn matching_allergens(&self, requested: &[String]) -> Vec<String> {
        requested
            .iter()
            .filter(|wanted| {
                self.allergens
                    .iter()
                    .any(|present| present.to_lowercase() == wanted.to_lowercase())
            })
            .cloned()
            .collect()
    }
}

/// Filter for menu listings. `category_id: None` means every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub category_id: Option<i32>,
    pub dietary_flag: Option<String>,
}
