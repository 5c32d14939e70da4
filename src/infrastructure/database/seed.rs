//! Demo data for local runs and tests
//!
//! Seeds the six menu categories, a small Maltese menu and evening/lunch
//! table slots for a range of days. Does nothing when categories exist.

use chrono::{Days, NaiveDate, NaiveTime};
use log::debug;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};

use super::entities::{menu_category, menu_item, table_availability};

pub const SLOT_TIMES: [(u32, u32); 8] = [
    (12, 0),
    (12, 30),
    (13, 0),
    (19, 0),
    (19, 30),
    (20, 0),
    (20, 30),
    (21, 0),
];
pub const TABLES_PER_SLOT: i32 = 5;
pub const MAX_PARTY_SIZE: i32 = 8;

const CATEGORIES: [(i32, &str, i32); 6] = [
    (1, "Starters", 1),
    (2, "Traditional", 2),
    (3, "Seafood", 3),
    (4, "Mains", 4),
    (5, "Desserts", 5),
    (6, "Drinks", 6),
];

struct SeedItem {
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    allergens: &'static [&'static str],
    dietary_flags: &'static [&'static str],
    category_id: i32,
    popular: bool,
    spicy_level: i32,
    available: bool,
}

const ITEMS: &[SeedItem] = &[
    SeedItem {
        name: "Pastizzi",
        description: "Flaky pastry filled with ricotta",
        price_cents: 450,
        allergens: &["gluten", "dairy"],
        dietary_flags: &["vegetarian"],
        category_id: 1,
        popular: true,
        spicy_level: 0,
        available: true,
    },
    SeedItem {
        name: "Bigilla",
        description: "Broad bean dip with garlic and herbs, served with galletti",
        price_cents: 600,
        allergens: &["gluten"],
        dietary_flags: &["vegan", "vegetarian"],
        category_id: 1,
        popular: false,
        spicy_level: 1,
        available: true,
    },
    SeedItem {
        name: "Aljotta",
        description: "Fish soup with garlic, tomato and mint",
        price_cents: 950,
        allergens: &["fish"],
        dietary_flags: &["gluten-free"],
        category_id: 2,
        popular: false,
        spicy_level: 0,
        available: true,
    },
    SeedItem {
        name: "Stuffat tal-Fenek",
        description: "Rabbit slow-cooked in red wine and garlic",
        price_cents: 1895,
        allergens: &["celery", "sulphites"],
        dietary_flags: &["gluten-free", "dairy-free"],
        category_id: 2,
        popular: true,
        spicy_level: 0,
        available: true,
    },
    SeedItem {
        name: "Lampuki Pie",
        description: "Dorado fish pie with spinach, olives and capers",
        price_cents: 1650,
        allergens: &["fish", "gluten", "eggs"],
        dietary_flags: &[],
        category_id: 3,
        popular: true,
        spicy_level: 0,
        available: true,
    },
    SeedItem {
        name: "Grilled Octopus",
        description: "Char-grilled octopus with chilli and lemon",
        price_cents: 1900,
        allergens: &["molluscs"],
        dietary_flags: &["gluten-free", "dairy-free"],
        category_id: 3,
        popular: false,
        spicy_level: 1,
        available: true,
    },
    SeedItem {
        name: "Ross il-Forn",
        description: "Baked rice with minced meat, eggs and cheese",
        price_cents: 1400,
        allergens: &["eggs", "dairy"],
        dietary_flags: &[],
        category_id: 4,
        popular: false,
        spicy_level: 0,
        available: true,
    },
    SeedItem {
        name: "Imqaret",
        description: "Date-filled pastries, deep fried",
        price_cents: 550,
        allergens: &["gluten"],
        dietary_flags: &["vegan", "vegetarian"],
        category_id: 5,
        popular: true,
        spicy_level: 0,
        available: true,
    },
    SeedItem {
        name: "Seasonal Tart",
        description: "Ask for today's fruit",
        price_cents: 650,
        allergens: &["gluten", "dairy", "eggs"],
        dietary_flags: &["vegetarian"],
        category_id: 5,
        popular: false,
        spicy_level: 0,
        available: false,
    },
    SeedItem {
        name: "Kinnie",
        description: "Maltese bitter orange soft drink",
        price_cents: 250,
        allergens: &[],
        dietary_flags: &["vegan", "vegetarian", "gluten-free"],
        category_id: 6,
        popular: false,
        spicy_level: 0,
        available: true,
    },
];

fn json_list(values: &[&str]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Insert demo menu and `days` days of table slots starting at `start`.
pub async fn seed_demo_data(
    db: &DatabaseConnection,
    start: NaiveDate,
    days: u64,
) -> Result<(), DbErr> {
    if menu_category::Entity::find().count(db).await? > 0 {
        debug!("Demo data already present, skipping seed");
        return Ok(());
    }

    for (id, name, display_order) in CATEGORIES {
        menu_category::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            display_order: Set(display_order),
        }
        .insert(db)
        .await?;
    }

    for item in ITEMS {
        menu_item::ActiveModel {
            name: Set(item.name.to_string()),
            description: Set(Some(item.description.to_string())),
            price: Set(Decimal::new(item.price_cents, 2)),
            allergens: Set(json_list(item.allergens)),
            dietary_flags: Set(json_list(item.dietary_flags)),
            category_id: Set(item.category_id),
            popular: Set(item.popular),
            spicy_level: Set(item.spicy_level),
            available: Set(item.available),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    for offset in 0..days {
        let Some(date) = start.checked_add_days(Days::new(offset)) else {
            break;
        };
        for (hour, minute) in SLOT_TIMES {
            let Some(time_slot) = NaiveTime::from_hms_opt(hour, minute, 0) else {
                continue;
            };
            table_availability::ActiveModel {
                date: Set(date),
                time_slot: Set(time_slot),
                available_tables: Set(TABLES_PER_SLOT),
                max_party_size: Set(MAX_PARTY_SIZE),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    debug!(
        "Seeded {} categories, {} menu items, {} days of slots",
        CATEGORIES.len(),
        ITEMS.len(),
        days
    );
    Ok(())
}
