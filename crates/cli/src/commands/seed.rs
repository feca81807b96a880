//! Seed the admin database with launch settings and a starter menu.
//!
//! Settings are upserted, since there is only ever one row. Menu items are
//! only inserted when the table is empty, so re-running the command never
//! duplicates the menu.

use rust_decimal::Decimal;
use secrecy::SecretString;
use tracing::info;

use pizza_box_admin::db::menu::NewMenuItem;
use pizza_box_admin::db::{self, MenuRepository, SettingsRepository};
use pizza_box_core::StoreSettings;

/// The settings written at launch.
fn launch_settings() -> StoreSettings {
    StoreSettings {
        contact_phone: "+91 98765 43210".to_string(),
        contact_email: "orders@thepizzabox.example".to_string(),
        address: "12, 100 Feet Road, Indiranagar, Bengaluru".to_string(),
        min_order_amount: Decimal::new(19900, 2),
        ..StoreSettings::default()
    }
}

/// The starter menu.
fn starter_menu() -> Vec<NewMenuItem> {
    let item = |name: &str, description: &str, rupees: i64, category: &str, kind: &str| {
        NewMenuItem {
            name: name.to_string(),
            description: Some(description.to_string()),
            price: Decimal::new(rupees * 100, 2),
            category: Some(category.to_string()),
            item_type: Some(kind.to_string()),
            is_available: true,
        }
    };

    vec![
        item(
            "Margherita",
            "Tomato, mozzarella, and fresh basil",
            199,
            "Pizzas",
            "veg",
        ),
        item(
            "Peri Peri Paneer",
            "Peri peri paneer with onion and capsicum",
            249,
            "Pizzas",
            "veg",
        ),
        item(
            "Farmhouse",
            "Mushroom, corn, olives, and peppers",
            279,
            "Pizzas",
            "veg",
        ),
        item(
            "Chicken Tikka",
            "Tikka chicken with onion and mint drizzle",
            299,
            "Pizzas",
            "non_veg",
        ),
        item("Garlic Bread", "With herb butter", 99, "Sides", "veg"),
        item(
            "Stuffed Garlic Bread",
            "Cheese and corn filling",
            149,
            "Sides",
            "veg",
        ),
        item(
            "Choco Lava Cake",
            "Molten center, served warm",
            109,
            "Desserts",
            "veg",
        ),
        item("Cold Coffee", "Thick and sweet", 89, "Beverages", "veg"),
    ]
}

/// Seed launch settings and the starter menu.
///
/// # Errors
///
/// Returns an error if `ADMIN_DATABASE_URL` (or `DATABASE_URL`) is missing
/// or a database write fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "ADMIN_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;

    let settings = launch_settings();
    SettingsRepository::new(&pool).upsert(&settings).await?;
    info!(restaurant = %settings.restaurant_name, "Settings written");

    let menu = MenuRepository::new(&pool);
    let existing = menu.list_all().await?;
    if existing.is_empty() {
        let items = starter_menu();
        let count = items.len();
        for item in items {
            let id = menu.create(&item).await?;
            info!(%id, name = %item.name, "Menu item created");
        }
        info!(count, "Starter menu seeded");
    } else {
        info!(
            count = existing.len(),
            "Menu already has items, leaving it alone"
        );
    }

    Ok(())
}
