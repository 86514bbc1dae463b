//! Records the directory starts with.

use bistro_storage::{Dish, Restaurant};

/// The three restaurants a fresh seeded directory holds, ids 1 through 3.
pub fn seed_restaurants() -> Vec<Restaurant> {
    vec![
        Restaurant::new(
            1,
            "WoodsHill",
            "American cuisine, farm to table, with fresh produce every day",
        )
        .with_dishes(vec![
            Dish::new("Swordfish grill", 27),
            Dish::new("Roasted Broccoli", 11),
        ]),
        Restaurant::new(
            2,
            "Fiorellas",
            "Italian-American home cooked food with fresh pasta and sauces",
        )
        .with_dishes(vec![
            Dish::new("Flatbread", 14),
            Dish::new("Carbonara", 18),
            Dish::new("Spaghetti", 19),
        ]),
        Restaurant::new(
            3,
            "Karma",
            "Malaysian-Chinese-Japanese fusion, with great bar and bartenders",
        )
        .with_dishes(vec![
            Dish::new("Dragon Roll", 12),
            Dish::new("Pancake roll", 11),
            Dish::new("Cod cakes", 13),
        ]),
    ]
}
