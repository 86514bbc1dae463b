//! Data model for the restaurant directory.

use serde::{Deserialize, Serialize};

/// Identifier of a restaurant record. GraphQL `Int` is a signed 32-bit value.
pub type RestaurantId = i32;

/// A dish on a restaurant's menu. Dishes have no identity of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub price: i32,
}

impl Dish {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A restaurant record as held by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Unique among live records, assigned by the storage backend.
    pub id: RestaurantId,
    pub name: String,
    pub description: String,
    /// Menu in insertion order.
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Restaurant {
    /// Creates a record with an empty menu.
    pub fn new(
        id: RestaurantId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            dishes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_dishes(mut self, dishes: Vec<Dish>) -> Self {
        self.dishes = dishes;
        self
    }
}

/// Input for creating a restaurant. New records never carry dishes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
}

impl NewRestaurant {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Builds the stored record for the given id.
    pub fn into_restaurant(self, id: RestaurantId) -> Restaurant {
        Restaurant::new(id, self.name, self.description)
    }
}

/// A partial edit. `None` fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RestaurantPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `true` if the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Applies the supplied fields to `restaurant`.
    pub fn apply(self, restaurant: &mut Restaurant) {
        if let Some(name) = self.name {
            restaurant.name = name;
        }
        if let Some(description) = self.description {
            restaurant.description = description;
        }
    }
}
