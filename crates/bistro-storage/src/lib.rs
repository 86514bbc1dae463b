//! # bistro-storage
//!
//! Storage abstraction layer for the Bistro restaurant directory.
//!
//! This crate defines the data model and the trait that directory backends
//! implement. It does not contain any implementations; those live in separate
//! crates such as `bistro-db-memory`.
//!
//! ## Overview
//!
//! The main trait is [`RestaurantStorage`], which defines:
//! - lookup by id and listing in insertion order
//! - create, delete and partial edit of restaurant records
//!
//! ## Example
//!
//! ```ignore
//! use bistro_storage::{NewRestaurant, RestaurantStorage, StorageError};
//!
//! async fn open_bistro(storage: &dyn RestaurantStorage) -> Result<i32, StorageError> {
//!     let created = storage
//!         .create(NewRestaurant::new("Le Petit", "French bistro"))
//!         .await?;
//!     Ok(created.id)
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::{ErrorCategory, StorageError};
pub use traits::RestaurantStorage;
pub use types::{Dish, NewRestaurant, Restaurant, RestaurantId, RestaurantPatch};

/// Type alias for a shareable storage trait object.
pub type DynStorage = std::sync::Arc<dyn RestaurantStorage>;

