//! In-memory storage backend for the Bistro restaurant directory.
//!
//! This crate provides [`InMemoryStorage`], an owned implementation of the
//! `RestaurantStorage` trait from `bistro-storage`. The collection lives
//! behind a single `tokio::sync::RwLock`, so each operation is atomic.
//!
//! # Example
//!
//! ```ignore
//! use bistro_db_memory::{InMemoryStorage, RestaurantStorage};
//!
//! let storage = InMemoryStorage::seeded();
//! let karma = storage.read(3).await?;
//! ```

pub mod factory;
mod directory_impl;
pub mod seed;
pub mod storage;

// Re-export the storage trait for convenience
pub use bistro_storage::{RestaurantStorage, StorageError};

pub use factory::{StorageOptions, create_storage};
pub use storage::InMemoryStorage;
