//! Storage trait for the directory storage layer.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::types::{NewRestaurant, Restaurant, RestaurantId, RestaurantPatch};

/// The trait that all restaurant directory backends implement.
///
/// Every method is a single atomic read-modify-write over the backend's
/// collection. Implementations must be thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// use bistro_storage::{RestaurantStorage, StorageError};
///
/// async fn rename(storage: &dyn RestaurantStorage, id: i32) -> Result<(), StorageError> {
///     let patch = RestaurantPatch::new().with_name("Renamed");
///     storage.update(id, patch).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RestaurantStorage: Send + Sync {
    /// Reads a restaurant by id.
    ///
    /// Returns `None` if no record has this id.
    ///
    /// # Errors
    ///
    /// Returns an error only for backend failures, not for missing records.
    async fn read(&self, id: RestaurantId) -> Result<Option<Restaurant>, StorageError>;

    /// Returns every live record in insertion order.
    async fn list(&self) -> Result<Vec<Restaurant>, StorageError>;

    /// Creates a record with an empty menu and a newly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Internal` if no further id can be assigned.
    async fn create(&self, input: NewRestaurant) -> Result<Restaurant, StorageError>;

    /// Removes every record with this id.
    ///
    /// Returns `true` iff at least one record existed before removal.
    async fn delete(&self, id: RestaurantId) -> Result<bool, StorageError>;

    /// Applies `patch` to the record with this id and returns the result.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no record has this id.
    async fn update(
        &self,
        id: RestaurantId,
        patch: RestaurantPatch,
    ) -> Result<Restaurant, StorageError>;

    /// Number of live records.
    async fn count(&self) -> Result<usize, StorageError>;

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
