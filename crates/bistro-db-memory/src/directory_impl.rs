//! Implementation of the RestaurantStorage trait for InMemoryStorage.

use async_trait::async_trait;
use tracing::{debug, trace};

use bistro_storage::{
    NewRestaurant, Restaurant, RestaurantId, RestaurantPatch, RestaurantStorage, StorageError,
};

use crate::storage::InMemoryStorage;

#[async_trait]
impl RestaurantStorage for InMemoryStorage {
    async fn read(&self, id: RestaurantId) -> Result<Option<Restaurant>, StorageError> {
        let found = self.get(id).await;
        trace!(id, found = found.is_some(), "read restaurant");
        Ok(found)
    }

    async fn list(&self) -> Result<Vec<Restaurant>, StorageError> {
        Ok(self.all().await)
    }

    async fn create(&self, input: NewRestaurant) -> Result<Restaurant, StorageError> {
        let created = self.insert(input).await?;
        debug!(id = created.id, name = %created.name, "restaurant created");
        Ok(created)
    }

    async fn delete(&self, id: RestaurantId) -> Result<bool, StorageError> {
        let existed = self.remove(id).await;
        debug!(id, existed, "restaurant delete");
        Ok(existed)
    }

    async fn update(
        &self,
        id: RestaurantId,
        patch: RestaurantPatch,
    ) -> Result<Restaurant, StorageError> {
        if patch.is_empty() {
            trace!(id, "empty patch, record left unchanged");
        }
        let updated = self.patch(id, patch).await?;
        debug!(id, "restaurant updated");
        Ok(updated)
    }

    async fn count(&self) -> Result<usize, StorageError> {
        Ok(self.len().await)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
