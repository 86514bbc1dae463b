use std::collections::HashSet;

use bistro_storage::{NewRestaurant, Restaurant, RestaurantId, RestaurantPatch, StorageError};
use tokio::sync::RwLock;

use crate::seed::seed_restaurants;

/// Records plus the id counter, guarded together so id assignment and
/// insertion happen under one lock acquisition.
#[derive(Debug)]
struct Directory {
    records: Vec<Restaurant>,
    /// Next id to hand out. `None` once the id space is exhausted.
    next_id: Option<RestaurantId>,
}

impl Directory {
    fn from_records(records: Vec<Restaurant>) -> Self {
        let next_id = match records.iter().map(|r| r.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { records, next_id }
    }

    fn allocate_id(&mut self) -> Result<RestaurantId, StorageError> {
        let id = self
            .next_id
            .ok_or_else(|| StorageError::internal("restaurant id space exhausted"))?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }
}

/// In-memory restaurant directory.
///
/// This storage implementation provides:
/// - Insertion-ordered records behind a `tokio::sync::RwLock`
/// - Monotonic id assignment; ids are never reused after deletion
/// - Partial edits that only touch supplied fields
#[derive(Debug)]
pub struct InMemoryStorage {
    directory: RwLock<Directory>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Creates an empty directory. The first id handed out is 1.
    pub fn new() -> Self {
        Self {
            directory: RwLock::new(Directory::from_records(Vec::new())),
        }
    }

    /// Creates a directory holding the three seed restaurants.
    pub fn seeded() -> Self {
        Self {
            directory: RwLock::new(Directory::from_records(seed_restaurants())),
        }
    }

    /// Creates a directory from existing records, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidInput` if two records share an id.
    pub fn with_records(records: Vec<Restaurant>) -> Result<Self, StorageError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(StorageError::invalid_input(format!(
                    "duplicate restaurant id {}",
                    record.id
                )));
            }
        }
        Ok(Self {
            directory: RwLock::new(Directory::from_records(records)),
        })
    }

    pub async fn get(&self, id: RestaurantId) -> Option<Restaurant> {
        let guard = self.directory.read().await;
        guard.records.iter().find(|r| r.id == id).cloned()
    }

    pub async fn all(&self) -> Vec<Restaurant> {
        self.directory.read().await.records.clone()
    }

    /// Assigns the next id and appends the record with an empty menu.
    pub async fn insert(&self, input: NewRestaurant) -> Result<Restaurant, StorageError> {
        let mut guard = self.directory.write().await;
        let id = guard.allocate_id()?;
        let restaurant = input.into_restaurant(id);
        guard.records.push(restaurant.clone());
        Ok(restaurant)
    }

    /// Removes all records with `id`, returning whether any existed.
    pub async fn remove(&self, id: RestaurantId) -> bool {
        let mut guard = self.directory.write().await;
        let before = guard.records.len();
        guard.records.retain(|r| r.id != id);
        guard.records.len() != before
    }

    pub async fn patch(
        &self,
        id: RestaurantId,
        patch: RestaurantPatch,
    ) -> Result<Restaurant, StorageError> {
        let mut guard = self.directory.write().await;
        let restaurant = guard
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StorageError::not_found(id))?;
        patch.apply(restaurant);
        Ok(restaurant.clone())
    }

    pub async fn len(&self) -> usize {
        self.directory.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_storage_starts_at_one() {
        let storage = InMemoryStorage::new();
        assert!(storage.is_empty().await);

        let created = storage.insert(NewRestaurant::new("A", "a")).await.unwrap();
        assert_eq!(created.id, 1);
        assert!(created.dishes.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_storage_continues_after_seed_ids() {
        let storage = InMemoryStorage::seeded();
        assert_eq!(storage.len().await, 3);

        let created = storage.insert(NewRestaurant::new("Test", "D")).await.unwrap();
        assert_eq!(created.id, 4);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let storage = InMemoryStorage::seeded();
        let first = storage.insert(NewRestaurant::new("A", "a")).await.unwrap();
        assert!(storage.remove(first.id).await);
        assert!(storage.remove(1).await);

        let second = storage.insert(NewRestaurant::new("B", "b")).await.unwrap();
        assert_eq!(second.id, first.id + 1);

        let ids: Vec<_> = storage.all().await.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, second.id]);
    }

    #[tokio::test]
    async fn test_with_records_rejects_duplicate_ids() {
        let records = vec![Restaurant::new(5, "A", "a"), Restaurant::new(5, "B", "b")];
        let err = InMemoryStorage::with_records(records).unwrap_err();
        assert!(matches!(err, StorageError::InvalidInput { .. }));
    }

    #[tokio::test]
    async fn test_with_records_keeps_order_and_counter() {
        let records = vec![Restaurant::new(9, "Nine", ""), Restaurant::new(2, "Two", "")];
        let storage = InMemoryStorage::with_records(records).unwrap();

        let names: Vec<_> = storage.all().await.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Nine", "Two"]);

        let created = storage.insert(NewRestaurant::default()).await.unwrap();
        assert_eq!(created.id, 10);
    }

    #[tokio::test]
    async fn test_id_space_exhausted() {
        let storage =
            InMemoryStorage::with_records(vec![Restaurant::new(RestaurantId::MAX, "Last", "")])
                .unwrap();

        let err = storage.insert(NewRestaurant::new("X", "x")).await.unwrap_err();
        assert!(matches!(err, StorageError::Internal { .. }));
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn test_patch_missing_record() {
        let storage = InMemoryStorage::new();
        let err = storage
            .patch(42, RestaurantPatch::new().with_name("x"))
            .await
            .unwrap_err();
        assert_eq!(err, StorageError::not_found(42));
    }
}
