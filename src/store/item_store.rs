//! In-memory item storage

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::types::Item;

/// Insertion-ordered item collection shared between request handlers.
///
/// Every operation takes the lock for its full read or read-modify-write, so
/// readers only ever see the result of complete writes.
#[derive(Clone, Default)]
pub struct ItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in the order they were created
    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// Get an item by ID
    pub async fn get(&self, id: &str) -> Result<Item> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|item| item.has_id(id))
            .cloned()
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))
    }

    /// Create an item with a freshly generated ID
    pub async fn create(&self, name: String) -> Result<Item> {
        let item = Item::new(name);

        let mut items = self.items.write().await;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(Error::DuplicateId(item.id));
        }
        items.push(item.clone());

        tracing::debug!(id = %item.id, "Created item");
        Ok(item)
    }

    /// Replace the name of an existing item
    pub async fn update(&self, id: &str, name: String) -> Result<Item> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|item| item.has_id(id))
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))?;

        item.name = name;

        tracing::debug!(id = %item.id, "Updated item");
        Ok(item.clone())
    }

    /// Remove an item, returning it
    pub async fn delete(&self, id: &str) -> Result<Item> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|item| item.has_id(id))
            .ok_or_else(|| Error::ItemNotFound(id.to_string()))?;

        let removed = items.remove(index);

        tracing::debug!(id = %removed.id, "Deleted item");
        Ok(removed)
    }

    /// Number of live items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
