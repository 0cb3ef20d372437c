//! Item Service - Business logic layer

use database::Pagination;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, InventorySummary, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Clones share the same repository.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: u64) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// List items in creation order
    #[instrument(skip(self))]
    pub async fn list_items(&self, page: Pagination) -> ItemResult<Vec<Item>> {
        self.repository.list(page).await
    }

    /// Replace an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: u64, input: UpdateItem) -> ItemResult<Item> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: u64) -> ItemResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }

    /// Count all items
    #[instrument(skip(self))]
    pub async fn count_items(&self) -> ItemResult<usize> {
        self.repository.count().await
    }

    /// Item half of the statistics snapshot
    #[instrument(skip(self))]
    pub async fn inventory_summary(&self) -> ItemResult<InventorySummary> {
        self.repository.inventory_summary().await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
