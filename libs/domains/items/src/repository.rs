use async_trait::async_trait;
use database::{IdGenerator, Pagination, SharedClock, SystemClock};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, InventorySummary, Item, UpdateItem};

/// Repository trait for Item storage
///
/// Implementations own the item collection and enforce its invariants:
/// ids are never reused and every stored item passes validation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Create a new item
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: u64) -> ItemResult<Option<Item>>;

    /// List items in creation order
    async fn list(&self, page: Pagination) -> ItemResult<Vec<Item>>;

    /// Replace all mutable fields of an existing item
    async fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Item>;

    /// Delete an item by ID, returning whether it existed
    async fn delete(&self, id: u64) -> ItemResult<bool>;

    /// Count stored items
    async fn count(&self) -> ItemResult<usize>;

    /// Item count and total stock value, read in one pass
    async fn inventory_summary(&self) -> ItemResult<InventorySummary>;
}

/// In-memory implementation of ItemRepository
///
/// Ids are ascending, so the `BTreeMap` iterates in creation order.
#[derive(Debug, Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<u64, Item>>>,
    ids: Arc<IdGenerator>,
    clock: SharedClock,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
            ids: Arc::new(IdGenerator::new()),
            clock,
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;

        let mut items = self.items.write().await;
        let item = Item::new(self.ids.next(), input, self.clock.now());
        items.insert(item.id, item.clone());

        tracing::info!(item_id = item.id, name = %item.name, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: u64) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list(&self, page: Pagination) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(page.apply(items.values()).cloned().collect())
    }

    async fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Item> {
        let mut items = self.items.write().await;
        let item = items.get_mut(&id).ok_or(ItemError::NotFound(id))?;

        input.validate()?;
        item.replace(input, self.clock.now());

        tracing::info!(item_id = id, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: u64) -> ItemResult<bool> {
        let mut items = self.items.write().await;
        let removed = items.remove(&id).is_some();

        if removed {
            tracing::info!(item_id = id, "Deleted item");
        }
        Ok(removed)
    }

    async fn count(&self) -> ItemResult<usize> {
        let items = self.items.read().await;
        Ok(items.len())
    }

    async fn inventory_summary(&self) -> ItemResult<InventorySummary> {
        let items = self.items.read().await;
        Ok(InventorySummary {
            total_items: items.len(),
            total_inventory_value: items.values().map(Item::stock_value).sum(),
        })
    }
}
