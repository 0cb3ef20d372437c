use domain_items::{ItemRepository, ItemService};
use domain_users::{UserRepository, UserService};
use tracing::instrument;

use crate::error::StatsResult;
use crate::models::Stats;

/// Computes [`Stats`] by reading through the item and user services.
///
/// Each half of the snapshot is taken under its own repository lock; the
/// two halves are not read atomically with respect to each other.
pub struct StatsService<I: ItemRepository, U: UserRepository> {
    items: ItemService<I>,
    users: UserService<U>,
}

impl<I: ItemRepository, U: UserRepository> StatsService<I, U> {
    pub fn new(items: ItemService<I>, users: UserService<U>) -> Self {
        Self { items, users }
    }

    #[instrument(skip(self))]
    pub async fn compute(&self) -> StatsResult<Stats> {
        let inventory = self.items.inventory_summary().await?;
        let activity = self.users.activity_summary().await?;

        Ok(Stats::combine(inventory, activity))
    }
}

impl<I: ItemRepository, U: UserRepository> Clone for StatsService<I, U> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            users: self.users.clone(),
        }
    }
}
