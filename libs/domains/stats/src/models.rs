use domain_items::InventorySummary;
use domain_users::ActivitySummary;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate statistics over items and users
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Stats {
    pub total_items: usize,
    pub total_users: usize,
    /// Sum of `price * quantity` over all items
    pub total_inventory_value: f64,
    pub active_users: usize,
}

impl Stats {
    pub fn combine(items: InventorySummary, users: ActivitySummary) -> Self {
        Self {
            total_items: items.total_items,
            total_users: users.total_users,
            total_inventory_value: items.total_inventory_value,
            active_users: users.active_users,
        }
    }
}
