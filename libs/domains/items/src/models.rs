use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned on creation
    pub id: u64,
    /// Item name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Unit price, always greater than 0
    pub price: f64,
    /// Units in stock, never negative
    pub quantity: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i64,
}

/// DTO for replacing an existing item.
///
/// Every mutable field is overwritten; an omitted `description` clears it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,
    #[validate(range(min = 0, message = "quantity must not be negative"))]
    pub quantity: i64,
}

/// Item half of the statistics snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, ToSchema)]
pub struct InventorySummary {
    pub total_items: usize,
    /// Sum of `price * quantity` over all items
    pub total_inventory_value: f64,
}

impl Item {
    /// Build a new item. `created_at` and `updated_at` both start at `now`.
    pub fn new(id: u64, input: CreateItem, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace all mutable fields.
    ///
    /// `updated_at` never moves backwards, even if the clock does.
    pub fn replace(&mut self, update: UpdateItem, now: DateTime<Utc>) {
        self.name = update.name;
        self.description = update.description;
        self.price = update.price;
        self.quantity = update.quantity;
        self.updated_at = now.max(self.updated_at);
    }

    /// `price * quantity`
    pub fn stock_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn create(name: &str, price: f64, quantity: i64) -> CreateItem {
        CreateItem {
            name: name.to_string(),
            description: None,
            price,
            quantity,
        }
    }

    #[test]
    fn test_create_item_validation() {
        assert!(create("Book", 19.99, 10).validate().is_ok());
        assert!(create("Free", 0.01, 0).validate().is_ok());

        let errors = create("", 19.99, 10).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let errors = create("Bad", -5.0, 2).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));

        let errors = create("Zero", 0.0, 2).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));

        let errors = create("Short", 1.0, -1).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_description_is_optional_on_the_wire() {
        let input: CreateItem =
            serde_json::from_str(r#"{"name":"Book","price":19.99,"quantity":10}"#).unwrap();
        assert_eq!(input.description, None);
    }

    #[test]
    fn test_new_item_timestamps_match() {
        let now = Utc::now();
        let item = Item::new(1, create("Book", 2.5, 10), now);
        assert_eq!(item.created_at, item.updated_at);
        assert_eq!(item.stock_value(), 25.0);
    }

    #[test]
    fn test_replace_keeps_identity_and_never_rewinds() {
        let now = Utc::now();
        let mut item = Item::new(7, create("Book", 19.99, 10), now);

        let update = UpdateItem {
            name: "Ledger".to_string(),
            description: Some("bound".to_string()),
            price: 5.0,
            quantity: 3,
        };
        item.replace(update.clone(), now + TimeDelta::seconds(1));
        assert_eq!(item.id, 7);
        assert_eq!(item.created_at, now);
        assert_eq!(item.updated_at, now + TimeDelta::seconds(1));
        assert_eq!(item.name, "Ledger");

        item.replace(update, now - TimeDelta::seconds(10));
        assert_eq!(item.updated_at, now + TimeDelta::seconds(1));
    }
}
