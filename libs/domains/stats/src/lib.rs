//! Stats Domain
//!
//! Point-in-time aggregate over the item and user collections. Holds no
//! state of its own; every figure is read through the owning services.

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;

pub use error::{StatsError, StatsResult};
pub use handlers::ApiDoc;
pub use models::Stats;
pub use service::StatsService;
