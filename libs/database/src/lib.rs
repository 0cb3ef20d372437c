//! In-memory storage primitives shared by the domain repositories.
//!
//! The domains keep their collections in process memory. This crate holds the
//! pieces every collection needs regardless of what it stores:
//!
//! - [`id`] - per-collection monotonically increasing identifiers
//! - [`clock`] - an injectable time source for `created_at`/`updated_at`
//! - [`pagination`] - `skip`/`limit` windows over creation-ordered sequences
//!
//! # Example
//!
//! ```
//! use database::{Clock, IdGenerator, Pagination, SystemClock};
//!
//! let ids = IdGenerator::new();
//! assert_eq!(ids.next(), 1);
//! assert_eq!(ids.next(), 2);
//!
//! let _now = SystemClock.now();
//!
//! let page: Vec<_> = Pagination::new(1, 2).apply(10..20).collect();
//! assert_eq!(page, vec![11, 12]);
//! ```

pub mod clock;
pub mod id;
pub mod pagination;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use id::IdGenerator;
pub use pagination::{DEFAULT_LIMIT, MAX_LIMIT, Pagination};
