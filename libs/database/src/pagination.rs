use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Page size used when a request does not specify `limit`.
pub const DEFAULT_LIMIT: usize = 100;

/// Largest page a single request can ask for; bigger limits are clamped.
pub const MAX_LIMIT: usize = 1000;

/// A `skip`/`limit` window over a creation-ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Number of entries to skip from the start
    #[serde(default)]
    pub skip: usize,
    /// Maximum number of entries to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }

    /// The limit after clamping to [`MAX_LIMIT`].
    pub fn effective_limit(self) -> usize {
        self.limit.min(MAX_LIMIT)
    }

    /// Window an iterator. Skipping past the end yields nothing.
    pub fn apply<I: Iterator>(self, iter: I) -> impl Iterator<Item = I::Item> {
        iter.skip(self.skip).take(self.effective_limit())
    }
}
