use std::sync::atomic::{AtomicU64, Ordering};

/// Issues positive identifiers for one collection.
///
/// Every call to [`IdGenerator::next`] returns a value strictly greater than
/// all values returned before it, starting at 1. Identifiers are never handed
/// out twice, even if the entity that owned one has since been removed.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next identifier.
    pub fn next(&self) -> u64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// The most recently issued identifier, or 0 if none was issued yet.
    #[cfg(test)]
    pub fn last_issued(&self) -> u64 {
        self.last.load(Ordering::Relaxed)
    }
}
