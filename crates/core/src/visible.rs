//! How much of the catalog is revealed.

use serde::{Deserialize, Serialize};

/// Number of catalog products currently shown.
///
/// Starts at [`VisibleCount::STEP`] and grows by the same step each time the
/// visitor asks for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibleCount(u32);

impl VisibleCount {
    /// Initial count and reveal step.
    pub const STEP: u32 = 6;

    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self(count)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Reveal another [`Self::STEP`] products.
    #[must_use]
    pub const fn reveal_more(self) -> Self {
        Self(self.0.saturating_add(Self::STEP))
    }

    /// The revealed prefix of `items`.
    #[must_use]
    pub fn visible<T>(self, items: &[T]) -> &[T] {
        let count = usize::try_from(self.0)
            .unwrap_or(usize::MAX)
            .min(items.len());
        items.get(..count).unwrap_or(items)
    }

    /// Whether some of `total` items are still hidden.
    #[must_use]
    pub fn has_more(self, total: usize) -> bool {
        usize::try_from(self.0).is_ok_and(|count| count < total)
    }
}

impl Default for VisibleCount {
    fn default() -> Self {
        Self(Self::STEP)
    }
}
