//! State machine enums for the controller.
//!
//! # State Machine
//!
//! The result area is always in one [`Phase`]:
//!
//! ```text
//! Idle ──search──▶ Loading ──≥1 result──▶ Loaded
//!                     │                     │
//!                     └──0 results/failure──▶ Empty
//! Loaded/Empty ──search or page change──▶ Loading
//! ```
//!
//! The selected detail is an independent overlay and not part of this machine.

pub use crate::domain::SortMode;

/// Phase of the result area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been searched yet.
    #[default]
    Idle,
    /// A search is outstanding.
    Loading,
    /// The last completed search returned at least one result.
    Loaded,
    /// The last completed search returned nothing or failed.
    Empty,
}

/// Direction of a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDelta {
    Previous,
    Next,
}

impl PageDelta {
    /// Applies the delta to `page`, returning `None` below page 1.
    #[must_use]
    pub const fn apply(self, page: u32) -> Option<u32> {
        match self {
            Self::Previous => page.checked_sub(1),
            Self::Next => page.checked_add(1),
        }
    }
}
