//! Per-screen presentation state.
//!
//! Each screen owns exactly the state its form binds to: a busy flag, an
//! error/success message pair, and its result fields. Every submission runs
//! the cycle `Idle -> Pending -> (Resolved | Failed)` afresh, clearing the
//! previous outcome first. The busy flag is an enforced re-entrancy guard:
//! a submission arriving while one is pending is rejected locally and never
//! reaches the network.
//!
//! No screen shares state with another; each instance is exclusively owned
//! by its caller.

pub mod items;
pub mod lookup;
pub mod search;
pub mod suppliers;

pub use items::{CreateItemScreen, DeleteItemScreen, ListItemsScreen, UpdateItemsScreen};
pub use lookup::LookupScreen;
pub use search::SearchScreen;
pub use suppliers::{CreateSupplierScreen, ListSuppliersScreen};

use stockroom_core::error::ScreenError;
use stockroom_core::messages;

/// Busy-guard rejection shared by every screen.
pub(crate) fn reentry_error() -> ScreenError {
    ScreenError::validation(messages::REQUEST_IN_FLIGHT)
}
