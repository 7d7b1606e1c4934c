//! Accessibility tree access and target collection.
//!
//! The collector walks any tree implementing [`AccessibleNode`] and groups
//! clickable, on-screen elements by the window they belong to.

pub mod collector;
pub mod snapshot;
pub mod types;

pub use collector::{CollectorLimits, collect_window_groups};
pub use snapshot::SnapshotNode;
pub use types::{AccessibleNode, NodeError, NodeStates, Role, WindowGroup};
