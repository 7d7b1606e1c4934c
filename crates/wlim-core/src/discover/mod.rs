//! The discovery pipeline: collect, repair, label.

pub mod errors;
pub mod handler;

pub use errors::DiscoveryError;
pub use handler::{DiscoveryOptions, discover_targets, load_tree};
