//! Geometry feed: the compositor's best-effort list of window and monitor
//! rectangles, used to cross-check what the accessibility tree reports.

pub mod errors;
pub mod fields;
pub mod hyprctl;
pub mod types;

pub use errors::FeedError;
pub use types::{
    ClientFeed, ClientRecord, FALLBACK_SCREEN, MonitorRecord, WindowGeometry, parse_monitors,
    screen_bounds,
};

use std::path::Path;

/// Read a saved feed snapshot from disk.
pub fn read_feed_file(path: &Path) -> Result<String, FeedError> {
    std::fs::read_to_string(path).map_err(|source| FeedError::ReadFailed {
        path: path.display().to_string(),
        source,
    })
}
