//! Coordinate repair for collected window groups.
//!
//! Accessible trees on Wayland report element positions that may be
//! screen-absolute, window-relative or simply zero. Each window group is
//! classified against the compositor's client geometry and converted into
//! screen-absolute click and label positions.

pub mod handler;
pub mod titles;

pub use handler::{
    RepairStrategy, RepairTuning, apply_strategy, grid_points, normalize_group,
    resolve_window_geometry, select_strategy,
};
pub use titles::{TitleRules, titles_match};
