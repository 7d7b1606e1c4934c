use tracing::{debug, info, warn};

use super::titles::{TitleRules, titles_match};
use crate::a11y::WindowGroup;
use crate::feed::{ClientFeed, WindowGeometry};
use crate::geometry::Point;
use crate::target::PlacedTarget;

/// Share of zero-origin targets at which a window's coordinates are unusable
pub const DEFAULT_BROKEN_RATIO: f64 = 0.8;

/// Share of targets inside the window's own size at which coordinates are
/// taken to be window-relative
pub const DEFAULT_RELATIVE_RATIO: f64 = 0.8;

/// Inset of the synthetic grid from the window edges
pub const DEFAULT_GRID_MARGIN: i32 = 30;

/// Label offset from an element's top-left corner
pub const DEFAULT_ANCHOR_INSET: Point = Point { x: 16, y: 8 };

/// Heuristic parameters for coordinate repair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairTuning {
    pub broken_ratio: f64,
    pub relative_ratio: f64,
    pub grid_margin: i32,
    pub anchor_inset: Point,
    pub titles: TitleRules,
}

impl Default for RepairTuning {
    fn default() -> Self {
        Self {
            broken_ratio: DEFAULT_BROKEN_RATIO,
            relative_ratio: DEFAULT_RELATIVE_RATIO,
            grid_margin: DEFAULT_GRID_MARGIN,
            anchor_inset: DEFAULT_ANCHOR_INSET,
            titles: TitleRules::default(),
        }
    }
}

/// How a window group's coordinates get turned into screen positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepairStrategy {
    /// Reported positions are garbage; spread targets over the window
    Grid(WindowGeometry),
    /// Reported positions are garbage and the window cannot be located
    Drop,
    /// Reported positions are relative to the window at this origin
    WindowRelative(Point),
    /// Reported positions are already screen-absolute
    ScreenAbsolute,
}

impl RepairStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairStrategy::Grid(_) => "grid",
            RepairStrategy::Drop => "drop",
            RepairStrategy::WindowRelative(_) => "window_relative",
            RepairStrategy::ScreenAbsolute => "screen_absolute",
        }
    }
}

/// Find the compositor's geometry for a window group.
///
/// Exact pid match wins; otherwise the first client whose title matches the
/// window's accessible name.
pub fn resolve_window_geometry(
    group: &WindowGroup,
    feed: &ClientFeed,
    rules: &TitleRules,
) -> Option<WindowGeometry> {
    if let Some(pid) = group.owner_pid()
        && let Some(client) = feed
            .clients()
            .iter()
            .find(|c| c.pid() > 0 && i64::from(c.pid()) == i64::from(pid))
    {
        debug!(event = "core.normalize.resolved_by_pid", pid = pid);
        return Some(client.geometry());
    }

    let title = group.owner_title()?;
    let client = feed
        .clients()
        .iter()
        .find(|c| titles_match(c.title(), title, rules))?;
    debug!(
        event = "core.normalize.resolved_by_title",
        title = title,
        client_title = client.title()
    );
    Some(client.geometry())
}

fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

/// Pick the repair strategy for a group from its raw, unrepaired bounds.
///
/// The broken-coordinate check runs first; the window-relative check is only
/// reached when coordinates look usable.
pub fn select_strategy(
    group: &WindowGroup,
    geometry: Option<WindowGeometry>,
    tuning: &RepairTuning,
) -> RepairStrategy {
    let total = group.len();
    let usable = geometry.filter(|g| g.size.is_positive());

    let zeros = group
        .bounds()
        .iter()
        .filter(|b| b.origin().is_origin())
        .count();
    if ratio(zeros, total) >= tuning.broken_ratio {
        return match usable {
            Some(geometry) => RepairStrategy::Grid(geometry),
            None => RepairStrategy::Drop,
        };
    }

    let Some(geometry) = usable.filter(|g| !g.origin.is_origin()) else {
        return RepairStrategy::ScreenAbsolute;
    };

    let inside = group
        .bounds()
        .iter()
        .filter(|b| b.fits_within(geometry.size))
        .count();
    let inside_ratio = ratio(inside, total);
    debug!(
        event = "core.normalize.relative_ratio",
        inside = inside,
        total = total,
        ratio = inside_ratio
    );

    if inside_ratio >= tuning.relative_ratio {
        RepairStrategy::WindowRelative(geometry.origin)
    } else {
        RepairStrategy::ScreenAbsolute
    }
}

/// Cell centers of a near-square grid covering `geometry` inset by `margin`,
/// in row-major order.
pub fn grid_points(count: usize, geometry: &WindowGeometry, margin: i32) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let cols = ((count as f64).sqrt().ceil() as usize).max(1);
    let rows = count.div_ceil(cols);

    // Float math so feed values near the i32 limits cannot overflow
    let margin = f64::from(margin);
    let left = f64::from(geometry.origin.x) + margin;
    let top = f64::from(geometry.origin.y) + margin;
    let cell_width = (f64::from(geometry.size.width) - margin * 2.0) / cols as f64;
    let cell_height = (f64::from(geometry.size.height) - margin * 2.0) / rows as f64;

    (0..count)
        .map(|index| {
            let col = (index % cols) as f64;
            let row = (index / cols) as f64;
            Point::new(
                (left + col * cell_width + cell_width / 2.0) as i32,
                (top + row * cell_height + cell_height / 2.0) as i32,
            )
        })
        .collect()
}

/// Apply a strategy to a group. `None` means the group is dropped.
pub fn apply_strategy(
    group: &WindowGroup,
    strategy: RepairStrategy,
    tuning: &RepairTuning,
) -> Option<Vec<PlacedTarget>> {
    let offset = match strategy {
        RepairStrategy::Drop => return None,
        RepairStrategy::Grid(geometry) => {
            let points = grid_points(group.len(), &geometry, tuning.grid_margin);
            return Some(
                group
                    .bounds()
                    .iter()
                    .zip(points)
                    .map(|(bounds, center)| PlacedTarget::new(*bounds, center, center))
                    .collect(),
            );
        }
        RepairStrategy::WindowRelative(origin) => origin,
        RepairStrategy::ScreenAbsolute => Point::ORIGIN,
    };

    Some(
        group
            .bounds()
            .iter()
            .map(|bounds| {
                let corner = bounds.origin().offset(offset.x, offset.y);
                PlacedTarget::new(
                    *bounds,
                    corner.offset(bounds.width / 2, bounds.height / 2),
                    corner.offset(tuning.anchor_inset.x, tuning.anchor_inset.y),
                )
            })
            .collect(),
    )
}

/// Resolve, choose and apply coordinate repair for one window group.
///
/// Returns `None` when the group's coordinates are broken and its window
/// cannot be located, in which case the whole group is dropped.
pub fn normalize_group(
    group: &WindowGroup,
    feed: &ClientFeed,
    tuning: &RepairTuning,
) -> Option<Vec<PlacedTarget>> {
    let geometry = resolve_window_geometry(group, feed, &tuning.titles);
    let strategy = select_strategy(group, geometry, tuning);

    info!(
        event = "core.normalize.group_completed",
        title = group.owner_title(),
        pid = ?group.owner_pid(),
        count = group.len(),
        geometry_found = geometry.is_some(),
        strategy = strategy.as_str()
    );

    if let RepairStrategy::WindowRelative(origin) = strategy {
        debug!(
            event = "core.normalize.offset_applied",
            dx = origin.x,
            dy = origin.y
        );
    }

    let placed = apply_strategy(group, strategy, tuning);
    if placed.is_none() {
        warn!(
            event = "core.normalize.group_dropped",
            title = group.owner_title(),
            count = group.len()
        );
    }
    placed
}
