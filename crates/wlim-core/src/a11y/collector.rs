use tracing::{debug, info, warn};

use super::types::{AccessibleNode, WindowGroup};
use crate::geometry::Rect;

/// Deepest level below a window root that is still inspected
pub const DEFAULT_MAX_DEPTH: usize = 30;

/// Most targets admitted across all windows in one collection
pub const DEFAULT_MAX_TARGETS: usize = 1024;

/// How many recently accepted targets a new candidate is compared against
pub const DEFAULT_DEDUP_WINDOW: usize = 10;

/// Largest per-axis origin distance at which two candidates count as one
pub const DEFAULT_DEDUP_RADIUS: i32 = 4;

/// Hard ceilings and dedup parameters for one tree walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorLimits {
    pub max_depth: usize,
    pub max_targets: usize,
    pub dedup_window: usize,
    pub dedup_radius: i32,
}

impl Default for CollectorLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_targets: DEFAULT_MAX_TARGETS,
            dedup_window: DEFAULT_DEDUP_WINDOW,
            dedup_radius: DEFAULT_DEDUP_RADIUS,
        }
    }
}

/// Walk state shared by every window of one collection
struct Walker<'a> {
    limits: &'a CollectorLimits,
    /// Every accepted target so far, across windows, in acceptance order
    accepted: Vec<Rect>,
    duplicates: usize,
    anomalies: usize,
}

impl<'a> Walker<'a> {
    fn new(limits: &'a CollectorLimits) -> Self {
        Self {
            limits,
            accepted: Vec::new(),
            duplicates: 0,
            anomalies: 0,
        }
    }

    fn is_full(&self) -> bool {
        self.accepted.len() >= self.limits.max_targets
    }

    /// Near-duplicate test against the most recent accepted targets only
    fn is_duplicate(&self, candidate: &Rect) -> bool {
        let radius = i64::from(self.limits.dedup_radius);
        let near = |a: i32, b: i32| (i64::from(a) - i64::from(b)).abs() <= radius;
        self.accepted
            .iter()
            .rev()
            .take(self.limits.dedup_window)
            .any(|seen| near(seen.x, candidate.x) && near(seen.y, candidate.y))
    }

    fn walk<N: AccessibleNode>(&mut self, node: &N, depth: usize) {
        if depth > self.limits.max_depth || self.is_full() {
            return;
        }

        match node.role() {
            Ok(role) => {
                // Window roots may report themselves as hidden; only filter below them
                if depth > 0 && !self.is_on_screen(node) {
                    return;
                }
                if role.is_clickable() {
                    self.consider(node);
                }
            }
            Err(e) => {
                debug!(
                    event = "core.a11y.role_lookup_failed",
                    depth = depth,
                    error = %e
                );
                self.anomalies += 1;
            }
        }

        for index in 0..node.child_count() {
            if self.is_full() {
                break;
            }
            if let Some(child) = node.child_at(index) {
                self.walk(&child, depth + 1);
            }
        }
    }

    fn is_on_screen<N: AccessibleNode>(&mut self, node: &N) -> bool {
        match node.states() {
            Ok(states) => states.is_on_screen(),
            Err(e) => {
                debug!(event = "core.a11y.state_lookup_failed", error = %e);
                self.anomalies += 1;
                true
            }
        }
    }

    fn consider<N: AccessibleNode>(&mut self, node: &N) {
        match node.extents() {
            Ok(Some(rect)) if rect.has_area() => {
                if self.is_duplicate(&rect) {
                    self.duplicates += 1;
                } else {
                    self.accepted.push(rect);
                }
            }
            Ok(_) => {}
            Err(e) => {
                debug!(event = "core.a11y.extents_lookup_failed", error = %e);
                self.anomalies += 1;
            }
        }
    }
}

/// Collect clickable, on-screen targets from every window below `desktop`.
///
/// The tree is expected as desktop → applications → windows. Each window is
/// walked depth-first and yields one [`WindowGroup`] if it contributed any
/// target; the group records the application's pid and the window's name
/// for later geometry lookup. Individual node failures are absorbed.
pub fn collect_window_groups<N: AccessibleNode>(
    desktop: &N,
    limits: &CollectorLimits,
) -> Vec<WindowGroup> {
    info!(
        event = "core.a11y.collect_started",
        max_depth = limits.max_depth,
        max_targets = limits.max_targets
    );

    let mut walker = Walker::new(limits);
    let mut groups = Vec::new();

    for app_index in 0..desktop.child_count() {
        if walker.is_full() {
            break;
        }
        let Some(app) = desktop.child_at(app_index) else {
            continue;
        };
        let owner_pid = app.process_id().filter(|pid| *pid > 0);

        for window_index in 0..app.child_count() {
            if walker.is_full() {
                break;
            }
            let Some(window) = app.child_at(window_index) else {
                continue;
            };

            let start = walker.accepted.len();
            walker.walk(&window, 0);
            if walker.accepted.len() == start {
                continue;
            }

            let owner_title = window.name().filter(|name| !name.is_empty());
            debug!(
                event = "core.a11y.window_collected",
                pid = ?owner_pid,
                title = ?owner_title,
                count = walker.accepted.len() - start
            );
            groups.push(WindowGroup::new(
                walker.accepted[start..].to_vec(),
                owner_pid,
                owner_title,
            ));
        }
    }

    if walker.is_full() {
        warn!(
            event = "core.a11y.collect_truncated",
            max_targets = limits.max_targets
        );
    }

    info!(
        event = "core.a11y.collect_completed",
        windows = groups.len(),
        targets = walker.accepted.len(),
        duplicates = walker.duplicates,
        anomalies = walker.anomalies
    );
    groups
}
