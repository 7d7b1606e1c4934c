use std::path::Path;

use tracing::{error, info};

use super::errors::DiscoveryError;
use crate::a11y::{AccessibleNode, CollectorLimits, SnapshotNode, collect_window_groups};
use crate::feed::ClientFeed;
use crate::labels::label_targets;
use crate::normalize::{RepairTuning, normalize_group};
use crate::target::Target;

/// Tuning for one discovery run
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DiscoveryOptions {
    pub limits: CollectorLimits,
    pub tuning: RepairTuning,
}

impl DiscoveryOptions {
    pub fn new(limits: CollectorLimits, tuning: RepairTuning) -> Self {
        Self { limits, tuning }
    }
}

/// Run collection, coordinate repair and labeling over one tree.
///
/// Collection completes for every window before any group is repaired.
/// Groups that cannot be repaired are dropped whole; the rest keep their
/// collection order.
///
/// # Errors
///
/// Returns [`DiscoveryError::NoTargets`] when nothing clickable survives.
pub fn discover_targets<N: AccessibleNode>(
    desktop: &N,
    feed: &ClientFeed,
    options: &DiscoveryOptions,
) -> Result<Vec<Target>, DiscoveryError> {
    info!(
        event = "core.discover.run_started",
        feed_clients = feed.clients().len()
    );

    let groups = collect_window_groups(desktop, &options.limits);

    let mut placed = Vec::new();
    let mut dropped_groups = 0;
    for group in &groups {
        match normalize_group(group, feed, &options.tuning) {
            Some(targets) => placed.extend(targets),
            None => dropped_groups += 1,
        }
    }

    if placed.is_empty() {
        error!(
            event = "core.discover.run_failed",
            groups = groups.len(),
            dropped_groups = dropped_groups,
            error = "no targets"
        );
        return Err(DiscoveryError::NoTargets);
    }

    let targets = label_targets(placed);
    info!(
        event = "core.discover.run_completed",
        groups = groups.len(),
        dropped_groups = dropped_groups,
        targets = targets.len(),
        label_width = targets.first().map_or(0, |t| t.label().len())
    );
    Ok(targets)
}

/// Read a JSON accessible-tree snapshot from disk.
pub fn load_tree(path: &Path) -> Result<SnapshotNode, DiscoveryError> {
    let text = std::fs::read_to_string(path).map_err(|source| DiscoveryError::TreeUnreadable {
        path: path.display().to_string(),
        source,
    })?;
    SnapshotNode::from_json(&text).map_err(|e| DiscoveryError::TreeInvalid {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::a11y::Role;
    use crate::feed::{ClientRecord, WindowGeometry};
    use crate::geometry::{Point, Size};
    use std::collections::HashSet;

    fn button(x: i32, y: i32) -> SnapshotNode {
        SnapshotNode::new(Role::PushButton).with_bounds(x, y, 40, 20)
    }

    fn app(pid: u32, title: &str, buttons: Vec<SnapshotNode>) -> SnapshotNode {
        SnapshotNode::new(Role::Application)
            .with_pid(pid)
            .with_children(vec![
                SnapshotNode::new(Role::Frame)
                    .with_name(title)
                    .with_children(buttons),
            ])
    }

    fn desktop(apps: Vec<SnapshotNode>) -> SnapshotNode {
        SnapshotNode::new(Role::DesktopFrame).with_children(apps)
    }

    fn client(pid: i32, title: &str, x: i32, y: i32, w: i32, h: i32) -> ClientRecord {
        ClientRecord::new(
            pid,
            title,
            WindowGeometry::new(Point::new(x, y), Size::new(w, h)),
        )
    }

    fn discover(tree: &SnapshotNode, feed: &ClientFeed) -> Result<Vec<Target>, DiscoveryError> {
        discover_targets(&tree, feed, &DiscoveryOptions::default())
    }

    #[test]
    fn test_absolute_coordinates_pass_through() {
        let tree = desktop(vec![app(10, "Editor", vec![button(100, 50), button(200, 50)])]);
        let targets = discover(&tree, &ClientFeed::default()).unwrap();

        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].label(), "a");
        assert_eq!(targets[0].click_point(), Point::new(120, 60));
        assert_eq!(targets[0].anchor_point(), Point::new(116, 58));
        assert_eq!(targets[1].label(), "b");
    }

    #[test]
    fn test_window_relative_group_is_shifted() {
        let tree = desktop(vec![app(10, "Editor", vec![button(10, 10), button(100, 10)])]);
        let feed = ClientFeed::new(vec![client(10, "Editor", 500, 300, 800, 600)]);
        let targets = discover(&tree, &feed).unwrap();

        assert_eq!(targets[0].click_point(), Point::new(530, 320));
        assert_eq!(targets[1].click_point(), Point::new(620, 320));
    }

    #[test]
    fn test_broken_group_laid_out_on_grid() {
        let link = SnapshotNode::new(Role::Link).with_bounds(0, 0, 30, 10);
        let tree = desktop(vec![app(20, "Reader", vec![link])]);
        let feed = ClientFeed::new(vec![client(20, "Reader", 100, 100, 260, 260)]);
        let targets = discover(&tree, &feed).unwrap();

        // One cell of 200x200 inset 30 from the window
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].click_point(), Point::new(230, 230));
        assert_eq!(targets[0].anchor_point(), Point::new(230, 230));
    }

    #[test]
    fn test_unresolvable_broken_group_dropped() {
        let tree = desktop(vec![
            app(20, "Ghost", vec![SnapshotNode::new(Role::Link).with_bounds(0, 0, 30, 10)]),
            app(30, "Editor", vec![button(400, 400)]),
        ]);
        let targets = discover(&tree, &ClientFeed::default()).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].click_point(), Point::new(420, 410));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let wide = SnapshotNode::new(Role::PushButton).with_bounds(2_147_483_000, 5, 2000, 10);
        let tree = desktop(vec![
            app(
                10,
                "Editor",
                vec![button(-2_000_000_000, 0), button(2_000_000_000, 0), wide],
            ),
            app(20, "Panel", vec![button(10, 10)]),
        ]);
        let feed = ClientFeed::new(vec![
            client(10, "Editor", 500, 300, 800, 600),
            client(20, "Panel", i32::MAX - 5, i32::MIN, 800, 600),
        ]);
        let targets = discover(&tree, &feed).unwrap();

        assert_eq!(targets.len(), 4);
        assert_eq!(targets[0].click_point(), Point::new(-1_999_999_980, 10));
        assert_eq!(targets[2].click_point(), Point::new(i32::MAX, 10));
        // Window-relative shift from an origin at the limits
        assert_eq!(targets[3].click_point(), Point::new(i32::MAX, i32::MIN + 20));
    }

    #[test]
    fn test_nothing_clickable_is_no_targets() {
        let label = SnapshotNode::new(Role::Label).with_bounds(10, 10, 50, 50);
        let tree = desktop(vec![app(10, "Empty", vec![label])]);
        assert!(matches!(
            discover(&tree, &ClientFeed::default()),
            Err(DiscoveryError::NoTargets)
        ));
    }

    #[test]
    fn test_all_groups_dropped_is_no_targets() {
        let tree = desktop(vec![app(
            20,
            "Ghost",
            vec![SnapshotNode::new(Role::Link).with_bounds(0, 0, 30, 10)],
        )]);
        assert!(matches!(
            discover(&tree, &ClientFeed::default()),
            Err(DiscoveryError::NoTargets)
        ));
    }

    #[test]
    fn test_many_targets_get_uniform_unique_labels() {
        let buttons = (0..30).map(|i| button(i * 50, (i % 3) * 40 + 100)).collect();
        let tree = desktop(vec![app(10, "Grid", buttons)]);
        let targets = discover(&tree, &ClientFeed::default()).unwrap();

        assert_eq!(targets.len(), 30);
        assert!(targets.iter().all(|t| t.label().len() == 2));
        let unique: HashSet<&str> = targets.iter().map(|t| t.label()).collect();
        assert_eq!(unique.len(), 30);
        assert_eq!(targets[0].label(), "aa");
        assert_eq!(targets[29].label(), "bd");
    }

    #[test]
    fn test_groups_resolved_independently() {
        let tree = desktop(vec![
            app(10, "Left", vec![button(10, 10)]),
            app(11, "Right", vec![button(900, 10)]),
        ]);
        let feed = ClientFeed::new(vec![
            client(10, "Left", 0, 0, 960, 1080),
            client(11, "Right", 960, 0, 960, 1080),
        ]);
        let targets = discover(&tree, &feed).unwrap();

        // Left window sits at the origin: no offset
        assert_eq!(targets[0].click_point(), Point::new(30, 20));
        // Right window is offset by its origin
        assert_eq!(targets[1].click_point(), Point::new(1880, 20));
    }

    #[test]
    fn test_load_tree_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tree.json");
        std::fs::write(
            &path,
            r#"{"role":"desktop frame","children":[{"role":"application","pid":7,
                "children":[{"role":"frame","name":"W","children":[
                {"role":"push button","bounds":{"x":5,"y":5,"w":10,"h":10}}]}]}]}"#,
        )
        .unwrap();

        let tree = load_tree(&path).unwrap();
        let targets = discover(&tree, &ClientFeed::default()).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].click_point(), Point::new(10, 10));
    }

    #[test]
    fn test_load_tree_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_tree(&missing),
            Err(DiscoveryError::TreeUnreadable { .. })
        ));

        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        assert!(matches!(
            load_tree(&bad),
            Err(DiscoveryError::TreeInvalid { .. })
        ));
    }
}
