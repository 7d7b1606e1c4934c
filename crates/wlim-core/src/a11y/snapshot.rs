//! A serializable accessible tree, as dumped by an AT-SPI client.
//!
//! ```json
//! {"role": "desktop frame", "children": [
//!   {"role": "application", "pid": 4242, "children": [
//!     {"role": "frame", "name": "Inbox — Mail", "visible": false, "children": [
//!       {"role": "push button", "bounds": {"x": 10, "y": 20, "width": 80, "height": 24}}
//!     ]}
//!   ]}
//! ]}
//! ```
//!
//! `visible` and `showing` default to true. A node without `role`, or with an
//! `error` string, reports a failed role lookup.

use serde::{Deserialize, Serialize};

use super::types::{AccessibleNode, NodeError, NodeStates, Role};
use crate::geometry::Rect;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pid: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bounds: Option<Rect>,
    #[serde(default = "default_true")]
    visible: bool,
    #[serde(default = "default_true")]
    showing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    pub fn new(role: Role) -> Self {
        Self {
            role: Some(role),
            name: None,
            pid: None,
            bounds: None,
            visible: true,
            showing: true,
            error: None,
            children: Vec::new(),
        }
    }

    /// A node whose role lookup fails with the given backend reason
    pub fn broken(reason: impl Into<String>) -> Self {
        Self {
            role: None,
            error: Some(reason.into()),
            ..Self::new(Role::Other)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = Some(pid);
        self
    }

    pub fn with_bounds(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.bounds = Some(Rect::new(x, y, width, height));
        self
    }

    pub fn with_states(mut self, visible: bool, showing: bool) -> Self {
        self.visible = visible;
        self.showing = showing;
        self
    }

    pub fn with_children(mut self, children: Vec<SnapshotNode>) -> Self {
        self.children = children;
        self
    }

    pub fn children(&self) -> &[SnapshotNode] {
        &self.children
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl<'a> AccessibleNode for &'a SnapshotNode {
    fn role(&self) -> Result<Role, NodeError> {
        if let Some(reason) = &self.error {
            return Err(NodeError::Backend {
                reason: reason.clone(),
            });
        }
        self.role.ok_or(NodeError::Unavailable { what: "role" })
    }

    fn states(&self) -> Result<NodeStates, NodeError> {
        Ok(NodeStates {
            visible: self.visible,
            showing: self.showing,
        })
    }

    fn extents(&self) -> Result<Option<Rect>, NodeError> {
        Ok(self.bounds)
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<Self> {
        let node: &'a SnapshotNode = *self;
        node.children.get(index)
    }

    fn process_id(&self) -> Option<u32> {
        self.pid
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_defaults() {
        let node = SnapshotNode::from_json(
            r#"{"role":"frame","children":[{"role":"push button","bounds":{"x":1,"y":2,"w":3,"h":4}}]}"#,
        )
        .unwrap();
        let root = &node;
        assert_eq!(root.role().unwrap(), Role::Frame);
        assert!(root.states().unwrap().is_on_screen());
        assert_eq!(root.child_count(), 1);

        let child = root.child_at(0).unwrap();
        assert_eq!(child.role().unwrap(), Role::PushButton);
        assert_eq!(child.extents().unwrap(), Some(Rect::new(1, 2, 3, 4)));
        assert!(root.child_at(1).is_none());
    }

    #[test]
    fn test_missing_role_is_lookup_error() {
        let node = SnapshotNode::from_json(r#"{"name":"?"}"#).unwrap();
        match (&node).role() {
            Err(NodeError::Unavailable { what }) => assert_eq!(what, "role"),
            other => panic!("Expected Unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_error_marker_is_backend_error() {
        let node = SnapshotNode::broken("dbus timeout");
        match (&node).role() {
            Err(NodeError::Backend { reason }) => assert_eq!(reason, "dbus timeout"),
            other => panic!("Expected Backend error, got {:?}", other),
        }
    }
}
