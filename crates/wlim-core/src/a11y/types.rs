use serde::{Deserialize, Serialize};

use crate::errors::WlimError;
use crate::geometry::Rect;

/// Accessible role, reduced to what matters for deciding clickability.
///
/// Deserializes from snake_case names as well as AT-SPI's spaced role names
/// ("push button", "page tab", ...). Unrecognized roles become [`Role::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "push button")]
    PushButton,
    #[serde(alias = "toggle button")]
    ToggleButton,
    #[serde(alias = "check box")]
    CheckBox,
    #[serde(alias = "radio button")]
    RadioButton,
    #[serde(alias = "menu item")]
    MenuItem,
    Link,
    #[serde(alias = "page tab")]
    PageTab,
    #[serde(alias = "combo box")]
    ComboBox,
    Entry,
    #[serde(alias = "spin button")]
    SpinButton,
    Slider,
    Icon,
    #[serde(alias = "list item")]
    ListItem,
    #[serde(alias = "table cell")]
    TableCell,
    #[serde(alias = "tree item")]
    TreeItem,
    #[serde(alias = "tool bar")]
    ToolBar,
    Text,
    #[serde(alias = "document web")]
    DocumentWeb,
    #[serde(alias = "desktop frame")]
    DesktopFrame,
    Application,
    Frame,
    Window,
    Dialog,
    Panel,
    Filler,
    Label,
    #[serde(other)]
    Other,
}

impl Role {
    /// Roles whose elements are offered as hint targets
    pub const CLICKABLE: [Role; 18] = [
        Role::PushButton,
        Role::ToggleButton,
        Role::CheckBox,
        Role::RadioButton,
        Role::MenuItem,
        Role::Link,
        Role::PageTab,
        Role::ComboBox,
        Role::Entry,
        Role::SpinButton,
        Role::Slider,
        Role::Icon,
        Role::ListItem,
        Role::TableCell,
        Role::TreeItem,
        Role::ToolBar,
        Role::Text,
        Role::DocumentWeb,
    ];

    pub fn is_clickable(self) -> bool {
        Self::CLICKABLE.contains(&self)
    }
}

/// The two state flags that decide whether a subtree is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStates {
    pub visible: bool,
    pub showing: bool,
}

impl NodeStates {
    pub fn is_on_screen(self) -> bool {
        self.visible && self.showing
    }
}

/// A failed query against a single accessible node
#[derive(Debug, Clone, thiserror::Error)]
pub enum NodeError {
    #[error("Node does not expose {what}")]
    Unavailable { what: &'static str },

    #[error("Accessibility backend error: {reason}")]
    Backend { reason: String },
}

impl WlimError for NodeError {
    fn error_code(&self) -> &'static str {
        match self {
            NodeError::Unavailable { .. } => "A11Y_NODE_UNAVAILABLE",
            NodeError::Backend { .. } => "A11Y_BACKEND_ERROR",
        }
    }
}

/// Read-only view of one node of an accessible tree.
///
/// Implementations wrap whatever accessibility backend is available. The
/// tree is untrusted: queries may fail individually, and child counts are
/// never relied on without the collector's own ceilings.
pub trait AccessibleNode: Sized {
    fn role(&self) -> Result<Role, NodeError>;

    fn states(&self) -> Result<NodeStates, NodeError>;

    /// Bounding rectangle as reported by the backend. `Ok(None)` when the node
    /// has no geometry at all.
    fn extents(&self) -> Result<Option<Rect>, NodeError>;

    fn child_count(&self) -> usize;

    fn child_at(&self, index: usize) -> Option<Self>;

    /// Owning process id, when the backend knows it
    fn process_id(&self) -> Option<u32>;

    fn name(&self) -> Option<String>;
}

/// Targets from one accessible window, in collection order, before any
/// geometry repair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowGroup {
    bounds: Vec<Rect>,
    owner_pid: Option<u32>,
    owner_title: Option<String>,
}

impl WindowGroup {
    pub fn new(bounds: Vec<Rect>, owner_pid: Option<u32>, owner_title: Option<String>) -> Self {
        Self {
            bounds,
            owner_pid,
            owner_title,
        }
    }

    /// Raw bounds of each collected element, exactly as the tree reported them
    pub fn bounds(&self) -> &[Rect] {
        &self.bounds
    }
    pub fn owner_pid(&self) -> Option<u32> {
        self.owner_pid
    }
    pub fn owner_title(&self) -> Option<&str> {
        self.owner_title.as_deref()
    }
    pub fn len(&self) -> usize {
        self.bounds.len()
    }
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clickable_roles() {
        assert!(Role::PushButton.is_clickable());
        assert!(Role::DocumentWeb.is_clickable());
        assert!(Role::ToolBar.is_clickable());
        assert!(!Role::Frame.is_clickable());
        assert!(!Role::Label.is_clickable());
        assert!(!Role::Other.is_clickable());
    }

    #[test]
    fn test_role_deserializes_atspi_names() {
        let role: Role = serde_json::from_str(r#""push button""#).unwrap();
        assert_eq!(role, Role::PushButton);
        let role: Role = serde_json::from_str(r#""page_tab""#).unwrap();
        assert_eq!(role, Role::PageTab);
        let role: Role = serde_json::from_str(r#""scroll pane""#).unwrap();
        assert_eq!(role, Role::Other);
    }

    #[test]
    fn test_node_states_on_screen() {
        assert!(NodeStates { visible: true, showing: true }.is_on_screen());
        assert!(!NodeStates { visible: true, showing: false }.is_on_screen());
        assert!(!NodeStates { visible: false, showing: true }.is_on_screen());
    }

    #[test]
    fn test_node_error_codes() {
        let error = NodeError::Unavailable { what: "role" };
        assert_eq!(error.to_string(), "Node does not expose role");
        assert_eq!(error.error_code(), "A11Y_NODE_UNAVAILABLE");
        assert!(!error.is_user_error());
    }
}
