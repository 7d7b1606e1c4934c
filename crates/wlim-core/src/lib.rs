//! wlim-core: Keyboard click hints over the accessibility tree
//!
//! This library finds clickable elements in an accessible tree, repairs
//! their coordinates against the compositor's window geometry, labels them
//! with fixed-width letter codes and resolves typed keystrokes to a click.
//!
//! # Main Entry Points
//!
//! - [`discover`] - Collect, repair and label targets
//! - [`matcher`] - Keystroke state machine
//! - [`session`] - Interactive selection with teardown-then-click ordering
//! - [`feed`] - Compositor geometry feed
//! - [`actuate`] - Synthetic pointer input
//! - [`config`] - Configuration management

pub mod a11y;
pub mod actuate;
pub mod config;
pub mod discover;
pub mod errors;
pub mod events;
pub mod feed;
pub mod geometry;
pub mod labels;
pub mod logging;
pub mod matcher;
pub mod normalize;
pub mod session;
pub mod target;

// Re-export commonly used types at crate root for convenience
pub use a11y::{AccessibleNode, CollectorLimits, Role, SnapshotNode, WindowGroup};
pub use actuate::{ActuationError, ActuationTiming, Actuator, RecordingActuator};
pub use config::WlimConfig;
pub use discover::{DiscoveryError, DiscoveryOptions};
pub use errors::{ConfigError, WlimError, WlimResult};
pub use feed::{ClientFeed, ClientRecord, FeedError, MonitorRecord, WindowGeometry};
pub use geometry::{Point, Rect, ScreenBounds, Size};
pub use matcher::{KeyEvent, KeystrokeMatcher, MatchOutcome, MatchState, Modifiers, MouseButton};
pub use normalize::RepairTuning;
pub use session::{HintSurface, KeySource, SessionError, SessionSettings};
pub use target::{PlacedTarget, Target};

// Re-export handler modules as the primary API
pub use discover::handler as discover_ops;
pub use session::handler as session_ops;

// Re-export logging initialization
pub use logging::init_logging;
