use serde::Serialize;

use super::fields::{blocks, int_field, int_pair_field, str_field};
use crate::geometry::{Point, ScreenBounds, Size};

/// Longest window title kept from the feed, in characters
pub const MAX_TITLE_CHARS: usize = 255;

/// Extent used when the monitor feed yields nothing usable
pub const FALLBACK_SCREEN: ScreenBounds = ScreenBounds {
    width: 1920,
    height: 1080,
};

/// Authoritative origin and size of one on-screen window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowGeometry {
    pub origin: Point,
    pub size: Size,
}

impl WindowGeometry {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
}

/// One window record from the compositor's client list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pid: i32,
    title: String,
    geometry: WindowGeometry,
}

impl ClientRecord {
    pub fn new(pid: i32, title: impl Into<String>, geometry: WindowGeometry) -> Self {
        Self {
            pid,
            title: title.into(),
            geometry,
        }
    }

    /// Extract a record from one feed object. Absent fields become defaults.
    pub fn from_block(block: &str) -> Self {
        Self::from_block_with_title_limit(block, MAX_TITLE_CHARS)
    }

    pub fn from_block_with_title_limit(block: &str, max_title_chars: usize) -> Self {
        let (x, y) = int_pair_field(block, "at");
        let (width, height) = int_pair_field(block, "size");
        Self {
            pid: int_field(block, "pid", -1),
            title: str_field(block, "title", max_title_chars),
            geometry: WindowGeometry::new(Point::new(x, y), Size::new(width, height)),
        }
    }

    pub fn pid(&self) -> i32 {
        self.pid
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }
}

/// All window records of one geometry feed snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientFeed {
    clients: Vec<ClientRecord>,
}

impl ClientFeed {
    pub fn new(clients: Vec<ClientRecord>) -> Self {
        Self { clients }
    }

    /// Parse every top-level object of the feed text. Never fails.
    pub fn parse(text: &str) -> Self {
        Self::parse_with_title_limit(text, MAX_TITLE_CHARS)
    }

    pub fn parse_with_title_limit(text: &str, max_title_chars: usize) -> Self {
        Self {
            clients: blocks(text)
                .map(|block| ClientRecord::from_block_with_title_limit(block, max_title_chars))
                .collect(),
        }
    }

    pub fn clients(&self) -> &[ClientRecord] {
        &self.clients
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

/// One monitor rectangle from the compositor's monitor list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonitorRecord {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl MonitorRecord {
    pub fn from_block(block: &str) -> Self {
        Self {
            x: int_field(block, "x", 0),
            y: int_field(block, "y", 0),
            width: int_field(block, "width", 0),
            height: int_field(block, "height", 0),
        }
    }
}

pub fn parse_monitors(text: &str) -> Vec<MonitorRecord> {
    blocks(text).map(MonitorRecord::from_block).collect()
}

/// Union extent of all monitors: the furthest right and bottom edges.
///
/// Each axis falls back to [`FALLBACK_SCREEN`] independently when no monitor
/// contributes a positive extent on it.
pub fn screen_bounds(monitors: &[MonitorRecord], fallback: ScreenBounds) -> ScreenBounds {
    let max_x = monitors
        .iter()
        .map(|m| m.x.saturating_add(m.width))
        .max()
        .unwrap_or(0);
    let max_y = monitors
        .iter()
        .map(|m| m.y.saturating_add(m.height))
        .max()
        .unwrap_or(0);

    ScreenBounds::new(
        if max_x > 0 { max_x } else { fallback.width },
        if max_y > 0 { max_y } else { fallback.height },
    )
}
