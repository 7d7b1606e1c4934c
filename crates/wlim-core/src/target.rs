use serde::Serialize;

use crate::geometry::{Point, Rect};

/// A target whose screen positions have been resolved but which has no label yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTarget {
    bounds: Rect,
    click_point: Point,
    anchor_point: Point,
}

impl PlacedTarget {
    pub fn new(bounds: Rect, click_point: Point, anchor_point: Point) -> Self {
        Self {
            bounds,
            click_point,
            anchor_point,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
    pub fn click_point(&self) -> Point {
        self.click_point
    }
    pub fn anchor_point(&self) -> Point {
        self.anchor_point
    }

    pub fn with_label(self, label: String) -> Target {
        debug_assert!(!label.is_empty(), "Target label must not be empty");
        Target {
            bounds: self.bounds,
            click_point: self.click_point,
            anchor_point: self.anchor_point,
            label,
        }
    }
}

/// A fully resolved, labeled hint target. The label never changes once set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    bounds: Rect,
    click_point: Point,
    anchor_point: Point,
    label: String,
}

impl Target {
    /// Raw bounds in whatever coordinate space the tree reported
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
    /// Screen-absolute point to click when selected
    pub fn click_point(&self) -> Point {
        self.click_point
    }
    /// Screen-absolute top-left of the rendered label
    pub fn anchor_point(&self) -> Point {
        self.anchor_point
    }
    pub fn label(&self) -> &str {
        &self.label
    }
}
