// Core value types for the split pane widget.
// Geometry, orientation, bounded arithmetic, size units, and the inbound
// event payloads delivered by the hosting adapter.

mod bounded;
mod size;

pub use bounded::{Bounded, BoundedValue};
pub use size::{SizeUnit, PIXELS_UPPER_SENTINEL};

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

/// A single pointer sample, also used as the drag anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`, saturating at the i32 range.
    pub fn delta_from(self, other: Position) -> Position {
        Position::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}

/// Measured size of the container at the start of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct PaneDimensions {
    pub width: i32,
    pub height: i32,
}

impl PaneDimensions {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Extent along the split axis.
    pub fn extent(&self, orientation: Orientation) -> i32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

/// Integer rectangle handed back to the adapter for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Position) -> bool {
        point.x >= self.x
            && point.x <= self.x.saturating_add(self.width)
            && point.y >= self.y
            && point.y <= self.y.saturating_add(self.height)
    }
}

// ──────────────────────────────────────────────
// Orientation
// ──────────────────────────────────────────────

/// Horizontal panes sit side by side (split axis x); vertical panes stack
/// (split axis y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Picks the component of `delta` that moves the splitter.
    pub fn axis_delta(self, delta: Position) -> i32 {
        match self {
            Orientation::Horizontal => delta.x,
            Orientation::Vertical => delta.y,
        }
    }
}

// ──────────────────────────────────────────────
// Input payloads
// ──────────────────────────────────────────────

/// Press payload. Mouse presses carry primary coordinates, touch starts may
/// only carry the first touch point. The container size is measured by the
/// adapter at press time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressSample {
    #[serde(default)]
    pub primary_x: Option<i32>,
    #[serde(default)]
    pub primary_y: Option<i32>,
    #[serde(default)]
    pub touch_x: Option<i32>,
    #[serde(default)]
    pub touch_y: Option<i32>,
    pub container_width: i32,
    pub container_height: i32,
}

impl PressSample {
    /// A mouse press at `position` inside a container of `container` size.
    pub fn pointer(position: Position, container: PaneDimensions) -> Self {
        Self {
            primary_x: Some(position.x),
            primary_y: Some(position.y),
            touch_x: None,
            touch_y: None,
            container_width: container.width,
            container_height: container.height,
        }
    }

    /// A touch start whose only coordinates come from the touch list.
    pub fn touch(position: Position, container: PaneDimensions) -> Self {
        Self {
            primary_x: None,
            primary_y: None,
            touch_x: Some(position.x),
            touch_y: Some(position.y),
            container_width: container.width,
            container_height: container.height,
        }
    }

    /// Resolves each coordinate: primary first, then touch, then 0.
    pub fn position(&self) -> Position {
        Position::new(
            self.primary_x.or(self.touch_x).unwrap_or(0),
            self.primary_y.or(self.touch_y).unwrap_or(0),
        )
    }

    pub fn container(&self) -> PaneDimensions {
        PaneDimensions::new(self.container_width, self.container_height)
    }
}

/// Move/release payload. Only the client coordinates drive the splitter;
/// the rest are kept for the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerSample {
    pub client_x: i32,
    pub client_y: i32,
    pub page_x: i32,
    pub page_y: i32,
    pub screen_x: i32,
    pub screen_y: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl PointerSample {
    /// Sample whose every coordinate pair equals `position`.
    pub fn at(position: Position) -> Self {
        Self {
            client_x: position.x,
            client_y: position.y,
            page_x: position.x,
            page_y: position.y,
            screen_x: position.x,
            screen_y: position.y,
            offset_x: 0,
            offset_y: 0,
        }
    }

    pub fn client_position(&self) -> Position {
        Position::new(self.client_x, self.client_y)
    }
}

/// One discrete interaction delivered by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "sample", rename_all = "lowercase")]
pub enum PaneEvent {
    Press(PressSample),
    Move(PointerSample),
    Release(PointerSample),
}
