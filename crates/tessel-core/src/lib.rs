// Core types shared by the tessel crates.
// Geometry primitives, pane handles and the direction vocabulary used by the
// split tree, the focus navigator and drag-and-drop.

mod tests;

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Geometry
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side has no positive extent.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect anchored at the origin covering `size`.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.max_x()
            && point.y >= self.y
            && point.y <= self.max_y()
    }
}

// ──────────────────────────────────────────────
// Panes
// ──────────────────────────────────────────────

/// Anything the layout can place in a leaf.
///
/// The tree only ever compares and hashes handles; it never looks inside
/// them. Every `Clone + Eq + Hash + Debug` type qualifies.
pub trait PaneHandle: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> PaneHandle for T {}

/// Numeric pane handle for hosts that don't bring their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(pub u64);

impl PaneId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for PaneId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane#{}", self.0)
    }
}

// ──────────────────────────────────────────────
// Directions
// ──────────────────────────────────────────────

/// The axis a split divides along.
///
/// `Horizontal` places children side by side (left | right),
/// `Vertical` stacks them (top / bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitDirection {
    Horizontal,
    Vertical,
}

/// Cardinal direction, used for insertion, resize and spatial focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The split axis that moves along this direction.
    pub fn split_direction(self) -> SplitDirection {
        match self {
            Direction::Left | Direction::Right => SplitDirection::Horizontal,
            Direction::Up | Direction::Down => SplitDirection::Vertical,
        }
    }

    /// Left and up point toward the first (left/top) child of a split.
    pub fn is_leading(self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

/// Where focus should move from the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusDirection {
    Previous,
    Next,
    Spatial(Direction),
}

/// Edge of a pane a dragged pane was dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropZone {
    Top,
    Bottom,
    Left,
    Right,
}

impl DropZone {
    /// Tie-break order when a point is equally close to several edges.
    pub const PRECEDENCE: [DropZone; 4] =
        [DropZone::Top, DropZone::Bottom, DropZone::Left, DropZone::Right];

    /// The insertion direction relative to the drop target.
    pub fn direction(self) -> Direction {
        match self {
            DropZone::Top => Direction::Up,
            DropZone::Bottom => Direction::Down,
            DropZone::Left => Direction::Left,
            DropZone::Right => Direction::Right,
        }
    }
}
