// Split pane layout engine.
// A persistent binary split tree: panes are leaves, splits divide a rect in
// two at a ratio. Every operation returns a new tree sharing unchanged
// subtrees with the old one.

mod config;
mod drop_zone;
mod error;
mod node;
mod resize;
mod spatial;
mod structural;
mod tree;

pub use config::{LayoutConfig, INITIAL_RATIO, MIN_RATIO};
pub use drop_zone::drop_zone;
pub use error::{ConfigError, LayoutError, Result};
pub use node::{Node, Path, Side, Split};
pub use spatial::{Spatial, SpatialSlot};
pub use structural::StructuralKey;
pub use tree::SplitTree;

pub use tessel_core::{
    Direction, DropZone, FocusDirection, PaneHandle, PaneId, Rect, Size, SplitDirection, Vec2,
};
