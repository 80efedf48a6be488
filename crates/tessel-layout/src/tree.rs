use std::sync::Arc;

use tessel_core::{Direction, DropZone, PaneHandle};

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::node::{self, Node, Path, Split};

// ──────────────────────────────────────────────
// SplitTree
// ──────────────────────────────────────────────

/// The pane layout of one tab.
///
/// A tree is a value: every operation returns a new tree and leaves `self`
/// untouched, sharing unchanged subtrees with it. The owner keeps the current
/// tree and swaps in the result.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitTree<P> {
    pub(crate) root: Option<Arc<Node<P>>>,
    /// Node shown alone while zoomed. Always reachable from `root`.
    pub(crate) zoomed: Option<Arc<Node<P>>>,
}

impl<P> Default for SplitTree<P> {
    fn default() -> Self {
        Self {
            root: None,
            zoomed: None,
        }
    }
}

impl<P: PaneHandle> SplitTree<P> {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A tree holding a single pane.
    pub fn new(pane: P) -> Self {
        Self::from_root(Node::Leaf(pane))
    }

    pub fn from_root(root: Node<P>) -> Self {
        Self {
            root: Some(Arc::new(root)),
            zoomed: None,
        }
    }

    pub fn root(&self) -> Option<&Arc<Node<P>>> {
        self.root.as_ref()
    }

    pub fn zoomed(&self) -> Option<&Arc<Node<P>>> {
        self.zoomed.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// True once the tree holds more than one pane.
    pub fn is_split(&self) -> bool {
        matches!(self.root.as_deref(), Some(Node::Split(_)))
    }

    pub fn contains(&self, node: &Node<P>) -> bool {
        self.root.as_ref().is_some_and(|root| root.contains(node))
    }

    /// All panes in left-first order, the order sequential focus cycles in.
    pub fn leaves(&self) -> Vec<P> {
        self.root.as_ref().map(|root| root.leaves()).unwrap_or_default()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.leaf_count())
    }

    pub fn path_to(&self, node: &Node<P>) -> Option<Path> {
        self.root.as_ref()?.path_to(node)
    }

    pub fn find_pane(&self, pane: &P) -> Option<Path> {
        self.path_to(&Node::Leaf(pane.clone()))
    }

    pub fn node_at(&self, path: &Path) -> Option<&Arc<Node<P>>> {
        node::node_at(self.root.as_ref()?, path.steps())
    }

    // ──────────────────────────────────────────
    // Mutation
    // ──────────────────────────────────────────

    /// Place `pane` next to `anchor`, splitting the anchor's slot in half.
    ///
    /// `direction` says on which side of the anchor the new pane lands.
    pub fn insert(&self, pane: P, anchor: &P, direction: Direction) -> Result<Self> {
        self.insert_with(pane, anchor, direction, &LayoutConfig::default())
    }

    pub fn insert_with(
        &self,
        pane: P,
        anchor: &P,
        direction: Direction,
        config: &LayoutConfig,
    ) -> Result<Self> {
        let Some(path) = self.find_pane(anchor) else {
            log::debug!("insert: anchor {:?} not in tree", anchor);
            return Err(LayoutError::NodeNotFound);
        };
        let existing = self.node_at(&path).ok_or(LayoutError::NodeNotFound)?;

        let new_leaf = Arc::new(Node::Leaf(pane));
        let (left, right) = if direction.is_leading() {
            (new_leaf, Arc::clone(existing))
        } else {
            (Arc::clone(existing), new_leaf)
        };
        let split = Node::Split(Split::new(
            direction.split_direction(),
            config.validated().initial_ratio,
            left,
            right,
        ));

        let mut tree = self.rebuild_at(&path, Arc::new(split))?;
        // A zoomed anchor stays zoomed on itself rather than on the new split.
        if self.zoomed.as_deref() == Some(&**existing) {
            tree.zoomed = Some(Arc::clone(existing));
        }
        log::debug!(
            "insert: split {:?} {:?}, {} panes",
            anchor,
            direction,
            tree.leaf_count()
        );
        Ok(tree)
    }

    /// Remove `node` and its whole subtree.
    ///
    /// Splits left with a single child collapse into that child. Removing the
    /// root empties the tree. Removing a node that isn't there is a no-op.
    /// Zoom is cleared when the zoomed node itself goes; removing inside it
    /// keeps zoom on what remains.
    pub fn remove(&self, node: &Node<P>) -> Self {
        let Some(root) = self.root.as_ref() else {
            return self.clone();
        };
        let root = node::remove_node(root, node);
        // Zoom follows whatever is left of the zoomed subtree.
        let zoomed = match (&root, &self.zoomed) {
            (Some(root), Some(zoomed)) => node::remove_node(zoomed, node).and_then(|rest| {
                let path = root.path_to(&rest)?;
                node::node_at(root, path.steps()).cloned()
            }),
            _ => None,
        };
        log::debug!(
            "remove: {} panes left",
            root.as_ref().map_or(0, |root| root.leaf_count())
        );
        Self { root, zoomed }
    }

    pub fn remove_pane(&self, pane: &P) -> Self {
        self.remove(&Node::Leaf(pane.clone()))
    }

    /// Put `new_node` where `node` is. Zoom on `node` moves to `new_node`.
    pub fn replace(&self, node: &Node<P>, new_node: Node<P>) -> Result<Self> {
        let Some(path) = self.path_to(node) else {
            log::debug!("replace: node not in tree");
            return Err(LayoutError::NodeNotFound);
        };
        self.rebuild_at(&path, Arc::new(new_node))
    }

    /// Zoom into `node`, or clear zoom with `None`.
    ///
    /// A node that isn't in the tree clears zoom.
    pub fn set_zoomed(&self, node: Option<&Node<P>>) -> Self {
        let zoomed = node.and_then(|node| {
            let found = self.path_to(node).and_then(|path| self.node_at(&path).cloned());
            if found.is_none() {
                log::debug!("set_zoomed: node not in tree, clearing zoom");
            }
            found
        });
        Self {
            root: self.root.clone(),
            zoomed,
        }
    }

    /// Drag-and-drop reparent: take `source` out and drop it on the `zone`
    /// edge of `target`.
    ///
    /// Dropping a pane onto itself has no target left to drop next to and
    /// fails with `NodeNotFound`.
    pub fn move_pane(&self, source: &P, target: &P, zone: DropZone) -> Result<Self> {
        self.move_pane_with(source, target, zone, &LayoutConfig::default())
    }

    pub fn move_pane_with(
        &self,
        source: &P,
        target: &P,
        zone: DropZone,
        config: &LayoutConfig,
    ) -> Result<Self> {
        if self.find_pane(source).is_none() || self.find_pane(target).is_none() {
            log::debug!("move_pane: {:?} or {:?} not in tree", source, target);
            return Err(LayoutError::NodeNotFound);
        }
        // Covers the single-pane tree too: its only pane is both ends.
        if source == target {
            log::debug!("move_pane: {:?} dropped onto itself", source);
            return Err(LayoutError::NodeNotFound);
        }
        let tree = self
            .remove_pane(source)
            .insert_with(source.clone(), target, zone.direction(), config)?;
        log::debug!("move_pane: {:?} dropped {:?} of {:?}", source, zone, target);
        Ok(tree)
    }

    /// Exchange the positions of two panes, keeping every ratio.
    pub fn swap_panes(&self, a: &P, b: &P) -> Result<Self> {
        let Some(root) = self.root.as_ref() else {
            return Err(LayoutError::NodeNotFound);
        };
        if self.find_pane(a).is_none() || self.find_pane(b).is_none() {
            log::debug!("swap_panes: {:?} or {:?} not in tree", a, b);
            return Err(LayoutError::NodeNotFound);
        }
        Ok(Self {
            root: Some(node::swap_leaves(root, a, b)),
            zoomed: self
                .zoomed
                .as_ref()
                .map(|zoomed| node::swap_leaves(zoomed, a, b)),
        })
    }

    /// Swap in `replacement` at `path`, rebuilding only that path.
    ///
    /// Zoom on the replaced node or one of its ancestors follows the position;
    /// zoom inside the replaced subtree survives only if still reachable.
    pub(crate) fn rebuild_at(&self, path: &Path, replacement: Arc<Node<P>>) -> Result<Self> {
        let old_root = self.root.as_ref().ok_or(LayoutError::NodeNotFound)?;
        let root = node::replace_at(old_root, path.steps(), replacement)
            .ok_or(LayoutError::NodeNotFound)?;
        let zoomed = self.zoomed.as_ref().and_then(|zoomed| {
            match old_root.path_to(zoomed) {
                Some(zoom_path) if path.starts_with(&zoom_path) => {
                    node::node_at(&root, zoom_path.steps()).cloned()
                }
                _ if root.contains(zoomed) => Some(Arc::clone(zoomed)),
                _ => None,
            }
        });
        Ok(Self {
            root: Some(root),
            zoomed,
        })
    }
}
