use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tessel_core::PaneHandle;

use crate::node::Node;
use crate::tree::SplitTree;

impl<P: PaneHandle> Node<P> {
    /// Equality of shape: same panes in the same places under splits of the
    /// same directions. Ratios are ignored.
    pub fn structurally_eq(&self, other: &Node<P>) -> bool {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a == b,
            (Node::Split(a), Node::Split(b)) => {
                a.direction == b.direction
                    && a.left.structurally_eq(&b.left)
                    && a.right.structurally_eq(&b.right)
            }
            _ => false,
        }
    }

    /// Hash consistent with [`Node::structurally_eq`].
    pub fn hash_structure<H: Hasher>(&self, state: &mut H) {
        match self {
            Node::Leaf(pane) => {
                0u8.hash(state);
                pane.hash(state);
            }
            Node::Split(split) => {
                1u8.hash(state);
                split.direction.hash(state);
                split.left.hash_structure(state);
                split.right.hash_structure(state);
            }
        }
    }
}

fn option_structurally_eq<P: PaneHandle>(a: &Option<Arc<Node<P>>>, b: &Option<Arc<Node<P>>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.structurally_eq(b),
        _ => false,
    }
}

/// Change-detection key for a tree's shape.
///
/// Trees whose only differences are split ratios produce equal keys, so a
/// divider drag keeps the key stable while adding, removing, moving or
/// swapping a pane, or changing zoom, produces a new one. Holding a key is
/// cheap: it shares the tree's nodes.
#[derive(Debug, Clone)]
pub struct StructuralKey<P> {
    root: Option<Arc<Node<P>>>,
    zoomed: Option<Arc<Node<P>>>,
}

impl<P: PaneHandle> PartialEq for StructuralKey<P> {
    fn eq(&self, other: &Self) -> bool {
        option_structurally_eq(&self.root, &other.root)
            && option_structurally_eq(&self.zoomed, &other.zoomed)
    }
}

impl<P: PaneHandle> Eq for StructuralKey<P> {}

impl<P: PaneHandle> Hash for StructuralKey<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in [&self.root, &self.zoomed] {
            match node {
                Some(node) => {
                    1u8.hash(state);
                    node.hash_structure(state);
                }
                None => 0u8.hash(state),
            }
        }
    }
}

impl<P: PaneHandle> SplitTree<P> {
    pub fn structural_key(&self) -> StructuralKey<P> {
        StructuralKey {
            root: self.root.clone(),
            zoomed: self.zoomed.clone(),
        }
    }
}
