use std::sync::Arc;

use tessel_core::{Direction, FocusDirection, PaneHandle, Rect, Size};

use crate::node::{split_rect, Node};
use crate::tree::SplitTree;

/// Slack when comparing shared edges, which can differ by rounding once
/// rects have been split a few times.
const EDGE_EPSILON: f32 = 1e-3;

/// A node together with the rect it occupies for one query.
#[derive(Debug, Clone)]
pub struct SpatialSlot<P> {
    pub node: Arc<Node<P>>,
    pub rect: Rect,
}

/// Rects for every node of a tree, splits included, in pre-order
/// (a split comes before its left subtree, which comes before its right).
#[derive(Debug, Clone)]
pub struct Spatial<P> {
    pub slots: Vec<SpatialSlot<P>>,
}

impl<P: PaneHandle> Spatial<P> {
    /// The slot of the first node equal to `node`.
    pub fn slot(&self, node: &Node<P>) -> Option<&SpatialSlot<P>> {
        self.slots.iter().find(|slot| slot.node.as_ref() == node)
    }

    /// Slots lying entirely on the `direction` side of `reference`, nearest
    /// first.
    ///
    /// Distance is measured between rect origins. Among equally near slots
    /// leaves come before splits, then pre-order decides.
    pub fn slots_in(&self, direction: Direction, reference: &Node<P>) -> Vec<&SpatialSlot<P>> {
        let Some(reference) = self.slot(reference) else {
            return Vec::new();
        };
        let from = reference.rect;
        let mut candidates: Vec<&SpatialSlot<P>> = self
            .slots
            .iter()
            .filter(|slot| is_beside(&slot.rect, &from, direction))
            .collect();
        let origin = from.origin();
        candidates.sort_by(|a, b| {
            let da = a.rect.origin().distance(origin);
            let db = b.rect.origin().distance(origin);
            da.total_cmp(&db)
                .then_with(|| b.node.is_leaf().cmp(&a.node.is_leaf()))
        });
        candidates
    }
}

/// True if `candidate` lies strictly on the `direction` side of `reference`.
fn is_beside(candidate: &Rect, reference: &Rect, direction: Direction) -> bool {
    match direction {
        Direction::Left => candidate.max_x() <= reference.min_x() + EDGE_EPSILON,
        Direction::Right => candidate.min_x() >= reference.max_x() - EDGE_EPSILON,
        Direction::Up => candidate.max_y() <= reference.min_y() + EDGE_EPSILON,
        Direction::Down => candidate.min_y() >= reference.max_y() - EDGE_EPSILON,
    }
}

fn collect_slots<P>(node: &Arc<Node<P>>, rect: Rect, out: &mut Vec<SpatialSlot<P>>) {
    out.push(SpatialSlot {
        node: Arc::clone(node),
        rect,
    });
    if let Node::Split(split) = node.as_ref() {
        let (left_rect, right_rect) = split_rect(rect, split.direction, split.ratio);
        collect_slots(&split.left, left_rect, out);
        collect_slots(&split.right, right_rect, out);
    }
}

impl<P: PaneHandle> SplitTree<P> {
    /// Lay out every node of the tree.
    ///
    /// With usable `bounds` the rects are in pixels. Otherwise each leaf
    /// counts as one unit and the whole tree gets its abstract
    /// [`Node::dimensions`].
    pub fn spatial(&self, bounds: Option<Size>) -> Spatial<P> {
        let mut slots = Vec::new();
        if let Some(root) = self.root.as_ref() {
            let size = match bounds {
                Some(size) if !size.is_degenerate() => size,
                _ => root.dimensions(),
            };
            collect_slots(root, Rect::from_size(size), &mut slots);
        }
        Spatial { slots }
    }

    /// Pixel rect of every visible pane. While zoomed only the zoomed node's
    /// panes are laid out, over the full bounds.
    pub fn pane_rects(&self, bounds: Size) -> Vec<(P, Rect)> {
        let mut result = Vec::new();
        if let Some(node) = self.zoomed.as_ref().or(self.root.as_ref()) {
            node.compute_rects(Rect::from_size(bounds), &mut result);
        }
        result
    }

    /// The pane focus should move to from `from`, which may be a split
    /// (e.g. the zoomed node) rather than a leaf.
    ///
    /// `Previous`/`Next` walk [`SplitTree::leaves`] and wrap around.
    /// Spatial directions pick the nearest node on that side, descending into
    /// a split toward the edge facing `from`.
    pub fn focus_target(
        &self,
        direction: FocusDirection,
        from: &Node<P>,
        bounds: Option<Size>,
    ) -> Option<P> {
        match direction {
            FocusDirection::Previous => {
                let leaves = self.leaves();
                let index = leaves.iter().position(|pane| pane == from.leftmost_leaf())?;
                let previous = if index == 0 {
                    leaves.len() - 1
                } else {
                    index - 1
                };
                Some(leaves[previous].clone())
            }
            FocusDirection::Next => {
                let leaves = self.leaves();
                let index = leaves.iter().position(|pane| pane == from.rightmost_leaf())?;
                Some(leaves[(index + 1) % leaves.len()].clone())
            }
            FocusDirection::Spatial(direction) => {
                let spatial = self.spatial(bounds);
                let nearest = spatial.slots_in(direction, from).into_iter().next()?;
                let pane = match nearest.node.as_ref() {
                    Node::Leaf(pane) => pane,
                    split if direction.is_leading() => split.leftmost_leaf(),
                    split => split.rightmost_leaf(),
                };
                Some(pane.clone())
            }
        }
    }
}
