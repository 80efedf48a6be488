use std::sync::Arc;

use tessel_core::{PaneHandle, Rect, Size, SplitDirection};

// ──────────────────────────────────────────────
// Node: binary tree for layout
// ──────────────────────────────────────────────

/// A node of the split tree.
///
/// Nodes are immutable. Every edit builds new nodes along the edited path and
/// shares the untouched subtrees through `Arc`, so an older tree stays valid
/// while a newer one is computed from it.
///
/// Equality is value equality: leaves compare by pane, splits by direction,
/// ratio and both children. Use [`Node::structurally_eq`] to ignore ratios.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<P> {
    Leaf(P),
    Split(Split<P>),
}

/// An internal node dividing its rect in two along `direction`.
#[derive(Debug, Clone, PartialEq)]
pub struct Split<P> {
    pub direction: SplitDirection,
    /// Share of the extent given to `left` (the top child for vertical splits).
    pub ratio: f32,
    pub left: Arc<Node<P>>,
    pub right: Arc<Node<P>>,
}

impl<P> Split<P> {
    pub fn new(
        direction: SplitDirection,
        ratio: f32,
        left: Arc<Node<P>>,
        right: Arc<Node<P>>,
    ) -> Self {
        Self {
            direction,
            ratio,
            left,
            right,
        }
    }

    /// Same children and direction, different ratio.
    pub fn with_ratio(&self, ratio: f32) -> Self {
        Self::new(
            self.direction,
            ratio,
            Arc::clone(&self.left),
            Arc::clone(&self.right),
        )
    }

    pub fn child(&self, side: Side) -> &Arc<Node<P>> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Same split with the child on `side` swapped for `node`.
    pub fn with_child(&self, side: Side, node: Arc<Node<P>>) -> Self {
        match side {
            Side::Left => Self::new(self.direction, self.ratio, node, Arc::clone(&self.right)),
            Side::Right => Self::new(self.direction, self.ratio, Arc::clone(&self.left), node),
        }
    }
}

// ──────────────────────────────────────────────
// Path addressing
// ──────────────────────────────────────────────

/// One step down from a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Address of a node as the steps taken from the root.
///
/// A path is only meaningful against the tree it was computed from; any
/// structural edit elsewhere can make it point at a different node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Side>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn steps(&self) -> &[Side] {
        &self.0
    }

    /// The first `len` steps of this path, i.e. one of its ancestors.
    pub fn prefix(&self, len: usize) -> Path {
        Path(self.0[..len.min(self.0.len())].to_vec())
    }

    pub fn child(&self, side: Side) -> Path {
        let mut steps = self.0.clone();
        steps.push(side);
        Path(steps)
    }

    /// True if `ancestor` is this path or one of its prefixes.
    pub fn starts_with(&self, ancestor: &Path) -> bool {
        self.0.starts_with(&ancestor.0)
    }
}

impl From<Vec<Side>> for Path {
    fn from(steps: Vec<Side>) -> Self {
        Self(steps)
    }
}

// ──────────────────────────────────────────────
// Queries
// ──────────────────────────────────────────────

impl<P: PaneHandle> Node<P> {
    pub fn leaf(pane: P) -> Self {
        Node::Leaf(pane)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn pane(&self) -> Option<&P> {
        match self {
            Node::Leaf(pane) => Some(pane),
            Node::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&Split<P>> {
        match self {
            Node::Leaf(_) => None,
            Node::Split(split) => Some(split),
        }
    }

    /// The first leaf in left-first order.
    pub fn leftmost_leaf(&self) -> &P {
        match self {
            Node::Leaf(pane) => pane,
            Node::Split(split) => split.left.leftmost_leaf(),
        }
    }

    /// The last leaf in left-first order.
    pub fn rightmost_leaf(&self) -> &P {
        match self {
            Node::Leaf(pane) => pane,
            Node::Split(split) => split.right.rightmost_leaf(),
        }
    }

    /// All panes in left-first order.
    pub fn leaves(&self) -> Vec<P> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<P>) {
        match self {
            Node::Leaf(pane) => out.push(pane.clone()),
            Node::Split(split) => {
                split.left.collect_leaves(out);
                split.right.collect_leaves(out);
            }
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Split(split) => split.left.leaf_count() + split.right.leaf_count(),
        }
    }

    /// Returns true if this node or any descendant equals `target`.
    pub fn contains(&self, target: &Node<P>) -> bool {
        if self == target {
            return true;
        }
        match self {
            Node::Leaf(_) => false,
            Node::Split(split) => split.left.contains(target) || split.right.contains(target),
        }
    }

    /// Path to the first node equal to `target`, searching left before right.
    pub fn path_to(&self, target: &Node<P>) -> Option<Path> {
        let mut steps = Vec::new();
        if self.search(target, &mut steps) {
            Some(Path(steps))
        } else {
            None
        }
    }

    fn search(&self, target: &Node<P>, steps: &mut Vec<Side>) -> bool {
        if self == target {
            return true;
        }
        if let Node::Split(split) = self {
            for side in [Side::Left, Side::Right] {
                steps.push(side);
                if split.child(side).search(target, steps) {
                    return true;
                }
                steps.pop();
            }
        }
        false
    }

    /// Size of this subtree when every leaf is a 1x1 unit.
    ///
    /// Along a split's own axis the children's sizes add up; across it the
    /// larger child wins.
    pub fn dimensions(&self) -> Size {
        match self {
            Node::Leaf(_) => Size::new(1.0, 1.0),
            Node::Split(split) => {
                let left = split.left.dimensions();
                let right = split.right.dimensions();
                match split.direction {
                    SplitDirection::Horizontal => Size::new(
                        left.width + right.width,
                        left.height.max(right.height),
                    ),
                    SplitDirection::Vertical => Size::new(
                        left.width.max(right.width),
                        left.height + right.height,
                    ),
                }
            }
        }
    }

    /// Traverse the tree and compute the rect for every leaf pane.
    pub(crate) fn compute_rects(&self, rect: Rect, out: &mut Vec<(P, Rect)>) {
        match self {
            Node::Leaf(pane) => out.push((pane.clone(), rect)),
            Node::Split(split) => {
                let (left_rect, right_rect) = split_rect(rect, split.direction, split.ratio);
                split.left.compute_rects(left_rect, out);
                split.right.compute_rects(right_rect, out);
            }
        }
    }

    /// Rect occupied by the node at `steps`, given the rect of this node.
    pub(crate) fn rect_at(&self, rect: Rect, steps: &[Side]) -> Option<Rect> {
        let Some((&side, rest)) = steps.split_first() else {
            return Some(rect);
        };
        let split = self.as_split()?;
        let (left_rect, right_rect) = split_rect(rect, split.direction, split.ratio);
        let child_rect = match side {
            Side::Left => left_rect,
            Side::Right => right_rect,
        };
        split.child(side).rect_at(child_rect, rest)
    }
}

// ──────────────────────────────────────────────
// Persistent edits
// ──────────────────────────────────────────────

pub(crate) fn node_at<'a, P>(node: &'a Arc<Node<P>>, steps: &[Side]) -> Option<&'a Arc<Node<P>>> {
    let Some((&side, rest)) = steps.split_first() else {
        return Some(node);
    };
    match node.as_ref() {
        Node::Leaf(_) => None,
        Node::Split(split) => node_at(split.child(side), rest),
    }
}

/// Rebuild the nodes along `steps`, putting `replacement` at the end.
/// Everything off the path is shared with `node`.
pub(crate) fn replace_at<P>(
    node: &Arc<Node<P>>,
    steps: &[Side],
    replacement: Arc<Node<P>>,
) -> Option<Arc<Node<P>>> {
    let Some((&side, rest)) = steps.split_first() else {
        return Some(replacement);
    };
    match node.as_ref() {
        Node::Leaf(_) => None,
        Node::Split(split) => {
            let child = replace_at(split.child(side), rest, replacement)?;
            Some(Arc::new(Node::Split(split.with_child(side, child))))
        }
    }
}

/// Remove every node equal to `target`.
///
/// Returns `None` when `node` itself vanishes. A split that loses one child
/// collapses into the survivor, so the tree never holds a one-armed split.
/// Subtrees without a match are returned as the same `Arc`.
pub(crate) fn remove_node<P: PaneHandle>(
    node: &Arc<Node<P>>,
    target: &Node<P>,
) -> Option<Arc<Node<P>>> {
    if node.as_ref() == target {
        return None;
    }
    let split = match node.as_ref() {
        Node::Leaf(_) => return Some(Arc::clone(node)),
        Node::Split(split) => split,
    };
    match (
        remove_node(&split.left, target),
        remove_node(&split.right, target),
    ) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(only),
        (Some(left), Some(right)) => {
            if Arc::ptr_eq(&left, &split.left) && Arc::ptr_eq(&right, &split.right) {
                Some(Arc::clone(node))
            } else {
                Some(Arc::new(Node::Split(Split::new(
                    split.direction,
                    split.ratio,
                    left,
                    right,
                ))))
            }
        }
    }
}

/// Exchange panes `a` and `b` wherever they appear, keeping every ratio.
pub(crate) fn swap_leaves<P: PaneHandle>(node: &Arc<Node<P>>, a: &P, b: &P) -> Arc<Node<P>> {
    match node.as_ref() {
        Node::Leaf(pane) if pane == a => Arc::new(Node::Leaf(b.clone())),
        Node::Leaf(pane) if pane == b => Arc::new(Node::Leaf(a.clone())),
        Node::Leaf(_) => Arc::clone(node),
        Node::Split(split) => {
            let left = swap_leaves(&split.left, a, b);
            let right = swap_leaves(&split.right, a, b);
            if Arc::ptr_eq(&left, &split.left) && Arc::ptr_eq(&right, &split.right) {
                Arc::clone(node)
            } else {
                Arc::new(Node::Split(Split::new(
                    split.direction,
                    split.ratio,
                    left,
                    right,
                )))
            }
        }
    }
}

// ──────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────

/// Cut `rect` along `direction`, giving `ratio` of it to the first part.
pub(crate) fn split_rect(rect: Rect, direction: SplitDirection, ratio: f32) -> (Rect, Rect) {
    let Rect {
        x,
        y,
        width,
        height,
    } = rect;
    match direction {
        SplitDirection::Horizontal => {
            let first = width * ratio;
            (
                Rect::new(x, y, first, height),
                Rect::new(x + first, y, width - first, height),
            )
        }
        SplitDirection::Vertical => {
            let first = height * ratio;
            (
                Rect::new(x, y, width, first),
                Rect::new(x, y + first, width, height - first),
            )
        }
    }
}
