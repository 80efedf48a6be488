use std::sync::Arc;

use tessel_core::{Direction, PaneHandle, Rect, SplitDirection};

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::node::{self, Node, Split};
use crate::tree::SplitTree;

impl<P: PaneHandle> SplitTree<P> {
    /// Move the divider next to `node` by `pixels` toward `direction`.
    ///
    /// The divider moved is the one of the nearest ancestor split running
    /// along `direction`'s axis, which need not be `node`'s own parent.
    /// `bounds` is the pixel rect of the whole layout; the pixel delta is
    /// converted to a ratio delta using that ancestor's extent. The new
    /// ratio is clamped so neither side collapses.
    pub fn resize(
        &self,
        node: &Node<P>,
        pixels: f32,
        direction: Direction,
        bounds: Rect,
    ) -> Result<Self> {
        self.resize_with(node, pixels, direction, bounds, &LayoutConfig::default())
    }

    pub fn resize_with(
        &self,
        node: &Node<P>,
        pixels: f32,
        direction: Direction,
        bounds: Rect,
        config: &LayoutConfig,
    ) -> Result<Self> {
        let root = self.root.as_ref().ok_or(LayoutError::NodeNotFound)?;
        let Some(path) = root.path_to(node) else {
            log::debug!("resize: node not in tree");
            return Err(LayoutError::NodeNotFound);
        };
        if !pixels.is_finite() {
            log::debug!("resize: ignoring non-finite delta {}", pixels);
            return Ok(self.clone());
        }
        let axis = direction.split_direction();

        // Walk up from the node's parent to the first split on our axis.
        let found = (0..path.len()).rev().find_map(|depth| {
            let ancestor_path = path.prefix(depth);
            let ancestor = node::node_at(root, ancestor_path.steps())?;
            match ancestor.as_ref() {
                Node::Split(split) if split.direction == axis => Some((ancestor_path, split)),
                _ => None,
            }
        });
        let Some((ancestor_path, split)) = found else {
            log::debug!("resize: no {:?} ancestor to move {:?}", axis, direction);
            return Err(LayoutError::NodeNotFound);
        };

        let rect = root
            .rect_at(bounds, ancestor_path.steps())
            .ok_or(LayoutError::NodeNotFound)?;
        let extent = match axis {
            SplitDirection::Horizontal => rect.width,
            SplitDirection::Vertical => rect.height,
        };
        let delta = if extent > 0.0 { pixels / extent } else { 0.0 };
        let ratio = if direction.is_leading() {
            split.ratio - delta
        } else {
            split.ratio + delta
        };
        let ratio = if ratio.is_finite() {
            config.clamp_ratio(ratio)
        } else {
            split.ratio
        };
        log::trace!("resize: ratio {} -> {}", split.ratio, ratio);

        let resized = Arc::new(Node::Split(split.with_ratio(ratio)));
        self.rebuild_at(&ancestor_path, resized)
    }

    /// Give every pane along a run of same-direction splits an equal share.
    ///
    /// A nested split of the other direction counts as one unit in its
    /// parent's run and is equalized on its own.
    pub fn equalize(&self) -> Self {
        let Some(root) = self.root.as_ref() else {
            return self.clone();
        };
        let equalized = equalize_node(root);
        // Shape is unchanged, so zoom keeps its position.
        let zoomed = self.zoomed.as_ref().and_then(|zoomed| {
            let path = root.path_to(zoomed)?;
            node::node_at(&equalized, path.steps()).cloned()
        });
        log::trace!("equalize: {} panes", equalized.leaf_count());
        Self {
            root: Some(equalized),
            zoomed,
        }
    }
}

/// Share of a parent split running along `parent` that `node` accounts for.
fn weight<P>(node: &Node<P>, parent: SplitDirection) -> f32 {
    match node {
        Node::Split(split) if split.direction == parent => {
            weight(&split.left, parent) + weight(&split.right, parent)
        }
        _ => 1.0,
    }
}

fn equalize_node<P>(node: &Arc<Node<P>>) -> Arc<Node<P>> {
    let Node::Split(split) = node.as_ref() else {
        return Arc::clone(node);
    };
    let left_weight = weight(&split.left, split.direction);
    let right_weight = weight(&split.right, split.direction);
    let ratio = left_weight / (left_weight + right_weight);

    let left = equalize_node(&split.left);
    let right = equalize_node(&split.right);
    if ratio == split.ratio && Arc::ptr_eq(&left, &split.left) && Arc::ptr_eq(&right, &split.right)
    {
        return Arc::clone(node);
    }
    Arc::new(Node::Split(Split::new(split.direction, ratio, left, right)))
}
