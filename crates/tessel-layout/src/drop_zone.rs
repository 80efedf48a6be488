use tessel_core::{DropZone, PaneHandle, Rect, Size, Vec2};

use crate::tree::SplitTree;

/// Which edge of a pane a drop at `point` lands on.
///
/// `point` is relative to the pane's top-left corner and `size` is the pane's
/// size. Distances to the four edges are normalized by the pane's extent so
/// tall and wide panes behave alike. Equal distances resolve in
/// [`DropZone::PRECEDENCE`] order: top, bottom, left, right.
pub fn drop_zone(point: Vec2, size: Size) -> DropZone {
    let rel_x = normalized(point.x, size.width);
    let rel_y = normalized(point.y, size.height);

    let distance = |zone: DropZone| match zone {
        DropZone::Top => rel_y,
        DropZone::Bottom => 1.0 - rel_y,
        DropZone::Left => rel_x,
        DropZone::Right => 1.0 - rel_x,
    };

    let mut best = DropZone::PRECEDENCE[0];
    for zone in DropZone::PRECEDENCE.into_iter().skip(1) {
        if distance(zone) < distance(best) {
            best = zone;
        }
    }
    best
}

fn normalized(offset: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        (offset / extent).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

impl<P: PaneHandle> SplitTree<P> {
    /// Resolve a drop at `point` (in layout coordinates) to the pane under
    /// it and the edge it lands on. The dragged pane itself is never a
    /// target.
    pub fn drop_target(&self, point: Vec2, bounds: Size, source: &P) -> Option<(P, DropZone)> {
        self.pane_rects(bounds)
            .into_iter()
            .filter(|(pane, _)| pane != source)
            .find(|(_, rect)| rect.contains(point))
            .map(|(pane, rect)| (pane, zone_in(point, &rect)))
    }
}

fn zone_in(point: Vec2, rect: &Rect) -> DropZone {
    drop_zone(
        Vec2::new(point.x - rect.x, point.y - rect.y),
        rect.size(),
    )
}
