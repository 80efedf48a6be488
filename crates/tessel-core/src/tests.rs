#[cfg(test)]
mod tests {
    use crate::{Direction, DropZone, FocusDirection, PaneId, Rect, Size, SplitDirection, Vec2};

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.min_x(), 10.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.min_y(), 20.0);
        assert_eq!(rect.max_y(), 70.0);
        assert_eq!(rect.origin(), Vec2::new(10.0, 20.0));
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let rect = Rect::from_size(Size::new(100.0, 100.0));
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(100.0, 100.0)));
        assert!(rect.contains(Vec2::new(50.0, 50.0)));
        assert!(!rect.contains(Vec2::new(100.5, 50.0)));
        assert!(!rect.contains(Vec2::new(-1.0, 50.0)));
    }

    #[test]
    fn test_vec2_distance() {
        assert_eq!(Vec2::ZERO.distance(Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(Vec2::new(1.0, 1.0).distance(Vec2::new(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_size_degenerate() {
        assert!(Size::new(0.0, 10.0).is_degenerate());
        assert!(Size::new(10.0, -1.0).is_degenerate());
        assert!(!Size::new(1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_direction_axis_and_order() {
        assert_eq!(Direction::Left.split_direction(), SplitDirection::Horizontal);
        assert_eq!(Direction::Right.split_direction(), SplitDirection::Horizontal);
        assert_eq!(Direction::Up.split_direction(), SplitDirection::Vertical);
        assert_eq!(Direction::Down.split_direction(), SplitDirection::Vertical);
        assert!(Direction::Left.is_leading());
        assert!(Direction::Up.is_leading());
        assert!(!Direction::Right.is_leading());
        assert!(!Direction::Down.is_leading());
        assert_eq!(Direction::Up.opposite(), Direction::Down);
    }

    #[test]
    fn test_drop_zone_direction() {
        assert_eq!(DropZone::Top.direction(), Direction::Up);
        assert_eq!(DropZone::Bottom.direction(), Direction::Down);
        assert_eq!(DropZone::Left.direction(), Direction::Left);
        assert_eq!(DropZone::Right.direction(), Direction::Right);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FocusDirection::Spatial(Direction::Left)).unwrap();
        assert_eq!(json, r#"{"spatial":"left"}"#);
        let zone: DropZone = serde_json::from_str(r#""bottom""#).unwrap();
        assert_eq!(zone, DropZone::Bottom);
        let id: PaneId = serde_json::from_str("7").unwrap();
        assert_eq!(id, PaneId(7));
        assert_eq!(id.to_string(), "pane#7");
    }
}
