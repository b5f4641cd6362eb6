use chart_dragzone::core::{
    ChartArea, DragDirection, PointerPosition, contains_point, is_click_only,
    normalize_rectangle,
};
use proptest::prelude::*;

fn direction_strategy() -> impl Strategy<Value = DragDirection> {
    prop_oneof![
        Just(DragDirection::All),
        Just(DragDirection::Horizontal),
        Just(DragDirection::Vertical),
    ]
}

fn area() -> ChartArea {
    ChartArea::new(0.0, 0.0, 1920.0, 1080.0)
}

proptest! {
    #[test]
    fn normalize_takes_min_and_max_per_axis(
        ax in -5_000.0f64..5_000.0,
        ay in -5_000.0f64..5_000.0,
        bx in -5_000.0f64..5_000.0,
        by in -5_000.0f64..5_000.0
    ) {
        let a = PointerPosition::new(ax, ay);
        let b = PointerPosition::new(bx, by);
        let rect = normalize_rectangle(a, b, DragDirection::All, area());

        prop_assert_eq!(rect.start_x, ax.min(bx));
        prop_assert_eq!(rect.end_x, ax.max(bx));
        prop_assert_eq!(rect.start_y, ay.min(by));
        prop_assert_eq!(rect.end_y, ay.max(by));
    }

    #[test]
    fn normalize_is_order_independent(
        ax in -5_000.0f64..5_000.0,
        ay in -5_000.0f64..5_000.0,
        bx in -5_000.0f64..5_000.0,
        by in -5_000.0f64..5_000.0,
        direction in direction_strategy()
    ) {
        let a = PointerPosition::new(ax, ay);
        let b = PointerPosition::new(bx, by);
        prop_assert_eq!(
            normalize_rectangle(a, b, direction, area()),
            normalize_rectangle(b, a, direction, area())
        );
    }

    #[test]
    fn click_only_for_all_iff_both_axes_collapse(
        ax in -100i32..100,
        ay in -100i32..100,
        bx in -100i32..100,
        by in -100i32..100
    ) {
        let a = PointerPosition::new(f64::from(ax), f64::from(ay));
        let b = PointerPosition::new(f64::from(bx), f64::from(by));
        let rect = normalize_rectangle(a, b, DragDirection::All, area());
        prop_assert_eq!(is_click_only(rect, DragDirection::All), ax == bx && ay == by);
    }

    #[test]
    fn rectangle_corners_are_contained(
        ax in -5_000.0f64..5_000.0,
        ay in -5_000.0f64..5_000.0,
        bx in -5_000.0f64..5_000.0,
        by in -5_000.0f64..5_000.0,
        direction in direction_strategy()
    ) {
        let rect = normalize_rectangle(
            PointerPosition::new(ax, ay),
            PointerPosition::new(bx, by),
            direction,
            area(),
        );
        for (x, y) in [
            (rect.start_x, rect.start_y),
            (rect.start_x, rect.end_y),
            (rect.end_x, rect.start_y),
            (rect.end_x, rect.end_y),
        ] {
            prop_assert!(contains_point(PointerPosition::new(x, y), rect));
        }
    }
}
