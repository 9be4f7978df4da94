use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use timerange_rs::core::{
    SlotScale, SnapUnit, TimeRange, check_overlap, is_on_grid, overlaps, snap_to_grid,
};
use timerange_rs::api::{SelectorConfig, TimeRangeSelector};
use timerange_rs::core::RangeSpec;
use timerange_rs::interaction::{DragMode, DragParams, DragTarget, interpret_drag};

const SLOTS: usize = 24;

fn params(snap: f64, snap_to_grid: bool) -> DragParams {
    let scale = SlotScale::new(100.0, SLOTS).expect("valid scale");
    DragParams::new(scale, SnapUnit::new(snap).expect("valid snap"), snap_to_grid)
}

fn drag_mode() -> impl Strategy<Value = DragMode> {
    prop_oneof![
        Just(DragMode::Move),
        Just(DragMode::ResizeStart),
        Just(DragMode::ResizeEnd),
    ]
}

fn snap_unit() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.25), Just(0.5), Just(1.0), Just(2.0)]
}

/// In-bounds range whose boundaries sit on the `snap` grid.
fn on_grid_range(snap: f64) -> impl Strategy<Value = TimeRange> {
    let steps = (SLOTS as f64 / snap) as i64;
    (0..=steps, 0..=steps)
        .prop_map(move |(a, b)| TimeRange::new(a as f64 * snap, b as f64 * snap))
}

proptest! {
    #[test]
    fn disjoint_ranges_never_overlap(
        d_start in 0.0f64..12.0,
        d_len in 0.0f64..6.0,
        gap in 0.01f64..4.0,
        s_len in 0.0f64..6.0,
        selection_first in any::<bool>()
    ) {
        let disabled = TimeRange::new(d_start, d_start + d_len);
        let selection = if selection_first {
            let end = disabled.start() - gap;
            TimeRange::new(end - s_len, end)
        } else {
            let start = disabled.end() + gap;
            TimeRange::new(start, start + s_len)
        };
        prop_assert!(!check_overlap(Some(selection), &[disabled]));
    }

    #[test]
    fn strictly_nested_selection_overlaps(
        d_start in -50.0f64..50.0,
        d_len in 0.5f64..24.0,
        lo in 0.01f64..0.49,
        hi in 0.51f64..0.99
    ) {
        let disabled = TimeRange::new(d_start, d_start + d_len);
        let selection = TimeRange::new(d_start + d_len * lo, d_start + d_len * hi);
        prop_assert!(check_overlap(Some(selection), &[disabled]));
    }

    #[test]
    fn overlap_is_symmetric(
        a0 in -10.0f64..30.0, a1 in -10.0f64..30.0,
        b0 in -10.0f64..30.0, b1 in -10.0f64..30.0
    ) {
        let a = TimeRange::new(a0, a1);
        let b = TimeRange::new(b0, b1);
        prop_assert_eq!(overlaps(a, b), overlaps(b, a));
    }

    #[test]
    fn zero_delta_returns_anchor(
        a0 in 0.0f64..24.0,
        a1 in 0.0f64..24.0,
        mode in drag_mode(),
        snap in snap_unit(),
        snapping in any::<bool>()
    ) {
        let anchor = TimeRange::new(a0, a1);
        let p = params(snap, snapping);
        let once = interpret_drag(anchor, mode, 0.0, p);
        let twice = interpret_drag(once, mode, 0.0, p);
        prop_assert_eq!(once, anchor);
        prop_assert_eq!(twice, anchor);
    }

    #[test]
    fn snapped_boundaries_sit_on_grid(
        (snap, anchor) in snap_unit().prop_flat_map(|snap| (Just(snap), on_grid_range(snap))),
        mode in drag_mode(),
        delta_px in -3_000.0f64..3_000.0
    ) {
        let unit = SnapUnit::new(snap).expect("valid snap");
        let out = interpret_drag(anchor, mode, delta_px, params(snap, true));
        prop_assert!(is_on_grid(out.start(), unit, 1e-9), "start {} off grid {}", out.start(), snap);
        prop_assert!(is_on_grid(out.end(), unit, 1e-9), "end {} off grid {}", out.end(), snap);
    }

    #[test]
    fn outputs_stay_inside_ruler(
        a0 in -10.0f64..40.0,
        a1 in -10.0f64..40.0,
        mode in drag_mode(),
        delta_px in prop_oneof![Just(0.0), -5_000.0f64..5_000.0],
        snap in snap_unit(),
        snapping in any::<bool>()
    ) {
        let out = interpret_drag(TimeRange::new(a0, a1), mode, delta_px, params(snap, snapping));
        prop_assert!(0.0 <= out.start());
        prop_assert!(out.start() <= out.end());
        prop_assert!(out.end() <= SLOTS as f64);
    }

    #[test]
    fn synced_host_value_stays_inside_ruler_through_a_gesture(
        a0 in -10.0f64..40.0,
        a1 in -10.0f64..40.0,
        target in prop_oneof![
            Just(DragTarget::Body),
            Just(DragTarget::StartHandle),
            Just(DragTarget::EndHandle),
        ],
        down_px in 0.0f64..2_400.0,
        move_px in prop_oneof![Just(0.0), -1_000.0f64..1_000.0]
    ) {
        let mut selector = TimeRangeSelector::new(SelectorConfig::new(RangeSpec::named("day")))
            .expect("selector init");
        selector.sync(Some(TimeRange::new(a0, a1)));
        prop_assert!(selector.pointer_down(target, down_px));

        let value = selector.pointer_move(down_px + move_px).expect("dragging");
        prop_assert!(0.0 <= value.start());
        prop_assert!(value.end() <= SLOTS as f64);
    }

    #[test]
    fn move_preserves_width(
        a0 in 0.0f64..24.0,
        a1 in 0.0f64..24.0,
        delta_px in -5_000.0f64..5_000.0
    ) {
        let anchor = TimeRange::new(a0, a1);
        let out = interpret_drag(anchor, DragMode::Move, delta_px, params(1.0, false));
        prop_assert!((out.len() - anchor.len()).abs() <= 1e-9);
    }

    #[test]
    fn snapping_moves_value_by_at_most_half_a_unit(
        value in -1_000.0f64..1_000.0,
        snap in snap_unit()
    ) {
        let snapped = snap_to_grid(value, SnapUnit::new(snap).expect("valid snap"));
        prop_assert!((snapped - value).abs() <= snap / 2.0 + 1e-9);
    }
}

#[test]
fn quarter_snap_lands_exactly() {
    let out = interpret_drag(
        TimeRange::new(9.0, 10.0),
        DragMode::ResizeEnd,
        37.0,
        params(0.25, true),
    );
    assert_abs_diff_eq!(out.end(), 10.25, epsilon = f64::EPSILON);
    assert_eq!(out.start(), 9.0);
}
