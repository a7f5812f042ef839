use kpi_chart::core::{map_index_to_x, map_value_to_y};
use proptest::prelude::*;

proptest! {
    #[test]
    fn mapped_y_stays_on_surface(
        max_value in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..=1.0,
        height in 1.0f64..4_096.0
    ) {
        let value = max_value * value_factor;
        let y = map_value_to_y(value, max_value, height).expect("y");

        prop_assert!(y >= -1e-9);
        prop_assert!(y <= height + 1e-9);
    }

    #[test]
    fn axis_extremes_map_to_surface_edges(
        max_value in 0.001f64..1_000_000.0,
        height in 1.0f64..4_096.0
    ) {
        prop_assert_eq!(map_value_to_y(max_value, max_value, height).expect("top"), 0.0);
        prop_assert_eq!(map_value_to_y(0.0, max_value, height).expect("bottom"), height);
    }

    #[test]
    fn mapped_x_is_monotonic_and_bounded(
        count in 1usize..256,
        width in 0.0f64..4_096.0
    ) {
        let mut previous = None;
        for index in 0..count {
            let x = map_index_to_x(index, count, width).expect("x");
            prop_assert!(x >= 0.0);
            prop_assert!(x <= width + 1e-9);
            if let Some(previous) = previous {
                prop_assert!(x >= previous);
            }
            previous = Some(x);
        }
    }
}
