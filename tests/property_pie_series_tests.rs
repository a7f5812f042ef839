use kpi_chart::core::{PieShare, build_pie_slices};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sweeps_sum_to_scaled_share_total(
        percents in proptest::collection::vec(0.0f64..100.0, 0..24)
    ) {
        let shares: Vec<PieShare> = percents
            .iter()
            .enumerate()
            .map(|(i, &percent)| PieShare::new(format!("c{i}"), percent))
            .collect();
        let slices = build_pie_slices(&shares).expect("slices");

        prop_assert_eq!(slices.len(), shares.len());
        let sweep_total: f64 = slices.iter().map(|s| s.sweep_angle).sum();
        let expected = percents.iter().sum::<f64>() / 100.0 * 360.0;
        prop_assert!((sweep_total - expected).abs() <= 1e-6);

        let mut cursor = 0.0;
        for slice in &slices {
            prop_assert!((slice.start_angle - cursor).abs() <= 1e-6);
            cursor += slice.sweep_angle;
        }
    }

    #[test]
    fn any_negative_share_is_rejected(
        percents in proptest::collection::vec(0.0f64..100.0, 0..8),
        negative in -100.0f64..-0.001,
        position in 0usize..8
    ) {
        let mut shares: Vec<PieShare> = percents
            .iter()
            .map(|&percent| PieShare::new("ok", percent))
            .collect();
        let position = position.min(shares.len());
        shares.insert(position, PieShare::new("bad", negative));

        prop_assert!(build_pie_slices(&shares).is_err());
    }
}
