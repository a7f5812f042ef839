use kpi_chart::api::{ChartGeometry, ChartGeometryConfig, build_chart_geometry};
use kpi_chart::core::{DrawingSurface, Sample, Series, ValueField, build_line_path};
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = Series> {
    proptest::collection::vec((0.0f64..100_000.0, 0.0f64..100_000.0), 1..64).prop_map(|pairs| {
        let samples = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (value, secondary))| {
                Sample::new(i.to_string(), value).with_secondary(secondary)
            })
            .collect();
        Series::new(samples).expect("generated series is valid")
    })
}

proptest! {
    #[test]
    fn vertex_count_matches_sample_count(
        series in series_strategy(),
        width in 1.0f64..2_048.0,
        height in 1.0f64..2_048.0
    ) {
        let surface = DrawingSurface::new(width, height);
        for field in [ValueField::Primary, ValueField::Secondary] {
            let path = build_line_path(&series, field, surface).expect("path");
            prop_assert_eq!(path.len(), series.len());

            for vertex in &path.vertices {
                prop_assert!(vertex.x.is_finite() && vertex.y.is_finite());
                prop_assert!(vertex.y >= -1e-9 && vertex.y <= height + 1e-9);
            }
        }
    }

    #[test]
    fn geometry_is_bit_identical_across_calls(series in series_strategy()) {
        let config = ChartGeometryConfig::default();
        let first = build_chart_geometry(&series, &config).expect("first");
        let second = build_chart_geometry(&series, &config).expect("second");

        prop_assert_eq!(
            first.to_json_contract_v1_pretty().expect("json"),
            second.to_json_contract_v1_pretty().expect("json")
        );
        for (a, b) in first.primary.vertices.iter().zip(&second.primary.vertices) {
            prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
            prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }

    #[test]
    fn snapshot_contract_restores_identical_geometry(
        series in series_strategy(),
        width in 1.0f64..2_048.0,
        height in 1.0f64..2_048.0,
        divisions in 1usize..12
    ) {
        let config = ChartGeometryConfig::new(DrawingSurface::new(width, height))
            .with_gridline_divisions(divisions);
        let geometry = build_chart_geometry(&series, &config).expect("geometry");

        let json = geometry.to_json_contract_v1_pretty().expect("to json");
        let restored = ChartGeometry::from_json_compat_str(&json).expect("from json");
        prop_assert_eq!(restored, geometry);
    }
}
