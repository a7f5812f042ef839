use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use kpi_chart::api::{
    CHART_GEOMETRY_JSON_SCHEMA_V1, ChartGeometry, ChartGeometryConfig, build_chart_geometry,
    build_chart_geometry_from_source, build_pie_chart,
};
use kpi_chart::core::{DrawingSurface, PathVertex, PieShare, Sample, Series, ValueField};
use kpi_chart::format::{Currency, NumberFormat};
use kpi_chart::source::{ReportingWindow, SeededSeriesSource};

fn sales_series() -> Series {
    Series::new(vec![
        Sample::new("Jan", 400.0).with_secondary(300.0),
        Sample::new("Feb", 800.0).with_secondary(500.0),
        Sample::new("Mar", 600.0).with_secondary(1_000.0),
    ])
    .expect("series")
}

#[test]
fn geometry_set_contains_paths_area_and_labelled_gridlines() {
    let config = ChartGeometryConfig::new(DrawingSurface::new(600.0, 200.0))
        .with_label_format(NumberFormat::currency(Currency::Usd).with_precision(0));
    let geometry = build_chart_geometry(&sales_series(), &config).expect("geometry");

    assert_eq!(geometry.max_value, 1_000.0);
    assert_eq!(geometry.primary.field, ValueField::Primary);
    assert_eq!(geometry.primary.len(), 3);
    let secondary = geometry.secondary.as_ref().expect("secondary path");
    assert_eq!(secondary.vertices[2], PathVertex::new(600.0, 0.0));
    assert!(geometry.area.is_some());

    let texts: Vec<&str> = geometry.gridlines.iter().map(|g| g.text.as_str()).collect();
    assert_eq!(texts, vec!["$1,000", "$750", "$500", "$250", "$0"]);

    let ticks: Vec<(f64, &str)> = geometry
        .category_ticks
        .iter()
        .map(|t| (t.x, t.text.as_str()))
        .collect();
    assert_eq!(ticks, vec![(0.0, "Jan"), (300.0, "Feb"), (600.0, "Mar")]);
}

#[test]
fn optional_layers_follow_config() {
    let config = ChartGeometryConfig::default()
        .with_secondary(false)
        .with_area(false)
        .with_gridline_divisions(2);
    let geometry = build_chart_geometry(&sales_series(), &config).expect("geometry");

    assert!(geometry.secondary.is_none());
    assert!(geometry.area.is_none());
    assert_eq!(geometry.gridlines.len(), 3);
}

#[test]
fn partial_secondary_values_skip_the_secondary_path() {
    let series = Series::new(vec![
        Sample::new("a", 1.0).with_secondary(2.0),
        Sample::new("b", 3.0),
    ])
    .expect("series");
    let geometry = build_chart_geometry(&series, &ChartGeometryConfig::default()).expect("geometry");

    assert!(geometry.secondary.is_none());
    assert_eq!(geometry.max_value, 3.0);
}

#[test]
fn empty_series_fails_entirely() {
    let series = Series::new(Vec::new()).expect("series");
    assert!(build_chart_geometry(&series, &ChartGeometryConfig::default()).is_err());
}

#[test]
fn window_switch_rebuilds_geometry_from_source() {
    let source = SeededSeriesSource::new(9, NaiveDate::from_ymd_opt(2026, 1, 31).expect("date"));
    let config = ChartGeometryConfig::default();

    let week = build_chart_geometry_from_source(&source, ReportingWindow::Last7Days, &config)
        .expect("week");
    let year = build_chart_geometry_from_source(&source, ReportingWindow::Last12Months, &config)
        .expect("year");

    assert_eq!(week.primary.len(), 7);
    assert_eq!(year.primary.len(), 12);
    assert_eq!(year.category_ticks[11].text, "Jan 2026");
}

#[test]
fn snapshot_contract_round_trips() {
    let geometry =
        build_chart_geometry(&sales_series(), &ChartGeometryConfig::default()).expect("geometry");

    let json = geometry.to_json_contract_v1_pretty().expect("to json");
    assert!(json.contains(&format!("\"schema_version\": {CHART_GEOMETRY_JSON_SCHEMA_V1}")));
    let restored = ChartGeometry::from_json_compat_str(&json).expect("from json");
    assert_eq!(restored, geometry);

    let bare = serde_json::to_string(&geometry).expect("bare json");
    assert_eq!(
        ChartGeometry::from_json_compat_str(&bare).expect("bare"),
        geometry
    );
}

#[test]
fn snapshot_contract_rejects_unknown_schema() {
    let geometry =
        build_chart_geometry(&sales_series(), &ChartGeometryConfig::default()).expect("geometry");
    let json = geometry
        .to_json_contract_v1_pretty()
        .expect("to json")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");

    assert!(ChartGeometry::from_json_compat_str(&json).is_err());
}

#[test]
fn pie_chart_pairs_slices_with_arcs() {
    let shares = vec![PieShare::new("Online", 50.0), PieShare::new("Retail", 50.0)];
    let pie = build_pie_chart(&shares, PathVertex::new(60.0, 60.0), 40.0).expect("pie");

    assert_eq!(pie.slices.len(), 2);
    assert_eq!(pie.arcs.len(), 2);
    assert_eq!(pie.total_sweep(), 360.0);
    assert_abs_diff_eq!(pie.arcs[0].end.x, 60.0, epsilon = 1e-9);
    assert_abs_diff_eq!(pie.arcs[0].end.y, 100.0, epsilon = 1e-9);
}
