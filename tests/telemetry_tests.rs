use kpi_chart::telemetry::{DEFAULT_FILTER, init_default_tracing};

#[test]
fn default_filter_is_info() {
    assert_eq!(DEFAULT_FILTER, "info");
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_succeeds_only_once() {
    let first = init_default_tracing();
    let second = init_default_tracing();
    assert!(!(first && second));
}
