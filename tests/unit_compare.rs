// tests/unit_compare.rs
use oquare_core::compare::{compare, compare_named, IndicatorMap};
use oquare_core::metrics::{IndicatorSet, MetricSnapshot, MetricsOptions};
use oquare_core::model::{GraphDocument, GraphOntology};

fn map(pairs: &[(&str, f64)]) -> IndicatorMap {
    pairs.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
}

#[test]
fn test_single_improvement() {
    let report = compare_named("a", &map(&[("X", 10.0)]), "b", &map(&[("X", 15.0)]));
    let x = report.entry("X").unwrap();
    assert_eq!(x.difference, 5.0);
    assert_eq!(x.percent_change, Some(50.0));
    assert_eq!(report.summary.improved, 1);
    assert_eq!(report.summary.degraded, 0);
    assert_eq!(report.summary.average_percent_change, 50.0);
}

#[test]
fn test_self_comparison_is_unchanged() {
    let onto = GraphOntology::from(
        GraphDocument::new("self")
            .class("A", &[])
            .class("B", &["A"])
            .data_property("d", &["B"]),
    );
    let snap = MetricSnapshot::from_model(&onto, &MetricsOptions::default()).unwrap();
    let indicators = IndicatorSet::compute_all(&snap).to_name_map();

    let report = compare_named("v1", &indicators, "v1", &indicators);
    assert_eq!(report.summary.total, 14);
    assert_eq!(report.summary.unchanged, 14);
    for entry in &report.entries {
        assert_eq!(entry.difference, 0.0);
        if entry.value_a != 0.0 {
            assert_eq!(entry.percent_change, Some(0.0));
        } else {
            assert_eq!(entry.percent_change, None);
        }
    }
}

#[test]
fn test_swapping_inputs_negates_differences() {
    let a = map(&[("X", 1.0), ("Y", 4.0), ("Z", 2.0)]);
    let b = map(&[("X", 3.0), ("Y", 1.0), ("Z", 2.0)]);
    let forward = compare_named("a", &a, "b", &b);
    let backward = compare_named("b", &b, "a", &a);

    for (f, r) in forward.entries.iter().zip(&backward.entries) {
        assert_eq!(f.name, r.name);
        assert_eq!(f.difference, -r.difference);
    }
    assert_eq!(forward.summary.improved, backward.summary.degraded);
    assert_eq!(forward.summary.degraded, backward.summary.improved);
    assert_eq!(forward.summary.unchanged, backward.summary.unchanged);
}

#[test]
fn test_missing_keys_default_to_zero() {
    let deltas = compare(&map(&[("OnlyA", 2.0)]), &map(&[("OnlyB", 3.0)]));
    assert_eq!(deltas.len(), 2);

    let only_a = deltas.iter().find(|d| d.name == "OnlyA").unwrap();
    assert_eq!(only_a.value_b, 0.0);
    assert_eq!(only_a.difference, -2.0);
    assert_eq!(only_a.percent_change, Some(-100.0));

    let only_b = deltas.iter().find(|d| d.name == "OnlyB").unwrap();
    assert_eq!(only_b.value_a, 0.0);
    assert_eq!(only_b.percent_change, None);
}

#[test]
fn test_average_skips_undefined_changes() {
    let a = map(&[("X", 0.0), ("Y", 10.0), ("Z", 4.0)]);
    let b = map(&[("X", 5.0), ("Y", 5.0), ("Z", 6.0)]);
    let report = compare_named("a", &a, "b", &b);
    // Y: -50%, Z: +50%, X undefined.
    assert_eq!(report.summary.average_percent_change, 0.0);
    assert_eq!(report.summary.improved, 2);
    assert_eq!(report.summary.degraded, 1);
}
