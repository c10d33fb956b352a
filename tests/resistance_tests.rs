mod support;

use coilgen::errors::InvalidSpecification;
use coilgen::float_types::COPPER_RESISTIVITY;
use coilgen::{CoilPath, estimate_resistance};
use geo::{LineString, line_string};

#[test]
fn three_four_five_segment_matches_hand_calculation() {
    let path = CoilPath::new(line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 4.0)]);
    assert!(support::approx_eq(path.total_length(), 5.0, 1e-12));

    // 5 mm of 1 mm x 0.035 mm copper trace
    let ohms = estimate_resistance(&path, 1.0, 0.035, COPPER_RESISTIVITY).unwrap();
    let expected = 1.70e-8 * 0.005 / (1.0e-3 * 0.035e-3);
    assert!(((ohms - expected) / expected).abs() < 1e-6);
}

#[test]
fn open_path_has_no_closing_segment() {
    // three unit edges of a square, the fourth is never measured
    let path = CoilPath::new(line_string![
        (x: 0.0, y: 0.0),
        (x: 1.0, y: 0.0),
        (x: 1.0, y: 1.0),
        (x: 0.0, y: 1.0),
    ]);
    assert!(support::approx_eq(path.total_length(), 3.0, 1e-12));
}

#[test]
fn short_paths_are_rejected() {
    let empty = CoilPath::new(LineString::new(vec![]));
    assert_eq!(
        estimate_resistance(&empty, 0.3, 0.035, COPPER_RESISTIVITY).unwrap_err(),
        InvalidSpecification::PathTooShort(0)
    );

    let single = CoilPath::new(line_string![(x: 1.0, y: 2.0)]);
    assert_eq!(
        estimate_resistance(&single, 0.3, 0.035, COPPER_RESISTIVITY).unwrap_err(),
        InvalidSpecification::PathTooShort(1)
    );
}

#[test]
fn non_positive_cross_section_is_rejected() {
    let path = CoilPath::new(line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 4.0)]);
    assert!(matches!(
        estimate_resistance(&path, 0.0, 0.035, COPPER_RESISTIVITY).unwrap_err(),
        InvalidSpecification::NonPositiveDimension { name: "trace_width", .. }
    ));
    assert!(matches!(
        estimate_resistance(&path, 0.3, -1.0, COPPER_RESISTIVITY).unwrap_err(),
        InvalidSpecification::NonPositiveDimension { name: "trace_thickness", .. }
    ));
}

#[test]
fn resistance_follows_resistivity_and_cross_section() {
    let path = CoilPath::new(line_string![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0)]);
    let base = estimate_resistance(&path, 0.3, 0.035, COPPER_RESISTIVITY).unwrap();
    let doubled_resistivity =
        estimate_resistance(&path, 0.3, 0.035, 2.0 * COPPER_RESISTIVITY).unwrap();
    let doubled_width = estimate_resistance(&path, 0.6, 0.035, COPPER_RESISTIVITY).unwrap();

    assert!(support::approx_eq(doubled_resistivity, 2.0 * base, 1e-12));
    assert!(support::approx_eq(doubled_width, base / 2.0, 1e-12));
}
