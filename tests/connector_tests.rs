//! Integrationstests für den Pfeil-Aufbau über die öffentliche API:
//! - Knoten-Exaktheit beider Formvarianten
//! - Standard-Scheitelpunkt → gekrümmter Pfad
//! - Entartete Eingaben ohne NaN

use annotation_connector::geometry::{clamp_peak_offset, peak_from_offset, peak_percent};
use annotation_connector::{
    build_connector, default_peak, ArrowShape, BoundingBox, ConnectorOptions, CurveRequest,
    PathCommand,
};
use approx::assert_abs_diff_eq;
use glam::Vec2;

fn opts() -> ConnectorOptions {
    ConnectorOptions::default()
}

/// Deterministische Punktwolke für Eigenschaftstests.
fn sample_points() -> Vec<Vec2> {
    let mut points = Vec::new();
    for i in 0..7 {
        for j in 0..5 {
            let x = (i as f32 * 73.0) % 410.0 - 120.0;
            let y = (j as f32 * 131.0 + i as f32 * 17.0) % 350.0 - 160.0;
            points.push(Vec2::new(x, y));
        }
    }
    points
}

fn result_is_finite(request: &CurveRequest) -> bool {
    let result = build_connector(request, &opts());
    result.arrowhead_angle_degrees.is_finite()
        && result.delete_marker_point.map_or(true, |p| p.is_finite())
        && result.path.commands().iter().all(|cmd| match *cmd {
            PathCommand::MoveTo { to } | PathCommand::LineTo { to } => to.is_finite(),
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => control1.is_finite() && control2.is_finite() && to.is_finite(),
        })
}

#[test]
fn test_curved_nodes_are_exact_for_many_inputs() {
    let points = sample_points();
    for (idx, &source) in points.iter().enumerate() {
        let peak = points[(idx * 7 + 3) % points.len()];
        let target = points[(idx * 11 + 5) % points.len()];
        let request = CurveRequest::curved(source, peak, target).with_delete_marker();
        let result = build_connector(&request, &opts());
        assert_eq!(result.path.nodes(), vec![source, peak, target]);
        assert!(result_is_finite(&request), "NaN bei {:?}", request);
        let angle = result.arrowhead_angle_degrees;
        assert!((0.0..360.0).contains(&angle), "Winkel {} außerhalb", angle);
    }
}

#[test]
fn test_straight_variant_is_exact_line_regardless_of_peak() {
    let source = Vec2::new(-20.0, 35.0);
    let target = Vec2::new(180.0, -65.0);
    for peak in sample_points() {
        let mut request = CurveRequest::curved(source, peak, target);
        request.shape = ArrowShape::Straight;
        let result = build_connector(&request, &opts());
        assert_eq!(
            result.path.commands(),
            &[
                PathCommand::MoveTo { to: source },
                PathCommand::LineTo { to: target },
            ]
        );
        // atan2(100, 200) in Grad
        assert_abs_diff_eq!(result.arrowhead_angle_degrees, 26.565052, epsilon = 1e-3);
    }
}

#[test]
fn test_default_peak_then_curve() {
    let source = Vec2::new(0.0, 0.0);
    let target = Vec2::new(100.0, 0.0);
    let created = default_peak(ArrowShape::Curved, source, target, &opts());
    assert_abs_diff_eq!(created.peak.x, 50.0, epsilon = 1e-3);
    assert_abs_diff_eq!(created.peak.y, -50.0, epsilon = 1e-3);

    let result = build_connector(
        &CurveRequest::curved(source, created.peak, target).with_delete_marker(),
        &opts(),
    );
    assert_eq!(result.path.nodes()[1], created.peak);
    let marker = result.delete_marker_point.expect("Marker angefordert");
    // Marker liegt auf der rechten Hälfte des Bogens
    assert!(marker.x > 50.0 && marker.x < 100.0);
    assert!(marker.y < 0.0 && marker.y > -50.0);
}

#[test]
fn test_collinear_curve_matches_straight_angle() {
    let source = Vec2::new(0.0, 0.0);
    let peak = Vec2::new(50.0, 0.0);
    let target = Vec2::new(100.0, 0.0);
    let curved = build_connector(&CurveRequest::curved(source, peak, target), &opts());
    let straight = build_connector(&CurveRequest::straight(source, target), &opts());
    assert_eq!(straight.arrowhead_angle_degrees, 0.0);
    let diff = (curved.arrowhead_angle_degrees - straight.arrowhead_angle_degrees).rem_euclid(360.0);
    assert!(diff.min(360.0 - diff) < 1e-2, "curved = {}", curved.arrowhead_angle_degrees);
    for segment in curved.path.cubic_segments() {
        assert_abs_diff_eq!(segment.ctrl1.y, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(segment.ctrl2.y, 0.0, epsilon = 1e-4);
    }
}

#[test]
fn test_collinear_delete_marker_within_one_sample_interval() {
    // Scheitelpunkt, Kontrollpunkte und Ziel auf einer Linie → Bogenlänge = Strecke
    let request = CurveRequest::curved(
        Vec2::new(0.0, 0.0),
        Vec2::new(40.0, 0.0),
        Vec2::new(200.0, 0.0),
    )
    .with_delete_marker();
    let marker = build_connector(&request, &opts())
        .delete_marker_point
        .expect("Marker angefordert");
    let true_midpoint = 120.0;
    let interval = 160.0 / opts().arc_length_samples as f32;
    assert!((marker.x - true_midpoint).abs() <= interval, "marker = {:?}", marker);
    assert_abs_diff_eq!(marker.y, 0.0, epsilon = 1e-4);
}

#[test]
fn test_degenerate_battery_has_no_nan() {
    let a = Vec2::new(100.0, 100.0);
    let b = Vec2::new(250.0, 40.0);
    for shape in [ArrowShape::Curved, ArrowShape::Straight] {
        for (source, peak, target) in [(a, b, a), (a, b, b), (a, a, b), (a, a, a)] {
            let mut request = CurveRequest::curved(source, peak, target).with_delete_marker();
            request.shape = shape;
            assert!(result_is_finite(&request), "NaN bei {:?}", request);
        }
    }
}

#[test]
fn test_peak_percent_thresholds_via_default_peak() {
    let o = opts();
    let mut previous_ratio = f32::INFINITY;
    for length in [20.0f32, 150.0, 199.0, 200.0, 300.0, 450.0, 600.0, 601.0, 2000.0] {
        let created = default_peak(ArrowShape::Curved, Vec2::ZERO, Vec2::new(length, 0.0), &o);
        let ratio = created.offset.length() / (length / 2.0);
        assert_abs_diff_eq!(ratio, peak_percent(length / 2.0, &o), epsilon = 1e-4);
        assert!(ratio <= previous_ratio + 1e-6);
        previous_ratio = ratio;
    }
}

#[test]
fn test_new_arrow_offset_clamped_to_document() {
    // Pfeil nahe am oberen Dokumentrand: Scheitelpunkt darf nicht hinausragen
    let document = BoundingBox::from_corners(Vec2::new(800.0, 600.0), Vec2::ZERO);
    assert_eq!(document, BoundingBox::new(0.0, 0.0, 800.0, 600.0));
    let source = BoundingBox::new(20.0, 10.0, 40.0, 20.0).center();
    let target = BoundingBox::new(220.0, 10.0, 40.0, 20.0).center();
    let created = default_peak(ArrowShape::Curved, source, target, &opts());
    let midpoint = (source + target) * 0.5;
    let offset = clamp_peak_offset(created.offset, midpoint, &document);
    let peak = peak_from_offset(source, target, offset);
    assert!(document.contains(peak));
    assert_abs_diff_eq!(peak.y, 0.0, epsilon = 1e-4);
}
