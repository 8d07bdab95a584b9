//! Gekrümmter Pfeil: zwei kubische Bézier-Segmente `source → peak → target`.
//!
//! Beide Segmente beziehen sich auf dieselbe Grundlinie `source → target`,
//! nicht auf ihre eigenen Endpunkte. Dadurch „lehnt“ sich die ganze Kurve
//! einheitlich zur Seite des Scheitelpunkts. Der Scheitelpunkt ist ein
//! echter Kurvenknoten, kein bloßer Einflusspunkt.

use super::angle::{
    angle_difference, blend_angles, normalize_angle, screen_angle, screen_direction,
    GEOMETRY_EPSILON,
};
use super::bezier::CubicSegment;
use super::path::PathDescriptor;
use super::types::{CurveRequest, CurveResult, Point};
use crate::shared::ConnectorOptions;
use std::f32::consts::{FRAC_PI_2, PI};

/// Kontrollpunkte eines Segments zwischen äußerem Endpunkt und Scheitelpunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentControls {
    /// Kontrollpunkt auf der Seite des äußeren Endpunkts (Quelle bzw. Ziel)
    pub outer: Point,
    /// Kontrollpunkt auf der Seite des Scheitelpunkts
    pub inner: Point,
    /// Eckpunkt, zu dem beide Kontrollpunkte hin interpoliert werden
    pub corner: Point,
    /// Scheitelpunkt liegt „hinter“ dem äußeren Endpunkt
    pub beyond: bool,
}

/// Leitet die Kontrollpunkte eines Segments ab.
///
/// - `outer`: Quelle (erstes Segment) oder Ziel (zweites Segment)
/// - `baseline_angle`: Grundlinien-Winkel, vom äußeren Endpunkt aus gesehen
/// - `strength`: Interpolationsfaktor zwischen Endpunkt und Eckpunkt
///
/// Der Vektor `outer → peak` wird in einen Anteil entlang der Grundlinie und
/// einen senkrechten Versatz („intersect“) zerlegt. Der Eckpunkt ist `outer`
/// plus dieser senkrechte Versatz, liegt also senkrecht über `outer` auf Höhe
/// des Scheitelpunkts, sodass die Kurve am Scheitelpunkt parallel zur
/// Grundlinie verläuft. Liegt der Scheitelpunkt hinter `outer`
/// (Winkelabstand > π/2), wird stattdessen der Längsanteil über den
/// Scheitelpunkt hinaus gespiegelt, sonst käme die Kurve rückwärts am
/// Scheitelpunkt an und bildete eine Schleife.
pub fn segment_controls(
    outer: Point,
    peak: Point,
    baseline_angle: f32,
    strength: f32,
) -> SegmentControls {
    let peak_angle = screen_angle(outer, peak);
    let peak_length = outer.distance(peak);
    let delta = peak_angle - baseline_angle;

    let intersect = peak_length * delta.sin();
    let along = peak_length * delta.cos();
    let perpendicular = screen_direction(baseline_angle + FRAC_PI_2) * intersect;
    let parallel = screen_direction(baseline_angle) * along;

    let beyond = angle_difference(peak_angle, baseline_angle) > FRAC_PI_2;
    let corner = if beyond {
        peak + parallel
    } else {
        outer + perpendicular
    };

    SegmentControls {
        outer: outer.lerp(corner, strength),
        inner: peak.lerp(corner, strength),
        corner,
        beyond,
    }
}

/// Beide Bézier-Segmente eines gekrümmten Pfeils samt Grundlinie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGeometry {
    /// Segment `source → peak`
    pub first: CubicSegment,
    /// Segment `peak → target`
    pub second: CubicSegment,
    /// Screen-Winkel `source → target` (0 bei zusammenfallenden Endpunkten)
    pub baseline_angle: f32,
    /// Scheitelpunkt liegt hinter der Quelle
    pub first_beyond: bool,
    /// Scheitelpunkt liegt hinter dem Ziel
    pub second_beyond: bool,
}

impl CurveGeometry {
    /// Berechnet die Kontrollpunkte beider Segmente.
    pub fn new(source: Point, peak: Point, target: Point, control_strength: f32) -> Self {
        let baseline_angle = screen_angle(source, target);
        let first = segment_controls(source, peak, baseline_angle, control_strength);
        let second = segment_controls(
            target,
            peak,
            normalize_angle(baseline_angle + PI),
            control_strength,
        );

        Self {
            first: CubicSegment::new(source, first.outer, first.inner, peak),
            second: CubicSegment::new(peak, second.inner, second.outer, target),
            baseline_angle,
            first_beyond: first.beyond,
            second_beyond: second.beyond,
        }
    }

    /// Pfad `M source C c1 c2 peak C c3 c4 target`.
    pub fn to_path(&self) -> PathDescriptor {
        let mut path = PathDescriptor::new(self.first.start);
        path.cubic_to(self.first.ctrl1, self.first.ctrl2, self.first.end)
            .cubic_to(self.second.ctrl1, self.second.ctrl2, self.second.end);
        path
    }

    /// Rotation der Pfeilspitze am Ziel (Radiant, Screen-Konvention).
    ///
    /// Mischt die Sehnenrichtung `peak → target` mit der Ankunftsrichtung
    /// aus dem letzten Kontrollpunkt. Je weiter die Richtung `target → peak`
    /// von der Rückrichtung der Grundlinie (π) abweicht, desto stärker zählt
    /// die Ankunftsrichtung. Der Exponent steigt, wenn der Scheitelpunkt
    /// hinter der Quelle liegt.
    pub fn arrowhead_angle(&self, options: &ConnectorOptions) -> f32 {
        let peak = self.second.start;
        let target = self.second.end;
        if peak.distance(target) <= GEOMETRY_EPSILON {
            // Scheitelpunkt auf dem Ziel: Grundlinie, bzw. 0 bei Quelle == Ziel
            return self.baseline_angle;
        }

        let chord_angle = screen_angle(peak, target);
        let tangent_angle = if self.second.ctrl2.distance(target) > GEOMETRY_EPSILON {
            screen_angle(self.second.ctrl2, target)
        } else {
            chord_angle
        };

        let relative = normalize_angle(screen_angle(target, peak) - self.baseline_angle);
        let deviation = ((relative - PI).abs() / PI).clamp(0.0, 1.0);
        let exponent = if self.first_beyond {
            options.arrowhead_exponent_beyond
        } else {
            options.arrowhead_exponent
        };
        let weight = 1.0 - (1.0 - deviation).powi(exponent);

        blend_angles(chord_angle, tangent_angle, weight)
    }
}

/// Baut Pfad, Pfeilspitzen-Winkel und optional den Lösch-Marker eines gekrümmten Pfeils.
pub fn build_curved(request: &CurveRequest, options: &ConnectorOptions) -> CurveResult {
    let geometry = CurveGeometry::new(
        request.source,
        request.peak,
        request.target,
        options.control_strength,
    );

    let delete_marker_point = request.include_delete_marker.then(|| {
        geometry
            .second
            .point_at_length_fraction(options.delete_marker_fraction, options.sample_count())
    });

    CurveResult {
        path: geometry.to_path(),
        arrowhead_angle_degrees: geometry.arrowhead_angle(options).to_degrees(),
        delete_marker_point,
    }
}
