//! Gerader Pfeil: eine Linie `source → target`, der Scheitelpunkt spielt keine Rolle.

use super::angle::screen_angle;
use super::path::PathDescriptor;
use super::types::{CurveRequest, CurveResult};

/// Baut Pfad und Pfeilspitzen-Winkel eines geraden Pfeils.
///
/// Der Lösch-Marker sitzt in der Mitte der Linie.
pub fn build_straight(request: &CurveRequest) -> CurveResult {
    let mut path = PathDescriptor::new(request.source);
    path.line_to(request.target);

    CurveResult {
        path,
        arrowhead_angle_degrees: screen_angle(request.source, request.target).to_degrees(),
        delete_marker_point: request
            .include_delete_marker
            .then(|| (request.source + request.target) * 0.5),
    }
}
