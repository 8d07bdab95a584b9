//! Einstiegspunkt: wählt anhand der Pfeilform den passenden Pfad-Aufbau.

use super::curve::build_curved;
use super::straight::build_straight;
use super::types::{ArrowShape, CurveRequest, CurveResult};
use crate::shared::ConnectorOptions;

/// Berechnet Pfad, Pfeilspitze und optional den Lösch-Marker eines Pfeils.
///
/// Reine Funktion ohne Zustand: gleiche Anfrage, gleiches Ergebnis. Der
/// Aufrufer ruft sie bei jeder Änderung von Quelle, Scheitelpunkt oder Ziel
/// erneut auf (z.B. pro Frame während eines Drags).
pub fn build_connector(request: &CurveRequest, options: &ConnectorOptions) -> CurveResult {
    match request.shape {
        ArrowShape::Curved => build_curved(request, options),
        ArrowShape::Straight => build_straight(request),
    }
}
