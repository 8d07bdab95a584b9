//! Standard-Scheitelpunkt für neu erstellte Pfeile.
//!
//! Ohne User-Eingabe soll ein frischer Pfeil sichtbar gewölbt sein. Kurze
//! Pfeile wölben sich relativ stärker als lange, sonst wirken lange Pfeile
//! wie Halbkreise.

use super::angle::{normalize_angle, screen_angle, GEOMETRY_EPSILON};
use super::bounds::BoundingBox;
use super::types::{ArrowShape, Point};
use crate::shared::ConnectorOptions;
use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

/// Berechneter Scheitelpunkt samt Versatz zur Pfeilmitte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultPeak {
    /// Absolute Position des Scheitelpunkts
    pub peak: Point,
    /// `peak - mittelpunkt`, so wie das Dokumentmodell ihn speichert
    pub offset: Vec2,
}

/// Wölbungsanteil relativ zur halben Pfeillänge.
///
/// Konstant unterhalb von `peak_short_length` und oberhalb von
/// `peak_long_length`, dazwischen linear interpoliert.
pub fn peak_percent(arc_length: f32, options: &ConnectorOptions) -> f32 {
    let short = options.peak_short_length;
    let long = options.peak_long_length;
    if arc_length <= short {
        return options.peak_percent_short;
    }
    if arc_length >= long {
        return options.peak_percent_long;
    }
    let t = (arc_length - short) / (long - short);
    options.peak_percent_short + (options.peak_percent_long - options.peak_percent_short) * t
}

/// Berechnet den Standard-Scheitelpunkt zwischen `source` und `target`.
///
/// Gerade Pfeile und zusammenfallende Endpunkte liefern den Mittelpunkt.
pub fn default_peak(
    shape: ArrowShape,
    source: Point,
    target: Point,
    options: &ConnectorOptions,
) -> DefaultPeak {
    let midpoint = (source + target) * 0.5;
    let arc_length = source.distance(target) / 2.0;
    if shape == ArrowShape::Straight || arc_length <= GEOMETRY_EPSILON {
        return DefaultPeak {
            peak: midpoint,
            offset: Vec2::ZERO,
        };
    }

    let arrow_angle = screen_angle(source, target);
    // Pfeile nach links wölben sich zur selben Bildschirmseite wie Pfeile nach rechts
    let multiplier = if arrow_angle > FRAC_PI_2 && arrow_angle < PI + FRAC_PI_2 {
        1.0
    } else {
        -1.0
    };
    let perpendicular_angle = normalize_angle(multiplier * FRAC_PI_2 - arrow_angle);
    let reach = arc_length * peak_percent(arc_length, options);

    // perpendicular_angle ist an der x-Achse gespiegelt (−arrow_angle), das
    // entspricht bereits der negierten y-Komponente im Screen-Raum.
    let offset = Vec2::new(perpendicular_angle.cos(), perpendicular_angle.sin()) * reach;

    DefaultPeak {
        peak: midpoint + offset,
        offset,
    }
}

/// Begrenzt einen Scheitelpunkt-Versatz, damit der Scheitelpunkt im Dokument bleibt.
pub fn clamp_peak_offset(offset: Vec2, midpoint: Point, bounds: &BoundingBox) -> Vec2 {
    Vec2::new(
        offset
            .x
            .min(bounds.right() - midpoint.x)
            .max(bounds.left - midpoint.x),
        offset
            .y
            .min(bounds.bottom() - midpoint.y)
            .max(bounds.top - midpoint.y),
    )
}

/// Absoluter Scheitelpunkt aus gespeichertem Versatz zur Pfeilmitte.
pub fn peak_from_offset(source: Point, target: Point, offset: Vec2) -> Point {
    (source + target) * 0.5 + offset
}
