//! Winkel-Hilfsfunktionen im Screen-Koordinatensystem (Y wächst nach unten).
//!
//! Alle Winkel werden als `atan2(-dy, dx)` gemessen, damit sie visuell gegen
//! den Uhrzeigersinn wachsen. Jede Funktion in `geometry` hält sich daran.

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Vektoren kürzer als dieser Wert gelten als Null-Vektor (Canvas-Einheiten).
pub const GEOMETRY_EPSILON: f32 = 1e-4;

/// Normalisiert einen Winkel in das Intervall `[0, 2π)`.
///
/// Total und idempotent: nicht-endliche Eingaben (NaN, ±∞) liefern `0`.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid kann bei winzigen negativen Werten exakt TAU liefern;
    // `+ 0.0` macht aus -0.0 eine echte Null.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped + 0.0
    }
}

/// Screen-Winkel von `from` nach `to`. Zusammenfallende Punkte liefern `0`.
pub fn screen_angle(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    if delta.length() <= GEOMETRY_EPSILON {
        return 0.0;
    }
    normalize_angle((-delta.y).atan2(delta.x))
}

/// Einheitsvektor zu einem Screen-Winkel (Umkehrung von [`screen_angle`]).
pub fn screen_direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), -angle.sin())
}

/// Kürzester vorzeichenloser Winkelabstand in `[0, π]`.
pub fn angle_difference(a: f32, b: f32) -> f32 {
    let diff = normalize_angle(a - b);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}

/// Lineare Interpolation zwischen zwei Winkeln mit Wrap-Around-Korrektur.
///
/// Liegen beide Kandidaten mehr als `π` auseinander, wird der kleinere um
/// `2π` verschoben, sonst würde die Mischung über die falsche Seite des
/// Kreises laufen (umgedrehte Pfeilspitze).
pub fn blend_angles(from: f32, to: f32, weight: f32) -> f32 {
    let mut from = normalize_angle(from);
    let mut to = normalize_angle(to);
    if (from - to).abs() > PI {
        if from < to {
            from += TAU;
        } else {
            to += TAU;
        }
    }
    normalize_angle(from + (to - from) * weight)
}
