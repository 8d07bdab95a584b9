//! Kubische Bézier-Segmente und Bogenlängen-Approximation.
//!
//! Für kubische Bézier-Kurven gibt es keine geschlossene Umkehrung der
//! Bogenlänge. Die Position bei einem Längenanteil wird daher über eine
//! abgetastete Polylinie geschätzt.

use super::angle::GEOMETRY_EPSILON;
use super::types::Point;
use serde::{Deserialize, Serialize};

/// Kubisches Bézier-Segment aus zwei Endpunkten und zwei Kontrollpunkten
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl CubicSegment {
    pub fn new(start: Point, ctrl1: Point, ctrl2: Point, end: Point) -> Self {
        Self {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    /// Evaluiert B(t) per De-Casteljau (wiederholte lineare Interpolation).
    pub fn point_at(&self, t: f32) -> Point {
        let a = self.start.lerp(self.ctrl1, t);
        let b = self.ctrl1.lerp(self.ctrl2, t);
        let c = self.ctrl2.lerp(self.end, t);
        let ab = a.lerp(b, t);
        let bc = b.lerp(c, t);
        ab.lerp(bc, t)
    }

    /// Tastet das Segment mit `samples` Intervallen ab.
    pub fn polyline(&self, samples: usize) -> PolylineApproximation {
        PolylineApproximation::from_cubic(self, samples)
    }

    /// Punkt bei `fraction` der geschätzten Bogenlänge.
    pub fn point_at_length_fraction(&self, fraction: f32, samples: usize) -> Point {
        self.polyline(samples).point_at_fraction(self, fraction)
    }
}

/// Stützstelle der Polylinie
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSample {
    /// Kurvenparameter
    pub t: f32,
    /// Position auf der Kurve
    pub point: Point,
    /// Aufsummierte Sehnenlänge bis zu dieser Stützstelle
    pub length: f32,
}

/// Polylinien-Approximation einer Kurve als Längentabelle.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineApproximation {
    samples: Vec<ArcSample>,
}

impl PolylineApproximation {
    /// Baut die Tabelle aus gleichmäßig verteilten Parameterwerten auf.
    pub fn from_cubic(segment: &CubicSegment, samples: usize) -> Self {
        let intervals = samples.max(1);
        let mut table = Vec::with_capacity(intervals + 1);
        let mut prev = segment.start;
        let mut cumulative = 0.0f32;
        table.push(ArcSample {
            t: 0.0,
            point: prev,
            length: 0.0,
        });
        for i in 1..=intervals {
            let t = i as f32 / intervals as f32;
            let point = segment.point_at(t);
            cumulative += prev.distance(point);
            table.push(ArcSample {
                t,
                point,
                length: cumulative,
            });
            prev = point;
        }
        Self { samples: table }
    }

    pub fn samples(&self) -> &[ArcSample] {
        &self.samples
    }

    /// Geschätzte Gesamtlänge.
    pub fn total_length(&self) -> f32 {
        self.samples.last().map_or(0.0, |s| s.length)
    }

    /// Kurvenparameter bei `fraction` (0..=1) der Gesamtlänge.
    ///
    /// Sucht die erste Stützstelle, deren Längenanteil den Zielanteil erreicht,
    /// und interpoliert `t` linear zwischen ihr und ihrer Vorgängerin.
    pub fn parameter_at_fraction(&self, fraction: f32) -> f32 {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let total = self.total_length();
        if total <= GEOMETRY_EPSILON || self.samples.len() < 2 {
            // Alle Punkte fallen zusammen, jeder Parameter ist gleich gut
            return fraction;
        }

        let target_length = fraction * total;
        let last = self.samples.len() - 1;
        let idx = self
            .samples
            .partition_point(|s| s.length < target_length)
            .clamp(1, last);

        let before = self.samples[idx - 1];
        let after = self.samples[idx];
        let span = after.length - before.length;
        let frac = if span > f32::EPSILON {
            (target_length - before.length) / span
        } else {
            0.0
        };
        before.t + (after.t - before.t) * frac
    }

    /// Punkt bei `fraction` der Gesamtlänge, ausgewertet auf der Originalkurve.
    pub fn point_at_fraction(&self, segment: &CubicSegment, fraction: f32) -> Point {
        segment.point_at(self.parameter_at_fraction(fraction))
    }
}
