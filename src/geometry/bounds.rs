//! Achsenparallele Bounding-Box annotierter Objekte im Canvas-Raum.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rechteck in Canvas-Koordinaten (Ursprung oben links, Y nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Erstellt eine Box aus linker oberer Ecke und Größe.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Erstellt die kleinste Box, die beide Eckpunkte enthält.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Mittelpunkt der Box, üblicher Ankerpunkt eines Annotations-Pfeils.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Prüft, ob ein Punkt innerhalb der Box liegt (Ränder inklusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}
