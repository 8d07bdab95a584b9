//! Ein- und Ausgabetypen der Verbindungs-Geometrie.

use super::path::PathDescriptor;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Punkt im lokalen Canvas-Koordinatensystem (Y wächst nach unten).
pub type Point = Vec2;

/// Formvariante eines Annotations-Pfeils
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowShape {
    /// Zwei kubische Bézier-Segmente durch den Scheitelpunkt
    #[default]
    Curved,
    /// Direkte Linie, Scheitelpunkt ohne Einfluss
    Straight,
}

impl ArrowShape {
    /// Serialisierter Name der Variante.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArrowShape::Curved => "curved",
            ArrowShape::Straight => "straight",
        }
    }
}

impl std::str::FromStr for ArrowShape {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curved" => Ok(ArrowShape::Curved),
            "straight" => Ok(ArrowShape::Straight),
            other => anyhow::bail!("Unbekannte Pfeilform: '{}'", other),
        }
    }
}

impl std::fmt::Display for ArrowShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Eingabe für einen Pfad-Aufbau: drei Punkte plus Formvariante.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveRequest {
    /// Startpunkt (meist Mittelpunkt des Quellobjekts)
    pub source: Point,
    /// Vom User verschiebbarer Scheitelpunkt
    pub peak: Point,
    /// Zielpunkt, an dem die Pfeilspitze sitzt
    pub target: Point,
    /// Gewählte Formvariante
    #[serde(default)]
    pub shape: ArrowShape,
    /// Lösch-Marker-Position mitberechnen
    #[serde(default)]
    pub include_delete_marker: bool,
}

impl CurveRequest {
    /// Anfrage für einen gekrümmten Pfeil.
    pub fn curved(source: Point, peak: Point, target: Point) -> Self {
        Self {
            source,
            peak,
            target,
            shape: ArrowShape::Curved,
            include_delete_marker: false,
        }
    }

    /// Anfrage für einen geraden Pfeil. Der Scheitelpunkt liegt in der Mitte.
    pub fn straight(source: Point, target: Point) -> Self {
        Self {
            source,
            peak: (source + target) * 0.5,
            target,
            shape: ArrowShape::Straight,
            include_delete_marker: false,
        }
    }

    /// Fordert zusätzlich die Position des Lösch-Markers an.
    pub fn with_delete_marker(mut self) -> Self {
        self.include_delete_marker = true;
        self
    }

    /// Prüft, ob alle Koordinaten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.source.is_finite() && self.peak.is_finite() && self.target.is_finite()
    }
}

/// Ergebnis eines Pfad-Aufbaus, für beide Formvarianten gleich aufgebaut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveResult {
    /// Zeichenbefehle vom Start- zum Zielpunkt
    pub path: PathDescriptor,
    /// Rotation der Pfeilspitze am Zielpunkt (Grad, gegen den Uhrzeigersinn)
    pub arrowhead_angle_degrees: f32,
    /// Position des Lösch-Markers, nur wenn angefordert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_marker_point: Option<Point>,
}
