//! Zentrale Konfiguration der Verbindungs-Geometrie.
//!
//! `ConnectorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};

// ── Kurvenform ──────────────────────────────────────────────────────

/// Interpolationsfaktor zwischen Segment-Endpunkt und Eckpunkt der Kontrollpunkte.
pub const CONTROL_STRENGTH: f32 = 0.5;

// ── Standard-Scheitelpunkt ──────────────────────────────────────────

/// Unterhalb dieser halben Pfeillänge wölbt sich der Pfeil voll (Canvas-Einheiten).
pub const PEAK_SHORT_LENGTH: f32 = 100.0;
/// Oberhalb dieser halben Pfeillänge gilt der reduzierte Wölbungsanteil.
pub const PEAK_LONG_LENGTH: f32 = 300.0;
/// Wölbungsanteil kurzer Pfeile (relativ zur halben Pfeillänge).
pub const PEAK_PERCENT_SHORT: f32 = 1.0;
/// Wölbungsanteil langer Pfeile.
pub const PEAK_PERCENT_LONG: f32 = 0.5;

// ── Lösch-Marker ────────────────────────────────────────────────────

/// Anzahl der Stützstellen für die Bogenlängen-Schätzung.
pub const ARC_LENGTH_SAMPLES: usize = 10;
/// Anteil der Bogenlänge, an dem der Lösch-Marker sitzt.
pub const DELETE_MARKER_FRACTION: f32 = 0.5;

// ── Pfeilspitze ─────────────────────────────────────────────────────

/// Exponent der Winkelmischung im Normalfall.
pub const ARROWHEAD_EXPONENT: i32 = 4;
/// Exponent, wenn der Scheitelpunkt hinter der Quelle liegt.
pub const ARROWHEAD_EXPONENT_BEYOND: i32 = 8;

/// Alle zur Laufzeit änderbaren Geometrie-Optionen.
/// Wird als `annotation_connector.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorOptions {
    // ── Kurvenform ──────────────────────────────────────────────
    /// Interpolationsfaktor der Bézier-Kontrollpunkte
    pub control_strength: f32,

    // ── Standard-Scheitelpunkt ──────────────────────────────────
    /// Schwelle für volle Wölbung
    pub peak_short_length: f32,
    /// Schwelle für reduzierte Wölbung
    pub peak_long_length: f32,
    /// Wölbungsanteil unterhalb `peak_short_length`
    pub peak_percent_short: f32,
    /// Wölbungsanteil oberhalb `peak_long_length`
    pub peak_percent_long: f32,

    // ── Lösch-Marker ────────────────────────────────────────────
    /// Stützstellen der Polylinien-Approximation
    pub arc_length_samples: usize,
    /// Position des Lösch-Markers als Anteil der Bogenlänge
    pub delete_marker_fraction: f32,

    // ── Pfeilspitze ─────────────────────────────────────────────
    /// Mischungs-Exponent im Normalfall
    pub arrowhead_exponent: i32,
    /// Mischungs-Exponent bei Scheitelpunkt hinter der Quelle
    pub arrowhead_exponent_beyond: i32,
}

impl Default for ConnectorOptions {
    fn default() -> Self {
        Self {
            control_strength: CONTROL_STRENGTH,

            peak_short_length: PEAK_SHORT_LENGTH,
            peak_long_length: PEAK_LONG_LENGTH,
            peak_percent_short: PEAK_PERCENT_SHORT,
            peak_percent_long: PEAK_PERCENT_LONG,

            arc_length_samples: ARC_LENGTH_SAMPLES,
            delete_marker_fraction: DELETE_MARKER_FRACTION,

            arrowhead_exponent: ARROWHEAD_EXPONENT,
            arrowhead_exponent_beyond: ARROWHEAD_EXPONENT_BEYOND,
        }
    }
}

impl ConnectorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("annotation_connector"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("annotation_connector.toml")
    }

    /// Stützstellen der Bogenlängen-Schätzung, mindestens 1.
    pub fn sample_count(&self) -> usize {
        self.arc_length_samples.max(1)
    }
}
