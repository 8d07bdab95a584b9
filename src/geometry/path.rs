//! Renderer-unabhängige Pfadbeschreibung (Move/Line/Cubic-Befehle).

use super::bezier::CubicSegment;
use super::types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Einzelner Zeichenbefehl
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PathCommand {
    /// Setzt den Stift ohne zu zeichnen
    MoveTo { to: Point },
    /// Gerade Linie zum Zielpunkt
    LineTo { to: Point },
    /// Kubisches Bézier-Segment zum Zielpunkt
    CubicTo {
        control1: Point,
        control2: Point,
        to: Point,
    },
}

impl PathCommand {
    /// Punkt, an dem der Stift nach dem Befehl steht.
    pub fn end_point(&self) -> Point {
        match *self {
            PathCommand::MoveTo { to }
            | PathCommand::LineTo { to }
            | PathCommand::CubicTo { to, .. } => to,
        }
    }
}

/// Folge von Zeichenbefehlen, beginnt immer mit genau einem `MoveTo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathDescriptor {
    commands: Vec<PathCommand>,
}

impl PathDescriptor {
    /// Beginnt einen neuen Pfad am Startpunkt.
    pub fn new(start: Point) -> Self {
        Self {
            commands: vec![PathCommand::MoveTo { to: start }],
        }
    }

    /// Hängt eine gerade Linie an.
    pub fn line_to(&mut self, to: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo { to });
        self
    }

    /// Hängt ein kubisches Bézier-Segment an.
    pub fn cubic_to(&mut self, control1: Point, control2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn start_point(&self) -> Point {
        self.commands
            .first()
            .map(PathCommand::end_point)
            .unwrap_or_default()
    }

    pub fn end_point(&self) -> Point {
        self.commands
            .last()
            .map(PathCommand::end_point)
            .unwrap_or_default()
    }

    /// Alle Punkte, durch die der Pfad exakt verläuft (Start, Segment-Enden).
    pub fn nodes(&self) -> Vec<Point> {
        self.commands.iter().map(PathCommand::end_point).collect()
    }

    /// Alle Bézier-Segmente mit ihrem jeweiligen Startpunkt.
    pub fn cubic_segments(&self) -> Vec<CubicSegment> {
        let mut current = self.start_point();
        let mut segments = Vec::new();
        for command in &self.commands {
            if let PathCommand::CubicTo {
                control1,
                control2,
                to,
            } = *command
            {
                segments.push(CubicSegment::new(current, control1, control2, to));
            }
            current = command.end_point();
        }
        segments
    }

    /// Serialisiert den Pfad als SVG-Pfaddaten (`M x y C … `).
    pub fn to_svg_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, command) in self.commands.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo { to } => write!(f, "M {} {}", to.x, to.y)?,
                PathCommand::LineTo { to } => write!(f, "L {} {}", to.x, to.y)?,
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => write!(
                    f,
                    "C {} {} {} {} {} {}",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                )?,
            }
        }
        Ok(())
    }
}
