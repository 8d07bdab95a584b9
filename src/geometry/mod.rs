//! Geometrie gekrümmter und gerader Annotations-Pfeile.
//!
//! Reine Berechnung ohne Zustand: drei Punkte rein, Pfad und Pfeilspitze raus.

pub mod angle;
pub mod bezier;
pub mod bounds;
pub mod connector;
pub mod curve;
pub mod path;
pub mod peak;
pub mod straight;
pub mod types;

pub use angle::{normalize_angle, screen_angle, GEOMETRY_EPSILON};
pub use bezier::{CubicSegment, PolylineApproximation};
pub use bounds::BoundingBox;
pub use connector::build_connector;
pub use curve::{build_curved, CurveGeometry};
pub use path::{PathCommand, PathDescriptor};
pub use peak::{clamp_peak_offset, default_peak, peak_from_offset, peak_percent, DefaultPeak};
pub use straight::build_straight;
pub use types::{ArrowShape, CurveRequest, CurveResult, Point};
