//! Annotation Connector Library.
//! Geometrie für gekrümmte und gerade Annotations-Pfeile zwischen zwei Objekten.

pub mod geometry;
pub mod shared;

pub use geometry::{
    build_connector, default_peak, normalize_angle, ArrowShape, BoundingBox, CubicSegment,
    CurveRequest, CurveResult, DefaultPeak, PathCommand, PathDescriptor, Point,
    PolylineApproximation,
};
pub use shared::ConnectorOptions;
