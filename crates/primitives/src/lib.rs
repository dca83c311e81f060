//! Value types shared by the notification engine.
//!
//! Anchors, notification kinds, element identities, box geometry, and the
//! numeric parsing rules applied to attribute and computed-style strings.

/// Compass-point anchors that partition notifications into stacks.
pub mod anchor;
/// Measured box geometry, base points and pixel offsets.
pub mod geometry;
/// Identity handles for elements owned by a host.
pub mod ids;
/// Presentational notification kinds.
pub mod kind;
/// Lenient numeric parsing and CSS number formatting.
pub mod number;

pub use anchor::Anchor;
pub use geometry::{BasePoint, BoxMetrics, BoxSize, Margins, Offset};
pub use ids::ElementId;
pub use kind::Kind;
pub use number::{format_number, parse_float_prefix, parse_int_prefix, parse_number};
