//! # Lines and Line Segments
//!
//! A line is a point plus a [`Direction2`](crate::coordinates::Direction2)
//! or [`Direction3`](crate::coordinates::Direction3) and extends without
//! bound both ways. Lines carry no orientation for the purposes of
//! parallelism: a line pointing along `+x` is parallel to one pointing along
//! `-x`.
//!
//! A segment adds a signed length along the direction, so
//! `end_point = point + length · direction`.
//!
//! ```rust
//! use detgeom::lines::Line2;
//!
//! let horizontal = Line2::from_components(0.0, 0.0, 1.0, 0.0);
//! let diagonal = Line2::from_components(0.0, 1.0, 1.0, -1.0);
//! let p = horizontal.intersection(&diagonal).unwrap();
//! assert!((p.x() - 1.0).abs() < 1e-15);
//! assert!(p.y().abs() < 1e-15);
//! ```

use std::fmt;

pub mod line;
pub mod segment;

pub use line::{Line2, Line3};
pub use segment::{LineSegment2, LineSegment3};

/// Writes `name{a, b}` or `name{a, b, c}`, forwarding the formatter's precision
pub(crate) fn write_braced(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    parts: &[&dyn fmt::Display],
) -> fmt::Result {
    let precision = f.precision();
    write!(f, "{}{{", name)?;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match precision {
            Some(p) => write!(f, "{:.*}", p, part)?,
            None => write!(f, "{}", part)?,
        }
    }
    write!(f, "}}")
}
