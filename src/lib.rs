//! Detgeom: geometry kernel for detector modelling
//!
//! This crate provides the vector algebra that detector-geometry builders
//! are written against: two- and three-dimensional vectors with
//! interchangeable coordinate storage, unit directions, lines, segments,
//! planes, rotations and relativistic four-vectors.
//!
//! All types are small `Copy` values with no shared state, so they can be
//! used freely across threads. Near-degenerate inputs (tiny radii, angles a
//! few ulps from zero) are canonicalised rather than rejected; only queries
//! with no answer return an error.
//!
//! ```rust
//! use detgeom::{Direction2, Line2, Vector2};
//!
//! let v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.r(), 5.0);
//!
//! let floor = Line2::new(Vector2::zero(), Direction2::new(0.0));
//! let wall = Line2::from_components(2.0, 0.0, 0.0, 1.0);
//! let corner = floor.intersection(&wall)?;
//! assert!((corner.x() - 2.0).abs() < 1e-15);
//! # Ok::<(), detgeom::GeometryError>(())
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod lines;
pub mod lorentz;
pub mod plane;
pub mod rotation;

// Re-export commonly used types
pub use coordinates::{
    Components2, Components3, CoordSystem, Direction2, Direction3, Vector2, Vector3,
};
pub use lines::{Line2, Line3, LineSegment2, LineSegment3};
pub use lorentz::{KeepConstant, LorentzVector};
pub use plane::{shortest_connection, Plane};
pub use rotation::{EulerSequence, Rotation2, Rotation3};

/// Main error type for the geometry kernel
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The query needs two lines that cross, but they are parallel
    #[error("lines are parallel: {0}")]
    ParallelLines(String),

    /// The query exists in the interface but has no implementation
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;

pub(crate) fn not_implemented<T>(what: &'static str) -> Result<T> {
    log::debug!("{} called", what);
    Err(GeometryError::NotImplemented(what))
}
