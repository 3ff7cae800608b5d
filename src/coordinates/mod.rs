//! # Coordinate Vectors
//!
//! Two- and three-dimensional vectors that can be stored in any of the
//! supported coordinate systems while exposing the same accessor surface
//! (`x`, `y`, `z`, `r`, `phi`, `theta`, ...), plus unit direction vectors
//! stored purely as angles.
//!
//! ## Storage
//!
//! A [`Vector2`] holds either rectangular `(x, y)` or polar `(r, phi)`
//! coordinates; a [`Vector3`] holds either rectangular `(x, y, z)` or
//! spherical `(r, phi, theta)` coordinates. Whichever form is stored, every
//! other form is computed on request. Polar and spherical storage is kept
//! canonical:
//!
//! - a radius below [`RADIUS_TOLERANCE`](crate::constants::RADIUS_TOLERANCE)
//!   collapses the vector to exact zero
//! - a negative radius is flipped and the direction turned around
//! - `phi` lies in (-π, π], `theta` in [0, π]
//! - angles within a few machine epsilons of zero snap to exactly zero
//!
//! [`Direction2`] and [`Direction3`] have no stored magnitude; `r()` is
//! identically one.
//!
//! ## Operands
//!
//! Products, angles and parallelism tests accept anything implementing
//! [`Components2`] or [`Components3`], so vectors and directions mix freely.
//!
//! ```rust
//! use detgeom::coordinates::{Direction3, Vector3};
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let z = Direction3::from_components(0.0, 0.0, 1.0);
//! assert_eq!(a.dot_prod(&z), 0.0);
//! ```

use std::fmt;

mod angle;
pub mod direction2;
pub mod direction3;
mod precision;
pub mod vector2;
pub mod vector3;

pub(crate) use precision::cross2;
pub use direction2::Direction2;
pub use direction3::Direction3;
pub use vector2::{Coords2, Vector2};
pub use vector3::{Coords3, Vector3};

/// Coordinate system used to store a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordSystem {
    /// Cartesian components
    Rectangular,
    /// Radius and azimuth (two dimensions only)
    Polar,
    /// Radius, azimuth and polar angle (three dimensions only)
    Spherical,
}

/// Read access shared by all two-dimensional vector-like values
pub trait Components2 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn r2(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y()
    }

    fn r(&self) -> f64 {
        self.r2().sqrt()
    }

    /// Azimuth in (-π, π]
    fn phi(&self) -> f64 {
        self.y().atan2(self.x())
    }
}

/// Read access shared by all three-dimensional vector-like values
pub trait Components3 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;

    fn r2(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y() + self.z() * self.z()
    }

    fn r(&self) -> f64 {
        self.r2().sqrt()
    }

    /// Azimuth in (-π, π]
    fn phi(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// Polar angle from +z in [0, π]
    fn theta(&self) -> f64 {
        let r = self.r();
        if r < crate::constants::ZERO_LENGTH {
            0.0
        } else {
            (self.z() / r).clamp(-1.0, 1.0).acos()
        }
    }
}

/// Writes `open v0, v1, ... close`, honouring the formatter's precision
pub(crate) fn write_tuple(
    f: &mut fmt::Formatter<'_>,
    open: char,
    close: char,
    values: &[f64],
) -> fmt::Result {
    let precision = f.precision();
    write!(f, "{}", open)?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        match precision {
            Some(p) => write!(f, "{:.*}", p, value)?,
            None => write!(f, "{}", value)?,
        }
    }
    write!(f, "{}", close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    struct Raw2(f64, f64);

    impl Components2 for Raw2 {
        fn x(&self) -> f64 {
            self.0
        }
        fn y(&self) -> f64 {
            self.1
        }
    }

    struct Raw3(f64, f64, f64);

    impl Components3 for Raw3 {
        fn x(&self) -> f64 {
            self.0
        }
        fn y(&self) -> f64 {
            self.1
        }
        fn z(&self) -> f64 {
            self.2
        }
    }

    #[test]
    fn test_default_trait_accessors() {
        let p = Raw2(0.0, -2.0);
        assert_eq!(p.r(), 2.0);
        assert_relative_eq!(p.phi(), -PI / 2.0);

        let s = Raw3(0.0, 0.0, -3.0);
        assert_eq!(s.r2(), 9.0);
        assert_relative_eq!(s.theta(), PI);

        let origin = Raw3(0.0, 0.0, 0.0);
        assert_eq!(origin.theta(), 0.0);
    }

    #[test]
    fn test_foreign_operands_mix_with_vectors() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.dot_prod(&Raw3(1.0, 1.0, 1.0)), 6.0);

        let w = Vector2::new(3.0, 4.0);
        assert_eq!(w.dot_prod(&Raw2(1.0, 0.0)), 3.0);
    }

    #[test]
    fn test_display_precision_is_forwarded() {
        let v = Vector3::new(1.0, 0.5, -2.0);
        assert_eq!(format!("{}", v), "(1, 0.5, -2)");
        assert_eq!(format!("{:.2}", v), "(1.00, 0.50, -2.00)");
    }
}
