//! Unit vectors in the plane, stored as a single azimuth.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::angle::{self, canonical_phi_2d};
use super::{precision, write_tuple, Components2, Vector2};
use crate::constants::{PARALLEL_TOLERANCE, PI};

/// Unit vector in two dimensions
///
/// `r()` is identically one. The azimuth is kept in (-π, π] and snaps to
/// zero within `10ε`.
///
/// # Examples
///
/// ```rust
/// use detgeom::coordinates::Direction2;
/// use std::f64::consts::FRAC_PI_2;
///
/// let up = Direction2::from_components(0.0, 1.0);
/// assert_eq!(up.phi(), FRAC_PI_2);
///
/// // scaling a direction gives a displacement in polar form
/// let step = up * 3.0;
/// assert!((step.y() - 3.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction2 {
    phi: f64,
}

impl Direction2 {
    pub fn new(phi: f64) -> Self {
        Direction2 {
            phi: canonical_phi_2d(phi),
        }
    }

    /// Direction of the vector `(x, y)`; the zero vector maps to `phi = 0`
    pub fn from_components(x: f64, y: f64) -> Self {
        Self::new(y.atan2(x))
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn x(&self) -> f64 {
        self.phi.cos()
    }

    pub fn y(&self) -> f64 {
        self.phi.sin()
    }

    pub fn r(&self) -> f64 {
        1.0
    }

    pub fn r2(&self) -> f64 {
        1.0
    }

    pub fn cosphi(&self) -> f64 {
        self.phi.cos()
    }

    pub fn set_phi(&mut self, phi: f64) -> &mut Self {
        self.phi = canonical_phi_2d(phi);
        self
    }

    /// Sets the azimuth from its cosine, choosing the upper half plane
    ///
    /// # Panics
    ///
    /// Panics if `cosphi` lies outside [-1, 1].
    pub fn set_cosphi(&mut self, cosphi: f64) -> &mut Self {
        assert!(cosphi.abs() <= 1.0, "cosphi out of range: {}", cosphi);
        self.set_phi(cosphi.acos())
    }

    pub fn dot_prod(&self, v: &impl Components2) -> f64 {
        precision::dot2(self.x(), self.y(), v.x(), v.y())
    }

    /// Component of this direction along `v`
    pub fn projection(&self, v: &impl Components2) -> Vector2 {
        Vector2::from(*self).projection(v)
    }

    pub fn angle(&self, v: &impl Components2) -> f64 {
        angle::angle_2d(self, v)
    }

    pub fn is_parallel(&self, v: &impl Components2) -> bool {
        self.is_parallel_within(v, PARALLEL_TOLERANCE)
    }

    pub fn is_parallel_within(&self, v: &impl Components2, tol: f64) -> bool {
        angle::parallel_2d(self, v, tol)
    }
}

impl Default for Direction2 {
    /// Direction of the +x axis
    fn default() -> Self {
        Direction2 { phi: 0.0 }
    }
}

impl Components2 for Direction2 {
    fn x(&self) -> f64 {
        Direction2::x(self)
    }
    fn y(&self) -> f64 {
        Direction2::y(self)
    }
    fn r2(&self) -> f64 {
        1.0
    }
    fn r(&self) -> f64 {
        1.0
    }
    fn phi(&self) -> f64 {
        self.phi
    }
}

impl From<Vector2> for Direction2 {
    fn from(v: Vector2) -> Self {
        Direction2::new(v.phi())
    }
}

impl fmt::Display for Direction2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, '[', ']', &[self.phi])?;
        write_tuple(f, '(', ')', &[self.x(), self.y()])
    }
}

impl Neg for Direction2 {
    type Output = Direction2;

    fn neg(self) -> Direction2 {
        Direction2::new(self.phi + PI)
    }
}

impl Mul<f64> for Direction2 {
    type Output = Vector2;

    fn mul(self, a: f64) -> Vector2 {
        Vector2::polar(a, self.phi)
    }
}

impl Mul<Direction2> for f64 {
    type Output = Vector2;

    fn mul(self, d: Direction2) -> Vector2 {
        d * self
    }
}

impl Div<f64> for Direction2 {
    type Output = Vector2;

    fn div(self, a: f64) -> Vector2 {
        Vector2::polar(1.0 / a, self.phi)
    }
}

impl Add<Direction2> for Direction2 {
    type Output = Vector2;

    fn add(self, d: Direction2) -> Vector2 {
        Vector2::new(self.x() + d.x(), self.y() + d.y())
    }
}

impl Sub<Direction2> for Direction2 {
    type Output = Vector2;

    fn sub(self, d: Direction2) -> Vector2 {
        Vector2::new(self.x() - d.x(), self.y() - d.y())
    }
}

impl Add<Vector2> for Direction2 {
    type Output = Vector2;

    fn add(self, v: Vector2) -> Vector2 {
        Vector2::new(self.x() + v.x(), self.y() + v.y())
    }
}

impl Sub<Vector2> for Direction2 {
    type Output = Vector2;

    fn sub(self, v: Vector2) -> Vector2 {
        Vector2::new(self.x() - v.x(), self.y() - v.y())
    }
}
