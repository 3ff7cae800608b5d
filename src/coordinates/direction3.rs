//! Unit vectors in space, stored as an azimuth and a polar angle.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::angle::{self, canonical_angles_3d};
use super::{precision, write_tuple, Components3, Vector3};
use crate::constants::{PARALLEL_TOLERANCE, PI};

/// Unit vector in three dimensions
///
/// `phi` lies in (-π, π] and `theta` in [0, π]. A polar angle within `100ε`
/// of zero points along +z, where the azimuth is meaningless, so both
/// angles are stored as zero.
///
/// # Examples
///
/// ```rust
/// use detgeom::coordinates::Direction3;
///
/// let z = Direction3::from_components(0.0, 0.0, 5.0);
/// assert_eq!(z.theta(), 0.0);
/// assert_eq!(z.r(), 1.0);
///
/// let x = Direction3::from_components(1.0, 0.0, 0.0);
/// let y = z.cross_direction(&x);
/// assert!((y.y() - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction3 {
    phi: f64,
    theta: f64,
}

impl Direction3 {
    pub fn new(phi: f64, theta: f64) -> Self {
        let (phi, theta) = canonical_angles_3d(phi, theta);
        Direction3 { phi, theta }
    }

    /// Direction of the vector `(x, y, z)`; the zero vector maps to +z
    pub fn from_components(x: f64, y: f64, z: f64) -> Self {
        let r = (x * x + y * y + z * z).sqrt();
        let theta = if r > 0.0 {
            (z / r).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        Self::new(y.atan2(x), theta)
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn x(&self) -> f64 {
        self.rho() * self.phi.cos()
    }

    pub fn y(&self) -> f64 {
        self.rho() * self.phi.sin()
    }

    pub fn z(&self) -> f64 {
        self.theta.cos()
    }

    pub fn r(&self) -> f64 {
        1.0
    }

    pub fn r2(&self) -> f64 {
        1.0
    }

    /// Distance of the unit tip from the z axis
    pub fn rho(&self) -> f64 {
        self.theta.sin()
    }

    pub fn rho2(&self) -> f64 {
        self.rho() * self.rho()
    }

    pub fn cosphi(&self) -> f64 {
        self.phi.cos()
    }

    pub fn costheta(&self) -> f64 {
        self.theta.cos()
    }

    pub fn set_phi(&mut self, phi: f64) -> &mut Self {
        *self = Direction3::new(phi, self.theta);
        self
    }

    pub fn set_theta(&mut self, theta: f64) -> &mut Self {
        *self = Direction3::new(self.phi, theta);
        self
    }

    /// Sets the azimuth from its cosine, choosing `phi` in [0, π]
    ///
    /// # Panics
    ///
    /// Panics if `cosphi` lies outside [-1, 1].
    pub fn set_cosphi(&mut self, cosphi: f64) -> &mut Self {
        assert!(cosphi.abs() <= 1.0, "cosphi out of range: {}", cosphi);
        self.set_phi(cosphi.acos())
    }

    /// # Panics
    ///
    /// Panics if `costheta` lies outside [-1, 1].
    pub fn set_costheta(&mut self, costheta: f64) -> &mut Self {
        assert!(costheta.abs() <= 1.0, "costheta out of range: {}", costheta);
        self.set_theta(costheta.acos())
    }

    pub fn dot_prod(&self, v: &impl Components3) -> f64 {
        precision::dot3(self.x(), self.y(), self.z(), v.x(), v.y(), v.z())
    }

    /// Cross product `self × v` in rectangular form
    pub fn cross_prod(&self, v: &impl Components3) -> Vector3 {
        Vector3::from(*self).to_rectangular().cross_prod(v)
    }

    /// Direction of `self × d`
    ///
    /// The product of two unit vectors is only of unit length when they are
    /// orthogonal, so only its direction is kept.
    pub fn cross_direction(&self, d: &Direction3) -> Direction3 {
        let c = self.cross_prod(d);
        Direction3::from_components(c.x(), c.y(), c.z())
    }

    pub fn projection(&self, v: &impl Components3) -> Vector3 {
        Vector3::from(*self).to_rectangular().projection(v)
    }

    pub fn angle(&self, v: &impl Components3) -> f64 {
        angle::angle_3d(self, v)
    }

    pub fn is_parallel(&self, v: &impl Components3) -> bool {
        self.is_parallel_within(v, PARALLEL_TOLERANCE)
    }

    pub fn is_parallel_within(&self, v: &impl Components3, tol: f64) -> bool {
        angle::parallel_3d(self, v, tol)
    }
}

impl Default for Direction3 {
    /// Direction of the +z axis
    fn default() -> Self {
        Direction3 {
            phi: 0.0,
            theta: 0.0,
        }
    }
}

impl Components3 for Direction3 {
    fn x(&self) -> f64 {
        Direction3::x(self)
    }
    fn y(&self) -> f64 {
        Direction3::y(self)
    }
    fn z(&self) -> f64 {
        Direction3::z(self)
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
    fn theta(&self) -> f64 {
        self.theta
    }
}

impl From<Vector3> for Direction3 {
    fn from(v: Vector3) -> Self {
        Direction3::new(v.phi(), v.theta())
    }
}

impl fmt::Display for Direction3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, '[', ']', &[self.phi, self.theta])?;
        write_tuple(f, '(', ')', &[self.x(), self.y(), self.z()])
    }
}

impl Neg for Direction3 {
    type Output = Direction3;

    fn neg(self) -> Direction3 {
        Direction3::new(self.phi + PI, PI - self.theta)
    }
}

impl Mul<f64> for Direction3 {
    type Output = Vector3;

    fn mul(self, a: f64) -> Vector3 {
        Vector3::spherical(a, self.phi, self.theta)
    }
}

impl Mul<Direction3> for f64 {
    type Output = Vector3;

    fn mul(self, d: Direction3) -> Vector3 {
        d * self
    }
}

impl Div<f64> for Direction3 {
    type Output = Vector3;

    fn div(self, a: f64) -> Vector3 {
        Vector3::spherical(1.0 / a, self.phi, self.theta)
    }
}

impl Add<Direction3> for Direction3 {
    type Output = Vector3;

    fn add(self, d: Direction3) -> Vector3 {
        Vector3::new(self.x() + d.x(), self.y() + d.y(), self.z() + d.z())
    }
}

impl Sub<Direction3> for Direction3 {
    type Output = Vector3;

    fn sub(self, d: Direction3) -> Vector3 {
        Vector3::new(self.x() - d.x(), self.y() - d.y(), self.z() - d.z())
    }
}

impl Add<Vector3> for Direction3 {
    type Output = Vector3;

    fn add(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x() + v.x(), self.y() + v.y(), self.z() + v.z())
    }
}

impl Sub<Vector3> for Direction3 {
    type Output = Vector3;

    fn sub(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x() - v.x(), self.y() - v.y(), self.z() - v.z())
    }
}
