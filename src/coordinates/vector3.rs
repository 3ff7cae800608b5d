//! # Three-Dimensional Vectors
//!
//! [`Vector3`] stores either rectangular `(x, y, z)` or spherical
//! `(r, phi, theta)` coordinates, where `theta` is the polar angle measured
//! from +z and `rho = r·sin(theta)` is the distance from the z axis.
//!
//! ```rust
//! use detgeom::coordinates::Vector3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let v = Vector3::spherical(2.0, 0.0, FRAC_PI_2);
//! assert!((v.x() - 2.0).abs() < 1e-15);
//! assert!(v.z().abs() < 1e-15);
//! assert_eq!(v.rho(), 2.0);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::angle::{self, canonical_spherical};
use super::{precision, write_tuple, Components3, CoordSystem, Direction3, Vector2};
use crate::constants::{PARALLEL_TOLERANCE, ZERO_LENGTH};
use crate::rotation::Rotation3;

/// Stored coordinates of a [`Vector3`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coords3 {
    /// Cartesian components
    Rectangular { x: f64, y: f64, z: f64 },
    /// Radius `r >= 0`, azimuth `phi` in (-π, π], polar angle `theta` in [0, π]
    Spherical { r: f64, phi: f64, theta: f64 },
}

/// Point or displacement in three dimensions
#[derive(Debug, Clone, Copy)]
pub struct Vector3 {
    coords: Coords3,
}

impl Vector3 {
    /// Creates a vector from rectangular components
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 {
            coords: Coords3::Rectangular { x, y, z },
        }
    }

    /// Creates a vector stored in spherical form
    pub fn spherical(r: f64, phi: f64, theta: f64) -> Self {
        let (r, phi, theta) = canonical_spherical(r, phi, theta);
        Vector3 {
            coords: Coords3::Spherical { r, phi, theta },
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a vector from raw stored coordinates, canonicalising spherical input
    pub fn from_coords(coords: Coords3) -> Self {
        match coords {
            Coords3::Rectangular { x, y, z } => Self::new(x, y, z),
            Coords3::Spherical { r, phi, theta } => Self::spherical(r, phi, theta),
        }
    }

    /// Lifts a planar vector into the `z` plane, keeping rectangular form
    pub fn from_planar(v: &Vector2, z: f64) -> Self {
        Self::new(v.x(), v.y(), z)
    }

    pub fn coords(&self) -> Coords3 {
        self.coords
    }

    pub fn system(&self) -> CoordSystem {
        match self.coords {
            Coords3::Rectangular { .. } => CoordSystem::Rectangular,
            Coords3::Spherical { .. } => CoordSystem::Spherical,
        }
    }

    pub fn x(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { x, .. } => x,
            Coords3::Spherical { phi, .. } => self.rho() * phi.cos(),
        }
    }

    pub fn y(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { y, .. } => y,
            Coords3::Spherical { phi, .. } => self.rho() * phi.sin(),
        }
    }

    pub fn z(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { z, .. } => z,
            Coords3::Spherical { r, theta, .. } => r * theta.cos(),
        }
    }

    pub fn r2(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { x, y, z } => x * x + y * y + z * z,
            Coords3::Spherical { r, .. } => r * r,
        }
    }

    pub fn r(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { .. } => self.r2().sqrt(),
            Coords3::Spherical { r, .. } => r,
        }
    }

    /// Squared distance from the z axis
    pub fn rho2(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { x, y, .. } => x * x + y * y,
            Coords3::Spherical { .. } => self.rho() * self.rho(),
        }
    }

    /// Distance from the z axis
    pub fn rho(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { .. } => self.rho2().sqrt(),
            Coords3::Spherical { r, theta, .. } => r * theta.sin(),
        }
    }

    /// Azimuth in (-π, π]
    pub fn phi(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { x, y, .. } => y.atan2(x),
            Coords3::Spherical { phi, .. } => phi,
        }
    }

    pub fn cosphi(&self) -> f64 {
        self.phi().cos()
    }

    /// Cosine of the polar angle; 1 for vectors too short to have one
    pub fn costheta(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { z, .. } => {
                let r = self.r();
                if r < ZERO_LENGTH {
                    1.0
                } else {
                    (z / r).clamp(-1.0, 1.0)
                }
            }
            Coords3::Spherical { theta, .. } => theta.cos(),
        }
    }

    /// Polar angle from +z in [0, π]
    pub fn theta(&self) -> f64 {
        match self.coords {
            Coords3::Rectangular { .. } => self.costheta().acos(),
            Coords3::Spherical { theta, .. } => theta,
        }
    }

    /// Projection onto the xy plane
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    pub fn to_rectangular(&self) -> Self {
        Self::new(self.x(), self.y(), self.z())
    }

    pub fn to_spherical(&self) -> Self {
        Self::spherical(self.r(), self.phi(), self.theta())
    }

    /// Copy of this vector stored in `system`
    ///
    /// Polar storage does not exist in three dimensions and falls back to
    /// rectangular.
    pub fn in_system(&self, system: CoordSystem) -> Self {
        match system {
            CoordSystem::Spherical => self.to_spherical(),
            CoordSystem::Rectangular | CoordSystem::Polar => self.to_rectangular(),
        }
    }

    fn assign_rectangular(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.coords = match self.coords {
            Coords3::Rectangular { .. } => Coords3::Rectangular { x, y, z },
            Coords3::Spherical { .. } => Vector3::new(x, y, z).to_spherical().coords,
        };
        self
    }

    fn assign_spherical(&mut self, r: f64, phi: f64, theta: f64) -> &mut Self {
        let canonical = Vector3::spherical(r, phi, theta);
        self.coords = match self.coords {
            Coords3::Rectangular { .. } => canonical.to_rectangular().coords,
            Coords3::Spherical { .. } => canonical.coords,
        };
        self
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        let (y, z) = (self.y(), self.z());
        self.assign_rectangular(x, y, z)
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        let (x, z) = (self.x(), self.z());
        self.assign_rectangular(x, y, z)
    }

    pub fn set_z(&mut self, z: f64) -> &mut Self {
        let (x, y) = (self.x(), self.y());
        self.assign_rectangular(x, y, z)
    }

    pub fn set_r(&mut self, r: f64) -> &mut Self {
        let (phi, theta) = (self.phi(), self.theta());
        self.assign_spherical(r, phi, theta)
    }

    pub fn set_phi(&mut self, phi: f64) -> &mut Self {
        let (r, theta) = (self.r(), self.theta());
        self.assign_spherical(r, phi, theta)
    }

    pub fn set_theta(&mut self, theta: f64) -> &mut Self {
        let (r, phi) = (self.r(), self.phi());
        self.assign_spherical(r, phi, theta)
    }

    /// Dot product, accumulated with fused multiply-add
    pub fn dot_prod(&self, v: &impl Components3) -> f64 {
        precision::dot3(self.x(), self.y(), self.z(), v.x(), v.y(), v.z())
    }

    /// Cross product `self × v` in rectangular form
    pub fn cross_prod(&self, v: &impl Components3) -> Vector3 {
        let [x, y, z] = precision::cross3(
            [self.x(), self.y(), self.z()],
            [v.x(), v.y(), v.z()],
        );
        Vector3::new(x, y, z)
    }

    /// Component of this vector along `v`
    pub fn projection(&self, v: &impl Components3) -> Vector3 {
        let k = self.dot_prod(v) / precision::dot3(v.x(), v.y(), v.z(), v.x(), v.y(), v.z());
        Vector3::new(k * v.x(), k * v.y(), k * v.z())
    }

    /// Unsigned angle to `v` in [0, π]
    pub fn angle(&self, v: &impl Components3) -> f64 {
        angle::angle_3d(self, v)
    }

    pub fn is_parallel(&self, v: &impl Components3) -> bool {
        self.is_parallel_within(v, PARALLEL_TOLERANCE)
    }

    /// True when both angular coordinates agree with those of `v` within `tol`
    pub fn is_parallel_within(&self, v: &impl Components3, tol: f64) -> bool {
        angle::parallel_3d(self, v, tol)
    }

    /// Rotates this vector in place, keeping the storage form
    pub fn rotate(&mut self, rotation: &Rotation3) -> &mut Self {
        let rotated = rotation.apply(&*self);
        self.assign_rectangular(rotated.x(), rotated.y(), rotated.z())
    }

    /// Rotates this vector about the y axis by `angle`
    pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        let (x, y, z) = (self.x(), self.y(), self.z());
        self.assign_rectangular(c.mul_add(x, s * z), y, c.mul_add(z, -s * x))
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Components3 for Vector3 {
    fn x(&self) -> f64 {
        Vector3::x(self)
    }
    fn y(&self) -> f64 {
        Vector3::y(self)
    }
    fn z(&self) -> f64 {
        Vector3::z(self)
    }
    fn r2(&self) -> f64 {
        Vector3::r2(self)
    }
    fn r(&self) -> f64 {
        Vector3::r(self)
    }
    fn phi(&self) -> f64 {
        Vector3::phi(self)
    }
    fn theta(&self) -> f64 {
        Vector3::theta(self)
    }
}

impl From<Direction3> for Vector3 {
    fn from(d: Direction3) -> Self {
        Vector3::spherical(1.0, d.phi(), d.theta())
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x(), v.y(), v.z())
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, '(', ')', &[self.x(), self.y(), self.z()])
    }
}

impl Add<Vector3> for Vector3 {
    type Output = Vector3;

    fn add(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x() + v.x(), self.y() + v.y(), self.z() + v.z())
    }
}

impl Sub<Vector3> for Vector3 {
    type Output = Vector3;

    fn sub(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x() - v.x(), self.y() - v.y(), self.z() - v.z())
    }
}

impl Add<Direction3> for Vector3 {
    type Output = Vector3;

    fn add(self, d: Direction3) -> Vector3 {
        Vector3::new(self.x() + d.x(), self.y() + d.y(), self.z() + d.z())
    }
}

impl Sub<Direction3> for Vector3 {
    type Output = Vector3;

    fn sub(self, d: Direction3) -> Vector3 {
        Vector3::new(self.x() - d.x(), self.y() - d.y(), self.z() - d.z())
    }
}

impl AddAssign<Vector3> for Vector3 {
    fn add_assign(&mut self, v: Vector3) {
        let (x, y, z) = (self.x() + v.x(), self.y() + v.y(), self.z() + v.z());
        self.assign_rectangular(x, y, z);
    }
}

impl SubAssign<Vector3> for Vector3 {
    fn sub_assign(&mut self, v: Vector3) {
        let (x, y, z) = (self.x() - v.x(), self.y() - v.y(), self.z() - v.z());
        self.assign_rectangular(x, y, z);
    }
}

// Scalar arithmetic acts on the radius
impl AddAssign<f64> for Vector3 {
    fn add_assign(&mut self, a: f64) {
        let r = self.r() + a;
        self.set_r(r);
    }
}

impl SubAssign<f64> for Vector3 {
    fn sub_assign(&mut self, a: f64) {
        let r = self.r() - a;
        self.set_r(r);
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, a: f64) {
        let r = self.r() * a;
        self.set_r(r);
    }
}

impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, a: f64) {
        let r = self.r() / a;
        self.set_r(r);
    }
}

impl Add<f64> for Vector3 {
    type Output = Vector3;

    fn add(mut self, a: f64) -> Vector3 {
        self += a;
        self
    }
}

impl Sub<f64> for Vector3 {
    type Output = Vector3;

    fn sub(mut self, a: f64) -> Vector3 {
        self -= a;
        self
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(mut self, a: f64) -> Vector3 {
        self *= a;
        self
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(mut self, a: f64) -> Vector3 {
        self /= a;
        self
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        self * -1.0
    }
}
