//! # Two-Dimensional Vectors
//!
//! [`Vector2`] is a point or displacement in the plane stored either as
//! rectangular `(x, y)` or polar `(r, phi)` coordinates. Both forms are
//! available from either storage; setters recompute the stored form from the
//! requested one and re-run canonicalisation.
//!
//! Scalar arithmetic acts on the radius: `v + 1.0` lengthens `v` by one
//! along its own direction rather than offsetting each component.
//!
//! ```rust
//! use detgeom::coordinates::Vector2;
//!
//! let v = Vector2::new(3.0, 4.0);
//! assert_eq!(v.r(), 5.0);
//!
//! let longer = v + 5.0;
//! assert!((longer.x() - 6.0).abs() < 1e-12);
//! assert!((longer.y() - 8.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::angle::{self, canonical_polar};
use super::{precision, write_tuple, Components2, CoordSystem, Direction2};
use crate::constants::PARALLEL_TOLERANCE;
use crate::rotation::Rotation2;

/// Stored coordinates of a [`Vector2`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coords2 {
    /// Cartesian components
    Rectangular { x: f64, y: f64 },
    /// Radius `r >= 0` and azimuth `phi` in (-π, π]
    Polar { r: f64, phi: f64 },
}

/// Point or displacement in two dimensions
#[derive(Debug, Clone, Copy)]
pub struct Vector2 {
    coords: Coords2,
}

impl Vector2 {
    /// Creates a vector from rectangular components
    pub fn new(x: f64, y: f64) -> Self {
        Vector2 {
            coords: Coords2::Rectangular { x, y },
        }
    }

    /// Creates a vector stored in polar form
    ///
    /// A negative radius turns the vector around; a radius within
    /// `10ε` of zero gives the zero vector.
    pub fn polar(r: f64, phi: f64) -> Self {
        let (r, phi) = canonical_polar(r, phi);
        Vector2 {
            coords: Coords2::Polar { r, phi },
        }
    }

    /// The zero vector in rectangular form
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Creates a vector from raw stored coordinates, canonicalising polar input
    pub fn from_coords(coords: Coords2) -> Self {
        match coords {
            Coords2::Rectangular { x, y } => Self::new(x, y),
            Coords2::Polar { r, phi } => Self::polar(r, phi),
        }
    }

    /// The stored coordinates
    pub fn coords(&self) -> Coords2 {
        self.coords
    }

    /// The coordinate system used for storage
    pub fn system(&self) -> CoordSystem {
        match self.coords {
            Coords2::Rectangular { .. } => CoordSystem::Rectangular,
            Coords2::Polar { .. } => CoordSystem::Polar,
        }
    }

    pub fn x(&self) -> f64 {
        match self.coords {
            Coords2::Rectangular { x, .. } => x,
            Coords2::Polar { r, phi } => r * phi.cos(),
        }
    }

    pub fn y(&self) -> f64 {
        match self.coords {
            Coords2::Rectangular { y, .. } => y,
            Coords2::Polar { r, phi } => r * phi.sin(),
        }
    }

    pub fn r2(&self) -> f64 {
        match self.coords {
            Coords2::Rectangular { x, y } => x * x + y * y,
            Coords2::Polar { r, .. } => r * r,
        }
    }

    pub fn r(&self) -> f64 {
        match self.coords {
            Coords2::Rectangular { .. } => self.r2().sqrt(),
            Coords2::Polar { r, .. } => r,
        }
    }

    /// Azimuth in (-π, π]
    pub fn phi(&self) -> f64 {
        match self.coords {
            Coords2::Rectangular { x, y } => y.atan2(x),
            Coords2::Polar { phi, .. } => phi,
        }
    }

    pub fn cosphi(&self) -> f64 {
        self.phi().cos()
    }

    /// Copy of this vector stored in rectangular form
    pub fn to_rectangular(&self) -> Self {
        Self::new(self.x(), self.y())
    }

    /// Copy of this vector stored in polar form
    pub fn to_polar(&self) -> Self {
        Self::polar(self.r(), self.phi())
    }

    /// Copy of this vector stored in `system`
    ///
    /// Spherical storage does not exist in two dimensions and falls back to
    /// rectangular.
    pub fn in_system(&self, system: CoordSystem) -> Self {
        match system {
            CoordSystem::Polar => self.to_polar(),
            CoordSystem::Rectangular | CoordSystem::Spherical => self.to_rectangular(),
        }
    }

    /// Replaces the vector with rectangular components, keeping the storage form
    fn assign_rectangular(&mut self, x: f64, y: f64) -> &mut Self {
        self.coords = match self.coords {
            Coords2::Rectangular { .. } => Coords2::Rectangular { x, y },
            Coords2::Polar { .. } => Vector2::new(x, y).to_polar().coords,
        };
        self
    }

    /// Replaces the vector with polar components, keeping the storage form
    fn assign_polar(&mut self, r: f64, phi: f64) -> &mut Self {
        let canonical = Vector2::polar(r, phi);
        self.coords = match self.coords {
            Coords2::Rectangular { .. } => canonical.to_rectangular().coords,
            Coords2::Polar { .. } => canonical.coords,
        };
        self
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        let y = self.y();
        self.assign_rectangular(x, y)
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        let x = self.x();
        self.assign_rectangular(x, y)
    }

    pub fn set_r(&mut self, r: f64) -> &mut Self {
        let phi = self.phi();
        self.assign_polar(r, phi)
    }

    pub fn set_phi(&mut self, phi: f64) -> &mut Self {
        let r = self.r();
        self.assign_polar(r, phi)
    }

    /// Dot product, accumulated with fused multiply-add
    pub fn dot_prod(&self, v: &impl Components2) -> f64 {
        precision::dot2(self.x(), self.y(), v.x(), v.y())
    }

    /// Component of this vector along `v`
    ///
    /// Undefined (NaN components) when `v` has zero length.
    pub fn projection(&self, v: &impl Components2) -> Vector2 {
        let k = self.dot_prod(v) / precision::dot2(v.x(), v.y(), v.x(), v.y());
        Vector2::new(k * v.x(), k * v.y())
    }

    /// Unsigned angle to `v` in [0, π]
    pub fn angle(&self, v: &impl Components2) -> f64 {
        angle::angle_2d(self, v)
    }

    /// True when `v` points the same way within the default tolerance
    pub fn is_parallel(&self, v: &impl Components2) -> bool {
        self.is_parallel_within(v, PARALLEL_TOLERANCE)
    }

    /// True when the azimuths of this vector and `v` differ by less than `tol`
    pub fn is_parallel_within(&self, v: &impl Components2, tol: f64) -> bool {
        angle::parallel_2d(self, v, tol)
    }

    /// Rotates this vector in place, keeping the storage form
    pub fn rotate(&mut self, rotation: &Rotation2) -> &mut Self {
        let rotated = rotation.apply(&*self);
        self.assign_rectangular(rotated.x(), rotated.y())
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::zero()
    }
}

impl Components2 for Vector2 {
    fn x(&self) -> f64 {
        Vector2::x(self)
    }
    fn y(&self) -> f64 {
        Vector2::y(self)
    }
    fn r2(&self) -> f64 {
        Vector2::r2(self)
    }
    fn r(&self) -> f64 {
        Vector2::r(self)
    }
    fn phi(&self) -> f64 {
        Vector2::phi(self)
    }
}

impl From<Direction2> for Vector2 {
    fn from(d: Direction2) -> Self {
        Vector2::polar(1.0, d.phi())
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(v: [f64; 2]) -> Self {
        Vector2::new(v[0], v[1])
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_tuple(f, '(', ')', &[self.x(), self.y()])
    }
}

// Vector arithmetic: component-wise, result in rectangular form
impl Add<Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, v: Vector2) -> Vector2 {
        Vector2::new(self.x() + v.x(), self.y() + v.y())
    }
}

impl Sub<Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, v: Vector2) -> Vector2 {
        Vector2::new(self.x() - v.x(), self.y() - v.y())
    }
}

impl Add<Direction2> for Vector2 {
    type Output = Vector2;

    fn add(self, d: Direction2) -> Vector2 {
        Vector2::new(self.x() + d.x(), self.y() + d.y())
    }
}

impl Sub<Direction2> for Vector2 {
    type Output = Vector2;

    fn sub(self, d: Direction2) -> Vector2 {
        Vector2::new(self.x() - d.x(), self.y() - d.y())
    }
}

impl AddAssign<Vector2> for Vector2 {
    fn add_assign(&mut self, v: Vector2) {
        let (x, y) = (self.x() + v.x(), self.y() + v.y());
        self.assign_rectangular(x, y);
    }
}

impl SubAssign<Vector2> for Vector2 {
    fn sub_assign(&mut self, v: Vector2) {
        let (x, y) = (self.x() - v.x(), self.y() - v.y());
        self.assign_rectangular(x, y);
    }
}

// Scalar arithmetic acts on the radius
impl AddAssign<f64> for Vector2 {
    fn add_assign(&mut self, a: f64) {
        let r = self.r() + a;
        self.set_r(r);
    }
}

impl SubAssign<f64> for Vector2 {
    fn sub_assign(&mut self, a: f64) {
        let r = self.r() - a;
        self.set_r(r);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, a: f64) {
        let r = self.r() * a;
        self.set_r(r);
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, a: f64) {
        let r = self.r() / a;
        self.set_r(r);
    }
}

impl Add<f64> for Vector2 {
    type Output = Vector2;

    fn add(mut self, a: f64) -> Vector2 {
        self += a;
        self
    }
}

impl Sub<f64> for Vector2 {
    type Output = Vector2;

    fn sub(mut self, a: f64) -> Vector2 {
        self -= a;
        self
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(mut self, a: f64) -> Vector2 {
        self *= a;
        self
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(mut self, a: f64) -> Vector2 {
        self /= a;
        self
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        self * -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn test_three_four_five() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.r(), 5.0);
        assert_eq!(v.r2(), 25.0);
        assert_relative_eq!(v.phi(), 0.9272952180016122, epsilon = 1e-12);
        assert_eq!(v.system(), CoordSystem::Rectangular);
    }

    #[test]
    fn test_polar_accessors() {
        let v = Vector2::polar(2.0, PI / 2.0);
        assert_relative_eq!(v.x(), 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y(), 2.0, epsilon = 1e-15);
        assert_eq!(v.r(), 2.0);
        assert_eq!(v.system(), CoordSystem::Polar);
    }

    #[test]
    fn test_polar_canonicalisation() {
        let flipped = Vector2::polar(-1.0, 0.0);
        assert_eq!(flipped.r(), 1.0);
        assert_eq!(flipped.phi(), PI);

        let tiny = Vector2::polar(1e-17, 1.0);
        match tiny.coords() {
            Coords2::Polar { r, phi } => {
                assert_eq!(r, 0.0);
                assert_eq!(phi, 0.0);
            }
            Coords2::Rectangular { .. } => panic!("Expected polar storage"),
        }

        let wrapped = Vector2::polar(1.0, 2.5 * PI);
        assert_relative_eq!(wrapped.phi(), PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_rectangular_polar() {
        let mut rng = StdRng::seed_from_u64(20130521);
        for _ in 0..200 {
            let x = rng.gen_range(-100.0..100.0);
            let y = rng.gen_range(-100.0..100.0);
            let original = Vector2::new(x, y);
            let round_trip = original.to_polar().to_rectangular();
            assert_relative_eq!(round_trip.x(), x, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(round_trip.y(), y, epsilon = 1e-12, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_setters_keep_storage_form() {
        let mut v = Vector2::polar(1.0, 0.0);
        v.set_x(3.0).set_y(4.0);
        assert_eq!(v.system(), CoordSystem::Polar);
        assert_relative_eq!(v.r(), 5.0, epsilon = 1e-12);

        let mut w = Vector2::new(1.0, 1.0);
        w.set_r(2.0_f64.sqrt() * 2.0);
        assert_eq!(w.system(), CoordSystem::Rectangular);
        assert_relative_eq!(w.x(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(w.y(), 2.0, epsilon = 1e-12);

        w.set_phi(PI);
        assert_relative_eq!(w.x(), -2.0 * 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(w.y(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_arithmetic_scales_radius() {
        let v = Vector2::new(3.0, 4.0);

        let grown = v + 5.0;
        assert_relative_eq!(grown.r(), 10.0, epsilon = 1e-12);
        assert_relative_eq!(grown.phi(), v.phi(), epsilon = 1e-12);

        let shrunk = v - 2.5;
        assert_relative_eq!(shrunk.x(), 1.5, epsilon = 1e-12);
        assert_relative_eq!(shrunk.y(), 2.0, epsilon = 1e-12);

        let doubled = 2.0 * v;
        assert_relative_eq!(doubled.x(), 6.0, epsilon = 1e-12);

        let halved = v / 2.0;
        assert_relative_eq!(halved.y(), 2.0, epsilon = 1e-12);

        let negated = -v;
        assert_relative_eq!(negated.x(), -3.0, epsilon = 1e-12);
        assert_relative_eq!(negated.y(), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vector_arithmetic_is_rectangular() {
        let a = Vector2::polar(1.0, 0.0);
        let b = Vector2::new(0.0, 2.0);
        let sum = a + b;
        assert_eq!(sum.system(), CoordSystem::Rectangular);
        assert_relative_eq!(sum.x(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(sum.y(), 2.0, epsilon = 1e-15);

        let mut c = a;
        c -= b;
        assert_eq!(c.system(), CoordSystem::Polar);
        assert_relative_eq!(c.y(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dot_and_projection() {
        let a = Vector2::new(2.0, 3.0);
        let b = Vector2::new(4.0, 0.0);
        assert_eq!(a.dot_prod(&b), 8.0);
        assert_eq!(a.dot_prod(&b), b.dot_prod(&a));

        let p = a.projection(&b);
        assert_eq!(p.x(), 2.0);
        assert_eq!(p.y(), 0.0);
    }

    #[test]
    fn test_angle_folds_across_branch_cut() {
        let a = Vector2::polar(1.0, 3.0);
        let b = Vector2::polar(1.0, -3.0);
        assert_relative_eq!(a.angle(&b), 2.0 * PI - 6.0, epsilon = 1e-12);
        assert_eq!(a.angle(&a), 0.0);
        assert_eq!(a.angle(&b), b.angle(&a));
    }

    #[test]
    fn test_parallel_folds_azimuth_at_pi() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(5.0, 5.0);
        let c = Vector2::new(-1.0, 1.0);
        assert!(a.is_parallel(&b));
        // Azimuths more than 1 rad apart are not wrapped by 2π; only the
        // folded difference in [0, π] is compared, so these stay apart.
        assert!(!a.is_parallel(&c));
        assert!(!a.is_parallel(&(-a)));
        assert!(!a.is_parallel(&Vector2::new(1.0, -1.0)));
        // across the branch cut the folded difference is tiny
        assert!(Vector2::polar(1.0, PI).is_parallel(&Vector2::polar(1.0, -PI + 1e-16)));
        assert!(a.is_parallel_within(&Vector2::polar(1.0, PI / 4.0 + 1e-6), 1e-5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(3.0, 4.0).to_string(), "(3, 4)");
    }
}
