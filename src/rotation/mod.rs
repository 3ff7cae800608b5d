//! # Rotations
//!
//! [`Rotation2`] is a counter-clockwise rotation in the plane, from the x
//! axis toward the y axis. [`Rotation3`] is an arbitrary spatial rotation
//! built from three Euler angles. Both keep the generating angles alongside
//! the materialised matrix and rebuild the matrix whenever the angles change.
//!
//! Arithmetic on a [`Rotation2`] acts on its angle:
//!
//! ```rust
//! use detgeom::rotation::Rotation2;
//! use std::f64::consts::FRAC_PI_4;
//!
//! let quarter = Rotation2::new(FRAC_PI_4) * 2.0;
//! let m = quarter.matrix();
//! assert!(m[(0, 0)].abs() < 1e-15);
//! assert!((m[(1, 0)] - 1.0).abs() < 1e-15);
//! ```

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{Matrix2, Matrix3};

use crate::coordinates::{Components2, Components3, Vector2, Vector3};

/// Rotation by `angle` radians in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation2 {
    angle: f64,
    matrix: Matrix2<f64>,
}

impl Rotation2 {
    pub fn new(angle: f64) -> Self {
        let mut rotation = Rotation2 {
            angle,
            matrix: Matrix2::identity(),
        };
        rotation.set_angle(angle);
        rotation
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn matrix(&self) -> Matrix2<f64> {
        self.matrix
    }

    pub fn set_angle(&mut self, angle: f64) -> &mut Self {
        let (s, c) = angle.sin_cos();
        self.angle = angle;
        self.matrix = Matrix2::new(c, -s, s, c);
        self
    }

    /// Rotated copy of `v` in rectangular form
    pub fn apply(&self, v: &impl Components2) -> Vector2 {
        let r = self.matrix * nalgebra::Vector2::new(v.x(), v.y());
        Vector2::new(r[0], r[1])
    }
}

impl Default for Rotation2 {
    fn default() -> Self {
        Rotation2::new(0.0)
    }
}

impl Neg for Rotation2 {
    type Output = Rotation2;

    fn neg(self) -> Rotation2 {
        Rotation2::new(-self.angle)
    }
}

// Every operator combines angles and rebuilds the matrix
macro_rules! impl_angle_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $sym:tt) => {
        impl $assign_op<f64> for Rotation2 {
            fn $assign_method(&mut self, a: f64) {
                let angle = self.angle $sym a;
                self.set_angle(angle);
            }
        }

        impl $assign_op<Rotation2> for Rotation2 {
            fn $assign_method(&mut self, r: Rotation2) {
                let angle = self.angle $sym r.angle;
                self.set_angle(angle);
            }
        }

        impl $op<f64> for Rotation2 {
            type Output = Rotation2;

            fn $method(self, a: f64) -> Rotation2 {
                Rotation2::new(self.angle $sym a)
            }
        }

        impl $op<Rotation2> for Rotation2 {
            type Output = Rotation2;

            fn $method(self, r: Rotation2) -> Rotation2 {
                Rotation2::new(self.angle $sym r.angle)
            }
        }

        impl $op<Rotation2> for f64 {
            type Output = Rotation2;

            fn $method(self, r: Rotation2) -> Rotation2 {
                Rotation2::new(self $sym r.angle)
            }
        }
    };
}

impl_angle_op!(Add, add, AddAssign, add_assign, +);
impl_angle_op!(Sub, sub, SubAssign, sub_assign, -);
impl_angle_op!(Mul, mul, MulAssign, mul_assign, *);
impl_angle_op!(Div, div, DivAssign, div_assign, /);

/// Axis order of the three Euler rotations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EulerSequence {
    /// About z, then the new x, then the new z
    #[default]
    Zxz,
    /// About z, then the new y, then the new z
    Zyz,
}

/// Spatial rotation from Euler angles `(alpha, beta, gamma)`
///
/// The matrix is `R3(gamma) · R2(beta) · R1(alpha)`, where `R1` and `R3`
/// rotate about z and `R2` rotates about x or y depending on the
/// [`EulerSequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation3 {
    euler_angles: nalgebra::Vector3<f64>,
    sequence: EulerSequence,
    matrix: Matrix3<f64>,
}

impl Rotation3 {
    /// Rotation in the z-x-z sequence
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self::with_sequence(alpha, beta, gamma, EulerSequence::Zxz)
    }

    pub fn with_sequence(alpha: f64, beta: f64, gamma: f64, sequence: EulerSequence) -> Self {
        let mut rotation = Rotation3 {
            euler_angles: nalgebra::Vector3::zeros(),
            sequence,
            matrix: Matrix3::identity(),
        };
        rotation.set_euler_angles(alpha, beta, gamma, sequence);
        rotation
    }

    pub fn euler_angles(&self) -> nalgebra::Vector3<f64> {
        self.euler_angles
    }

    pub fn sequence(&self) -> EulerSequence {
        self.sequence
    }

    pub fn matrix(&self) -> Matrix3<f64> {
        self.matrix
    }

    pub fn set_euler_angles(
        &mut self,
        alpha: f64,
        beta: f64,
        gamma: f64,
        sequence: EulerSequence,
    ) -> &mut Self {
        let (sa, ca) = alpha.sin_cos();
        let (sb, cb) = beta.sin_cos();
        let (sg, cg) = gamma.sin_cos();

        #[rustfmt::skip]
        let r1 = Matrix3::new(
            ca, -sa, 0.0,
            sa,  ca, 0.0,
            0.0, 0.0, 1.0,
        );
        #[rustfmt::skip]
        let r2 = match sequence {
            EulerSequence::Zxz => Matrix3::new(
                1.0, 0.0, 0.0,
                0.0,  cb, -sb,
                0.0,  sb,  cb,
            ),
            EulerSequence::Zyz => Matrix3::new(
                 cb, 0.0,  sb,
                0.0, 1.0, 0.0,
                -sb, 0.0,  cb,
            ),
        };
        #[rustfmt::skip]
        let r3 = Matrix3::new(
            cg, -sg, 0.0,
            sg,  cg, 0.0,
            0.0, 0.0, 1.0,
        );

        self.euler_angles = nalgebra::Vector3::new(alpha, beta, gamma);
        self.sequence = sequence;
        self.matrix = r3 * (r2 * r1);
        self
    }

    /// Rotated copy of `v` in rectangular form
    pub fn apply(&self, v: &impl Components3) -> Vector3 {
        let r = self.matrix * nalgebra::Vector3::new(v.x(), v.y(), v.z());
        Vector3::from(r)
    }
}

impl Default for Rotation3 {
    fn default() -> Self {
        Rotation3::new(0.0, 0.0, 0.0)
    }
}
