//! # Lorentz Vectors
//!
//! Four-vectors `(t, x, y, z)` under the metric `diag(+1, -1, -1, -1)`,
//! with the relativistic invariants and the boost into the rest frame
//! defined by a four-momentum.
//!
//! The invariant follows a signed-root convention: a spacelike vector has a
//! negative `invariant2` and reports `invariant = -sqrt(|invariant2|)`,
//! which lets off-shell intermediate states carry a negative "mass".
//!
//! ```rust
//! use detgeom::lorentz::LorentzVector;
//!
//! let p = LorentzVector::new(5.0, 3.0, 0.0, 0.0);
//! assert_eq!(p.invariant2(), 16.0);
//! assert_eq!(p.invariant(), 4.0);
//! assert_eq!(p.beta(), 0.6);
//!
//! // boosting into its own rest frame leaves only the mass
//! let rest = p.boost_by(&p);
//! assert!((rest.t() - 4.0).abs() < 1e-12);
//! assert!(rest.p() < 1e-12);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use nalgebra::{Matrix4, Vector4};

use crate::coordinates::{Components3, Vector3};
use crate::rotation::Rotation3;

/// Part of a [`LorentzVector`] held fixed when its invariant is changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeepConstant {
    /// Keep the spatial vector, adjust `t`
    #[default]
    Spatial,
    /// Keep `t`, adjust the length of the spatial vector
    Temporal,
}

/// Four-vector with a temporal component and a spatial [`Vector3`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LorentzVector {
    t: f64,
    v: Vector3,
}

impl LorentzVector {
    pub fn new(t: f64, x: f64, y: f64, z: f64) -> Self {
        Self::from_parts(t, Vector3::new(x, y, z))
    }

    pub fn from_parts(t: f64, v: Vector3) -> Self {
        LorentzVector { t, v }
    }

    /// Components as `[t, x, y, z]`
    pub fn vector(&self) -> Vector4<f64> {
        Vector4::new(self.t, self.v.x(), self.v.y(), self.v.z())
    }

    pub fn t(&self) -> f64 {
        self.t
    }

    /// Energy, an alias of `t`
    pub fn e(&self) -> f64 {
        self.t
    }

    pub fn x(&self) -> f64 {
        self.v.x()
    }

    pub fn y(&self) -> f64 {
        self.v.y()
    }

    pub fn z(&self) -> f64 {
        self.v.z()
    }

    /// Spatial part
    pub fn v(&self) -> Vector3 {
        self.v
    }

    pub fn rho(&self) -> f64 {
        self.v.rho()
    }

    pub fn phi(&self) -> f64 {
        self.v.phi()
    }

    pub fn theta(&self) -> f64 {
        self.v.theta()
    }

    pub fn cosphi(&self) -> f64 {
        self.v.cosphi()
    }

    pub fn costheta(&self) -> f64 {
        self.v.costheta()
    }

    /// Momentum magnitude `|v|`
    pub fn p(&self) -> f64 {
        self.v.r()
    }

    pub fn p2(&self) -> f64 {
        self.v.r2()
    }

    /// `t² − |v|²`
    pub fn invariant2(&self) -> f64 {
        self.t * self.t - self.v.r2()
    }

    /// Signed root of [`invariant2`](Self::invariant2)
    pub fn invariant(&self) -> f64 {
        let inv2 = self.invariant2();
        if inv2 < 0.0 {
            -inv2.abs().sqrt()
        } else {
            inv2.sqrt()
        }
    }

    /// Mass, an alias of [`invariant`](Self::invariant)
    pub fn m(&self) -> f64 {
        self.invariant()
    }

    pub fn m2(&self) -> f64 {
        self.invariant2()
    }

    /// `|v| / t`
    pub fn beta(&self) -> f64 {
        self.v.r() / self.t
    }

    /// `v / t`, in rectangular form
    pub fn beta_vector(&self) -> Vector3 {
        Vector3::new(self.v.x() / self.t, self.v.y() / self.t, self.v.z() / self.t)
    }

    /// `1 / sqrt(1 − β²)`
    pub fn gamma(&self) -> f64 {
        let beta = self.beta();
        1.0 / (1.0 - beta * beta).sqrt()
    }

    /// Boost matrix into the rest frame of this four-momentum
    ///
    /// Symmetric, with `γ` in the corner, `−γβᵢ` along the first row and
    /// column, and the spatial block `I + ((γ − 1)/β²) β βᵀ`. A vector at
    /// rest yields the identity.
    pub fn lorentz_boost(&self) -> Matrix4<f64> {
        let gamma = self.gamma();
        let beta2 = self.beta() * self.beta();
        let b = nalgebra::Vector3::from(self.beta_vector());

        let mut boost = Matrix4::identity();
        boost[(0, 0)] = gamma;
        for i in 0..3 {
            boost[(0, i + 1)] = -gamma * b[i];
            boost[(i + 1, 0)] = -gamma * b[i];
        }
        if beta2 > 0.0 {
            let a = (gamma - 1.0) / beta2;
            let outer = b * b.transpose();
            for i in 0..3 {
                for j in 0..3 {
                    boost[(i + 1, j + 1)] += a * outer[(i, j)];
                }
            }
        }
        boost
    }

    /// This vector transformed by `boost`
    pub fn boost(&self, boost: &Matrix4<f64>) -> LorentzVector {
        LorentzVector::from(boost * self.vector())
    }

    /// This vector seen from the rest frame of `rest_frame_momentum`
    pub fn boost_by(&self, rest_frame_momentum: &LorentzVector) -> LorentzVector {
        self.boost(&rest_frame_momentum.lorentz_boost())
    }

    pub fn set_t(&mut self, t: f64) -> &mut Self {
        self.t = t;
        self
    }

    pub fn set_v(&mut self, v: Vector3) -> &mut Self {
        self.v = v;
        self
    }

    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.v.set_x(x);
        self
    }

    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.v.set_y(y);
        self
    }

    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.v.set_z(z);
        self
    }

    /// Changes `invariant2` to `inv2`, holding one part fixed
    ///
    /// With [`KeepConstant::Temporal`] the spatial vector is rescaled along its
    /// direction; a negative squared length is applied as a negative radius,
    /// which turns the spatial vector around. With [`KeepConstant::Spatial`]
    /// `t` takes the signed root of `inv2 + |v|²`.
    pub fn set_invariant2(&mut self, inv2: f64, keep: KeepConstant) -> &mut Self {
        match keep {
            KeepConstant::Temporal => {
                let l2 = self.t * self.t - inv2;
                self.v.set_r(signed_sqrt(l2));
            }
            KeepConstant::Spatial => {
                let t2 = inv2 + self.v.r2();
                self.t = signed_sqrt(t2);
            }
        }
        self
    }

    /// Changes `invariant` to `inv`, holding one part fixed
    pub fn set_invariant(&mut self, inv: f64, keep: KeepConstant) -> &mut Self {
        let inv2 = if inv < 0.0 { -(inv * inv) } else { inv * inv };
        self.set_invariant2(inv2, keep)
    }

    /// Rotates the spatial part
    pub fn rotate(&mut self, rotation: &Rotation3) -> &mut Self {
        self.v.rotate(rotation);
        self
    }

    /// Rotates the spatial part by z-x-z Euler angles
    pub fn rotate_euler(&mut self, alpha: f64, beta: f64, gamma: f64) -> &mut Self {
        self.rotate(&Rotation3::new(alpha, beta, gamma))
    }
}

fn signed_sqrt(value: f64) -> f64 {
    if value < 0.0 {
        -value.abs().sqrt()
    } else {
        value.sqrt()
    }
}

impl Components3 for LorentzVector {
    fn x(&self) -> f64 {
        self.v.x()
    }
    fn y(&self) -> f64 {
        self.v.y()
    }
    fn z(&self) -> f64 {
        self.v.z()
    }
}

impl From<Vector4<f64>> for LorentzVector {
    fn from(v: Vector4<f64>) -> Self {
        LorentzVector::new(v[0], v[1], v[2], v[3])
    }
}

impl From<[f64; 4]> for LorentzVector {
    fn from(v: [f64; 4]) -> Self {
        LorentzVector::new(v[0], v[1], v[2], v[3])
    }
}

impl Mul<&Matrix4<f64>> for LorentzVector {
    type Output = LorentzVector;

    fn mul(self, boost: &Matrix4<f64>) -> LorentzVector {
        self.boost(boost)
    }
}

impl AddAssign for LorentzVector {
    fn add_assign(&mut self, other: LorentzVector) {
        self.t += other.t;
        self.v += other.v;
    }
}

impl SubAssign for LorentzVector {
    fn sub_assign(&mut self, other: LorentzVector) {
        self.t -= other.t;
        self.v -= other.v;
    }
}

impl Add for LorentzVector {
    type Output = LorentzVector;

    fn add(mut self, other: LorentzVector) -> LorentzVector {
        self += other;
        self
    }
}

impl Sub for LorentzVector {
    type Output = LorentzVector;

    fn sub(mut self, other: LorentzVector) -> LorentzVector {
        self -= other;
        self
    }
}

impl fmt::Display for LorentzVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::coordinates::write_tuple(f, '(', ')', &[self.t, self.x(), self.y(), self.z()])
    }
}
