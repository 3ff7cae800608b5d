//! Angle canonicalisation and the angle predicates shared by vectors and
//! directions.

use super::{precision, Components2, Components3};
use crate::constants::{
    ANGLE_TOLERANCE_2D, ANGLE_TOLERANCE_3D, PI, RADIUS_TOLERANCE, TWO_PI,
};

/// Wraps an azimuth into (-π, π]
pub(crate) fn wrap_phi(phi: f64) -> f64 {
    // `%` keeps the sign of the dividend, like C `fmod`
    let phi = phi % TWO_PI;
    if phi > PI {
        phi - TWO_PI
    } else if phi <= -PI {
        phi + TWO_PI
    } else {
        phi
    }
}

/// Replaces values closer to zero than `tol` with exact zero
pub(crate) fn snap(value: f64, tol: f64) -> f64 {
    if value.abs() < tol {
        0.0
    } else {
        value
    }
}

/// Folds a polar angle into [0, π]
///
/// A fold across either pole moves the point to the opposite azimuth, so
/// `phi` is rotated by π whenever `theta` is reflected.
pub(crate) fn fold_theta(phi: f64, theta: f64) -> (f64, f64) {
    let mut theta = theta % TWO_PI;
    if theta < 0.0 {
        theta += TWO_PI;
    }
    if theta > PI {
        (phi + PI, TWO_PI - theta)
    } else {
        (phi, theta)
    }
}

/// Canonical two-dimensional azimuth
pub(crate) fn canonical_phi_2d(phi: f64) -> f64 {
    snap(wrap_phi(phi), ANGLE_TOLERANCE_2D)
}

/// Canonical three-dimensional `(phi, theta)` pair
pub(crate) fn canonical_angles_3d(phi: f64, theta: f64) -> (f64, f64) {
    let (phi, theta) = fold_theta(phi, theta);
    // no azimuth on either pole
    if theta < ANGLE_TOLERANCE_3D {
        return (0.0, 0.0);
    }
    if PI - theta < ANGLE_TOLERANCE_3D {
        return (0.0, PI);
    }
    (snap(wrap_phi(phi), ANGLE_TOLERANCE_3D), theta)
}

/// Canonical polar storage `(r, phi)`
pub(crate) fn canonical_polar(r: f64, phi: f64) -> (f64, f64) {
    let canonical = if r.abs() < RADIUS_TOLERANCE {
        (0.0, 0.0)
    } else if r < 0.0 {
        (-r, canonical_phi_2d(phi + PI))
    } else {
        (r, canonical_phi_2d(phi))
    };
    log::trace!("polar ({}, {}) -> ({}, {})", r, phi, canonical.0, canonical.1);
    canonical
}

/// Canonical spherical storage `(r, phi, theta)`
pub(crate) fn canonical_spherical(r: f64, phi: f64, theta: f64) -> (f64, f64, f64) {
    let canonical = if r.abs() < RADIUS_TOLERANCE {
        (0.0, 0.0, 0.0)
    } else if r < 0.0 {
        let (phi, theta) = canonical_angles_3d(phi + PI, PI - theta);
        (-r, phi, theta)
    } else {
        let (phi, theta) = canonical_angles_3d(phi, theta);
        (r, phi, theta)
    };
    log::trace!(
        "spherical ({}, {}, {}) -> ({}, {}, {})",
        r,
        phi,
        theta,
        canonical.0,
        canonical.1,
        canonical.2
    );
    canonical
}

/// Unsigned azimuth difference folded into [0, π]
pub(crate) fn azimuth_difference(a: f64, b: f64) -> f64 {
    let dphi = (a - b).abs();
    if dphi > PI {
        TWO_PI - dphi
    } else {
        dphi
    }
}

/// Angle between two planar vectors, taken from their azimuths
pub(crate) fn angle_2d(a: &impl Components2, b: &impl Components2) -> f64 {
    snap(azimuth_difference(b.phi(), a.phi()), ANGLE_TOLERANCE_2D)
}

/// Angle between two spatial vectors in [0, π]
///
/// Cosines within `10ε` of ±1 return exactly 0 or π; a zero-length operand
/// gives 0.
pub(crate) fn angle_3d(a: &impl Components3, b: &impl Components3) -> f64 {
    let tol = ANGLE_TOLERANCE_2D;
    let norm = (a.r2() * b.r2()).sqrt();
    if norm <= 0.0 {
        return 0.0;
    }
    let cosangle = precision::dot3(a.x(), a.y(), a.z(), b.x(), b.y(), b.z()) / norm;
    if cosangle > 1.0 - tol {
        0.0
    } else if cosangle < -(1.0 - tol) {
        PI
    } else {
        cosangle.acos()
    }
}

/// Parallelism of two planar vectors: same azimuth within `tol`
pub(crate) fn parallel_2d(a: &impl Components2, b: &impl Components2, tol: f64) -> bool {
    azimuth_difference(a.phi(), b.phi()) < tol
}

/// Parallelism of two spatial vectors: same azimuth and polar angle within `tol`
pub(crate) fn parallel_3d(a: &impl Components3, b: &impl Components3, tol: f64) -> bool {
    let (a_phi, a_theta) = canonical_angles_3d(a.phi(), a.theta());
    let (b_phi, b_theta) = canonical_angles_3d(b.phi(), b.theta());
    azimuth_difference(a_phi, b_phi) < tol && (a_theta - b_theta).abs() < tol
}
