//! Constants module for the geometry kernel
//!
//! Angle constants plus the tolerances used to canonicalise coordinates.
//! Downstream geometry builders compare positions produced by this crate,
//! so the tolerance multipliers below are part of the numerical contract.

use std::f64::consts;

// Angles
/// Half a turn in radians
pub const PI: f64 = consts::PI;
/// A full turn in radians
pub const TWO_PI: f64 = consts::TAU;
/// A quarter turn in radians
pub const HALF_PI: f64 = consts::FRAC_PI_2;

// Machine precision
/// Machine epsilon of the scalar type
pub const EPSILON: f64 = f64::EPSILON;

// Canonicalisation tolerances
/// Radii below this collapse a polar or spherical vector to exact zero
pub const RADIUS_TOLERANCE: f64 = 10.0 * EPSILON;
/// Azimuths below this snap to zero in two dimensions
pub const ANGLE_TOLERANCE_2D: f64 = 10.0 * EPSILON;
/// Azimuths and polar angles below this snap to zero in three dimensions
pub const ANGLE_TOLERANCE_3D: f64 = 100.0 * EPSILON;
/// Default tolerance of the parallelism predicates
pub const PARALLEL_TOLERANCE: f64 = 10.0 * EPSILON;
/// Vectors shorter than this have no defined polar angle (`costheta` reports 1)
pub const ZERO_LENGTH: f64 = 2.0 * EPSILON;
