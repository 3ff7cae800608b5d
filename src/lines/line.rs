//! Infinite lines in two and three dimensions.

use std::fmt;

use super::write_braced;
use crate::coordinates::{Components2, Components3, Direction2, Direction3, Vector2, Vector3};
use crate::plane::Plane;
use crate::{not_implemented, GeometryError, Result};

/// Line through `point` along `direction` in the plane
#[derive(Debug, Clone, Copy)]
pub struct Line2 {
    point: Vector2,
    direction: Direction2,
}

impl Line2 {
    pub fn new(point: Vector2, direction: Direction2) -> Self {
        Line2 { point, direction }
    }

    /// Line through `(x, y)` with azimuth `phi`
    pub fn from_angle(x: f64, y: f64, phi: f64) -> Self {
        Self::new(Vector2::new(x, y), Direction2::new(phi))
    }

    /// Line through `(px, py)` along the direction of `(dx, dy)`
    pub fn from_components(px: f64, py: f64, dx: f64, dy: f64) -> Self {
        Self::new(Vector2::new(px, py), Direction2::from_components(dx, dy))
    }

    pub fn point(&self) -> Vector2 {
        self.point
    }

    pub fn direction(&self) -> Direction2 {
        self.direction
    }

    pub fn set_point(&mut self, point: Vector2) -> &mut Self {
        self.point = point;
        self
    }

    pub fn set_direction(&mut self, direction: Direction2) -> &mut Self {
        self.direction = direction;
        self
    }

    /// Angle between the two directions in [0, π]
    pub fn angle(&self, l: &Line2) -> f64 {
        self.direction.angle(&l.direction)
    }

    /// True for parallel and anti-parallel directions
    pub fn is_parallel(&self, l: &Line2) -> bool {
        self.direction.is_parallel(&l.direction) || self.direction.is_parallel(&(-l.direction))
    }

    /// Angle between the line direction and `v`
    pub fn angle_vector(&self, v: &impl Components2) -> f64 {
        self.direction.angle(v)
    }

    /// True when `v` points along the line, either way
    pub fn is_parallel_vector(&self, v: &impl Components2) -> bool {
        self.direction.is_parallel(v) || (-self.direction).is_parallel(v)
    }

    pub fn intersects(&self, l: &Line2) -> bool {
        !self.is_parallel(l)
    }

    /// Distance from `v` to the closest point of the line
    pub fn doca(&self, v: &impl Components2) -> f64 {
        let d = self.direction;
        let (cx, cy) = (self.point.x() - v.x(), self.point.y() - v.y());
        let along = d.dot_prod(&Vector2::new(cx, cy));
        Vector2::new(cx - along * d.x(), cy - along * d.y()).r()
    }

    /// Separation of two parallel lines, zero for lines that cross
    pub fn doca_line(&self, l: &Line2) -> f64 {
        if self.is_parallel(l) {
            self.doca(&l.point)
        } else {
            0.0
        }
    }

    /// Crossing point of two lines
    ///
    /// Returns [`GeometryError::ParallelLines`] when the directions are
    /// exactly parallel or anti-parallel.
    pub fn intersection(&self, l: &Line2) -> Result<Vector2> {
        let (d1, d2) = (self.direction, l.direction);
        let det = crate::coordinates::cross2(d1.x(), d1.y(), d2.x(), d2.y());
        if det == 0.0 {
            log::debug!("no intersection between {} and {}", self, l);
            return Err(GeometryError::ParallelLines(format!("{} and {}", self, l)));
        }
        let c = l.point - self.point;
        let t = crate::coordinates::cross2(c.x(), c.y(), d2.x(), d2.y()) / det;
        Ok(Vector2::new(
            t.mul_add(d1.x(), self.point.x()),
            t.mul_add(d1.y(), self.point.y()),
        ))
    }

    /// Foot of the perpendicular dropped from `v` onto the line
    pub fn projection(&self, v: &impl Components2) -> Vector2 {
        let d = self.direction;
        let offset = Vector2::new(v.x() - self.point.x(), v.y() - self.point.y());
        let t = d.dot_prod(&offset);
        Vector2::new(
            t.mul_add(d.x(), self.point.x()),
            t.mul_add(d.y(), self.point.y()),
        )
    }
}

impl Default for Line2 {
    /// The x axis
    fn default() -> Self {
        Self::new(Vector2::zero(), Direction2::default())
    }
}

impl fmt::Display for Line2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, "line", &[&self.point, &self.direction])
    }
}

/// Line through `point` along `direction` in space
#[derive(Debug, Clone, Copy)]
pub struct Line3 {
    point: Vector3,
    direction: Direction3,
}

impl Line3 {
    pub fn new(point: Vector3, direction: Direction3) -> Self {
        Line3 { point, direction }
    }

    /// Line through `(x, y, z)` along the direction `(phi, theta)`
    pub fn from_angles(x: f64, y: f64, z: f64, phi: f64, theta: f64) -> Self {
        Self::new(Vector3::new(x, y, z), Direction3::new(phi, theta))
    }

    /// Line through `(px, py, pz)` along the direction of `(dx, dy, dz)`
    pub fn from_components(px: f64, py: f64, pz: f64, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(
            Vector3::new(px, py, pz),
            Direction3::from_components(dx, dy, dz),
        )
    }

    pub fn point(&self) -> Vector3 {
        self.point
    }

    pub fn direction(&self) -> Direction3 {
        self.direction
    }

    pub fn set_point(&mut self, point: Vector3) -> &mut Self {
        self.point = point;
        self
    }

    pub fn set_direction(&mut self, direction: Direction3) -> &mut Self {
        self.direction = direction;
        self
    }

    pub fn angle(&self, l: &Line3) -> f64 {
        self.direction.angle(&l.direction)
    }

    /// True for parallel and anti-parallel directions
    pub fn is_parallel(&self, l: &Line3) -> bool {
        self.direction.is_parallel(&l.direction) || self.direction.is_parallel(&(-l.direction))
    }

    /// Angle between the line direction and `v`
    pub fn angle_vector(&self, v: &impl Components3) -> f64 {
        self.direction.angle(v)
    }

    /// True when `v` points along the line, either way
    pub fn is_parallel_vector(&self, v: &impl Components3) -> bool {
        self.direction.is_parallel(v) || (-self.direction).is_parallel(v)
    }

    pub fn intersects(&self, l: &Line3) -> bool {
        !self.is_parallel(l)
    }

    /// Distance from `v` to the closest point of the line
    pub fn doca(&self, v: &impl Components3) -> f64 {
        let d = self.direction;
        let c = Vector3::new(
            self.point.x() - v.x(),
            self.point.y() - v.y(),
            self.point.z() - v.z(),
        );
        let along = d.dot_prod(&c);
        Vector3::new(
            c.x() - along * d.x(),
            c.y() - along * d.y(),
            c.z() - along * d.z(),
        )
        .r()
    }

    /// Distance of closest approach between two lines
    ///
    /// For skew lines this is `|c · (a × b)|` with `c` joining the two
    /// reference points; `a × b` of two unit directions is normalised before
    /// use. Parallel lines report their perpendicular separation.
    pub fn doca_line(&self, l: &Line3) -> f64 {
        if self.is_parallel(l) {
            return self.doca(&l.point);
        }
        let c = l.point - self.point;
        let axb = self.direction.cross_direction(&l.direction);
        c.dot_prod(&axb).abs()
    }

    /// Point where the line meets `plane`
    ///
    /// Components are infinite or NaN when the line is parallel to the plane.
    pub fn intersection_plane(&self, plane: &Plane) -> Vector3 {
        plane.intersection(self)
    }

    /// Projection of a point onto a spatial line is not provided here; see
    /// [`crate::plane::projection`] for the plane-based construction.
    pub fn projection(&self, _v: &impl Components3) -> Result<Vector3> {
        not_implemented("Line3::projection")
    }
}

impl Default for Line3 {
    /// The z axis
    fn default() -> Self {
        Self::new(Vector3::zero(), Direction3::default())
    }
}

impl fmt::Display for Line3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, "line", &[&self.point, &self.direction])
    }
}
