//! Line segments: a line plus a signed length along its direction.
//!
//! The segment/line and segment/segment distance, intersection and
//! projection queries are not provided and return
//! [`GeometryError::NotImplemented`](crate::GeometryError::NotImplemented).

use std::fmt;

use super::write_braced;
use super::{Line2, Line3};
use crate::coordinates::{Components2, Components3, Direction2, Direction3, Vector2, Vector3};
use crate::{not_implemented, Result};

/// Segment of a planar line starting at `point`
#[derive(Debug, Clone, Copy)]
pub struct LineSegment2 {
    line: Line2,
    length: f64,
}

impl LineSegment2 {
    pub fn new(point: Vector2, direction: Direction2, length: f64) -> Self {
        Self::from_line(Line2::new(point, direction), length)
    }

    pub fn from_line(line: Line2, length: f64) -> Self {
        LineSegment2 { line, length }
    }

    /// Segment running from `begin` to `end`
    pub fn from_endpoints(begin: Vector2, end: Vector2) -> Self {
        let span = end - begin;
        Self::new(begin, Direction2::from(span), span.r())
    }

    pub fn line(&self) -> Line2 {
        self.line
    }

    pub fn point(&self) -> Vector2 {
        self.line.point()
    }

    pub fn direction(&self) -> Direction2 {
        self.line.direction()
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) -> &mut Self {
        self.length = length;
        self
    }

    pub fn set_point(&mut self, point: Vector2) -> &mut Self {
        self.line.set_point(point);
        self
    }

    pub fn set_direction(&mut self, direction: Direction2) -> &mut Self {
        self.line.set_direction(direction);
        self
    }

    pub fn begin_point(&self) -> Vector2 {
        self.point()
    }

    pub fn mid_point(&self) -> Vector2 {
        self.point() + self.direction() * (0.5 * self.length)
    }

    pub fn end_point(&self) -> Vector2 {
        self.point() + self.direction() * self.length
    }

    pub fn angle(&self, l: &Line2) -> f64 {
        self.line.angle(l)
    }

    pub fn is_parallel(&self, l: &Line2) -> bool {
        self.line.is_parallel(l)
    }

    pub fn angle_segment(&self, s: &LineSegment2) -> f64 {
        self.line.angle(&s.line)
    }

    pub fn is_parallel_segment(&self, s: &LineSegment2) -> bool {
        self.line.is_parallel(&s.line)
    }

    pub fn angle_vector(&self, v: &impl Components2) -> f64 {
        self.line.angle_vector(v)
    }

    pub fn is_parallel_vector(&self, v: &impl Components2) -> bool {
        self.line.is_parallel_vector(v)
    }

    /// Distance from `v` to the supporting line
    pub fn doca_point(&self, v: &impl Components2) -> f64 {
        self.line.doca(v)
    }

    /// Foot of the perpendicular from `v` on the supporting line
    pub fn projection_point(&self, v: &impl Components2) -> Vector2 {
        self.line.projection(v)
    }

    pub fn intersects(&self, _l: &Line2) -> Result<bool> {
        not_implemented("LineSegment2::intersects")
    }

    pub fn intersects_segment(&self, _s: &LineSegment2) -> Result<bool> {
        not_implemented("LineSegment2::intersects_segment")
    }

    pub fn doca(&self, _l: &Line2) -> Result<f64> {
        not_implemented("LineSegment2::doca")
    }

    pub fn doca_segment(&self, _s: &LineSegment2) -> Result<f64> {
        not_implemented("LineSegment2::doca_segment")
    }

    pub fn projection(&self, _l: &Line2) -> Result<LineSegment2> {
        not_implemented("LineSegment2::projection")
    }

    pub fn projection_segment(&self, _s: &LineSegment2) -> Result<LineSegment2> {
        not_implemented("LineSegment2::projection_segment")
    }
}

impl From<LineSegment2> for Line2 {
    fn from(s: LineSegment2) -> Self {
        s.line
    }
}

impl fmt::Display for LineSegment2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (point, direction) = (self.point(), self.direction());
        write_braced(f, "segment", &[&point, &direction, &self.length])
    }
}

/// Segment of a spatial line starting at `point`
#[derive(Debug, Clone, Copy)]
pub struct LineSegment3 {
    line: Line3,
    length: f64,
}

impl LineSegment3 {
    pub fn new(point: Vector3, direction: Direction3, length: f64) -> Self {
        Self::from_line(Line3::new(point, direction), length)
    }

    pub fn from_line(line: Line3, length: f64) -> Self {
        LineSegment3 { line, length }
    }

    /// Segment running from `begin` to `end`
    pub fn from_endpoints(begin: Vector3, end: Vector3) -> Self {
        let span = end - begin;
        Self::new(begin, Direction3::from(span), span.r())
    }

    pub fn line(&self) -> Line3 {
        self.line
    }

    pub fn point(&self) -> Vector3 {
        self.line.point()
    }

    pub fn direction(&self) -> Direction3 {
        self.line.direction()
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn set_length(&mut self, length: f64) -> &mut Self {
        self.length = length;
        self
    }

    pub fn set_point(&mut self, point: Vector3) -> &mut Self {
        self.line.set_point(point);
        self
    }

    pub fn set_direction(&mut self, direction: Direction3) -> &mut Self {
        self.line.set_direction(direction);
        self
    }

    pub fn begin_point(&self) -> Vector3 {
        self.point()
    }

    pub fn mid_point(&self) -> Vector3 {
        self.point() + self.direction() * (0.5 * self.length)
    }

    pub fn end_point(&self) -> Vector3 {
        self.point() + self.direction() * self.length
    }

    pub fn angle(&self, l: &Line3) -> f64 {
        self.line.angle(l)
    }

    pub fn is_parallel(&self, l: &Line3) -> bool {
        self.line.is_parallel(l)
    }

    pub fn angle_segment(&self, s: &LineSegment3) -> f64 {
        self.line.angle(&s.line)
    }

    pub fn is_parallel_segment(&self, s: &LineSegment3) -> bool {
        self.line.is_parallel(&s.line)
    }

    pub fn angle_vector(&self, v: &impl Components3) -> f64 {
        self.line.angle_vector(v)
    }

    pub fn is_parallel_vector(&self, v: &impl Components3) -> bool {
        self.line.is_parallel_vector(v)
    }

    /// Distance from `v` to the supporting line
    pub fn doca_point(&self, v: &impl Components3) -> f64 {
        self.line.doca(v)
    }

    pub fn intersects(&self, _l: &Line3) -> Result<bool> {
        not_implemented("LineSegment3::intersects")
    }

    pub fn intersects_segment(&self, _s: &LineSegment3) -> Result<bool> {
        not_implemented("LineSegment3::intersects_segment")
    }

    pub fn doca(&self, _l: &Line3) -> Result<f64> {
        not_implemented("LineSegment3::doca")
    }

    pub fn doca_segment(&self, _s: &LineSegment3) -> Result<f64> {
        not_implemented("LineSegment3::doca_segment")
    }

    pub fn projection(&self, _l: &Line3) -> Result<LineSegment3> {
        not_implemented("LineSegment3::projection")
    }

    pub fn projection_segment(&self, _s: &LineSegment3) -> Result<LineSegment3> {
        not_implemented("LineSegment3::projection_segment")
    }
}

impl From<LineSegment3> for Line3 {
    fn from(s: LineSegment3) -> Self {
        s.line
    }
}

impl fmt::Display for LineSegment3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (point, direction) = (self.point(), self.direction());
        write_braced(f, "segment", &[&point, &direction, &self.length])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryError;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_segment2_points() {
        let s = LineSegment2::new(Vector2::new(1.0, 1.0), Direction2::new(FRAC_PI_2), 4.0);
        let mid = s.mid_point();
        let end = s.end_point();
        assert_relative_eq!(mid.x(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(mid.y(), 3.0, epsilon = 1e-15);
        assert_relative_eq!(end.y(), 5.0, epsilon = 1e-15);
        assert_eq!(s.begin_point().y(), 1.0);
    }

    #[test]
    fn test_negative_length_runs_backwards() {
        let s = LineSegment3::new(Vector3::zero(), Direction3::default(), -2.0);
        assert_relative_eq!(s.end_point().z(), -2.0, epsilon = 1e-15);
        assert_relative_eq!(s.mid_point().z(), -1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_from_endpoints() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 6.0, 3.0);
        let s = LineSegment3::from_endpoints(a, b);
        assert_relative_eq!(s.length(), 5.0, epsilon = 1e-15);
        let end = s.end_point();
        assert_relative_eq!(end.x(), 4.0, epsilon = 1e-14);
        assert_relative_eq!(end.y(), 6.0, epsilon = 1e-14);
        assert_relative_eq!(end.z(), 3.0, epsilon = 1e-14);

        let flat = LineSegment2::from_endpoints(Vector2::new(0.0, 0.0), Vector2::new(-3.0, 0.0));
        assert_eq!(flat.length(), 3.0);
        assert_relative_eq!(flat.end_point().x(), -3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_set_length_chains() {
        let mut s = LineSegment2::from_line(Line2::default(), 1.0);
        s.set_length(2.0).set_point(Vector2::new(0.0, 1.0));
        assert_relative_eq!(s.end_point().x(), 2.0, epsilon = 1e-15);
        assert_relative_eq!(s.end_point().y(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_unimplemented_queries() {
        let s = LineSegment3::new(Vector3::zero(), Direction3::default(), 1.0);
        let l = Line3::default();
        assert!(matches!(s.intersects(&l), Err(GeometryError::NotImplemented(_))));
        assert!(matches!(s.doca_segment(&s), Err(GeometryError::NotImplemented(_))));
        assert!(matches!(s.projection(&l), Err(GeometryError::NotImplemented(_))));

        let s2 = LineSegment2::from_line(Line2::default(), 1.0);
        let err = s2.doca(&Line2::default()).unwrap_err();
        assert_eq!(err.to_string(), "LineSegment2::doca is not implemented");
    }

    #[test]
    fn test_parallel_to_line() {
        let s = LineSegment3::new(Vector3::new(1.0, 1.0, 1.0), Direction3::default(), 3.0);
        assert!(s.is_parallel(&Line3::default()));
        assert_eq!(s.angle(&Line3::default()), 0.0);
    }

    #[test]
    fn test_queries_against_supporting_line() {
        let s = LineSegment2::new(Vector2::new(0.0, 1.0), Direction2::new(0.0), 2.0);
        assert_relative_eq!(s.doca_point(&Vector2::new(7.0, 4.0)), 3.0, epsilon = 1e-14);
        let foot = s.projection_point(&Vector2::new(7.0, 4.0));
        assert_relative_eq!(foot.x(), 7.0, epsilon = 1e-14);
        assert_relative_eq!(foot.y(), 1.0, epsilon = 1e-14);
        assert!(s.is_parallel_vector(&Vector2::new(-3.0, 0.0)));
        assert_relative_eq!(s.angle_vector(&Vector2::new(0.0, 2.0)), FRAC_PI_2, epsilon = 1e-14);

        let up = LineSegment3::new(Vector3::zero(), Direction3::default(), 1.0);
        let down = LineSegment3::new(Vector3::new(1.0, 0.0, 5.0), -Direction3::default(), 4.0);
        assert!(up.is_parallel_segment(&down));
        assert_eq!(up.angle_segment(&down), std::f64::consts::PI);
        assert_relative_eq!(up.doca_point(&Vector3::new(0.0, 2.0, 9.0)), 2.0, epsilon = 1e-14);
        assert!(!up.is_parallel_vector(&Vector3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_display() {
        let s = LineSegment2::from_line(Line2::default(), 2.5);
        assert_eq!(s.to_string(), "segment{(0, 0), [0](1, 0), 2.5}");
    }
}
