//! Straight track geometry.
//!
//! Angles are in degrees, counter-clockwise from the positive x axis. Screen y
//! grows downward, so a positive angle raises the endpoint on screen.

use raylib::prelude::Vector2;

/// Endpoint of a line starting at `origin` with the given `angle` and `length`.
pub fn endpoint(origin: Vector2, angle: f32, length: f32) -> Vector2 {
    let rad = angle.to_radians();
    Vector2 {
        x: origin.x + rad.cos() * length,
        y: origin.y - rad.sin() * length,
    }
}

/// One straight piece of track.
///
/// The endpoint is not stored; [`TrackSegment::endpoint`] derives it from the
/// current origin, angle and length every time, so it cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    pub origin: Vector2,
    /// Degrees, counter-clockwise.
    pub angle: f32,
    pub length: f32,
}

impl TrackSegment {
    pub fn new(origin: Vector2, angle: f32, length: f32) -> Self {
        TrackSegment {
            origin,
            angle,
            length,
        }
    }

    pub fn endpoint(&self) -> Vector2 {
        endpoint(self.origin, self.angle, self.length)
    }

    /// `(origin, endpoint)` pair, ready for a line draw call.
    pub fn points(&self) -> (Vector2, Vector2) {
        (self.origin, self.endpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_endpoint_horizontal() {
        let end = endpoint(Vector2 { x: 10.0, y: 20.0 }, 0.0, 100.0);
        assert!(approx_eq(end.x, 110.0));
        assert!(approx_eq(end.y, 20.0));
    }

    #[test]
    fn test_positive_angle_raises_endpoint() {
        let end = endpoint(Vector2 { x: 0.0, y: 300.0 }, 30.0, 300.0);
        assert!(approx_eq(end.x, 259.807_6));
        assert!(approx_eq(end.y, 150.0));
    }

    #[test]
    fn test_negative_angle_lowers_endpoint() {
        let end = endpoint(Vector2 { x: 0.0, y: 300.0 }, -30.0, 300.0);
        assert!(approx_eq(end.y, 450.0));
    }

    #[test]
    fn test_endpoint_is_idempotent() {
        let seg = TrackSegment::new(Vector2 { x: 800.0, y: 300.0 }, -30.0, 300.0);
        assert_eq!(seg.endpoint(), seg.endpoint());
    }

    #[test]
    fn test_endpoint_follows_mutation() {
        let mut seg = TrackSegment::new(Vector2 { x: 800.0, y: 300.0 }, 30.0, 300.0);
        let before = seg.endpoint();
        seg.origin.x -= 2.0;
        let after = seg.endpoint();
        assert!(approx_eq(after.x, before.x - 2.0));
        assert!(approx_eq(after.y, before.y));

        seg.angle = 0.0;
        let (start, end) = seg.points();
        assert!(approx_eq(end.y, start.y));
        assert!(approx_eq(end.x, start.x + 300.0));
    }
}
