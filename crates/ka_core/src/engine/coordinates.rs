//! Coordinate system and distance calculations
//!
//! Everything in the core works in percent coordinates: (0,0) is the top-left
//! corner of the pitch surface, (100,100) the bottom-right. The only other
//! coordinate space is the presentation layer's pixel space, bridged here by
//! [`pixel_to_percent`].

use serde::{Deserialize, Serialize};

use super::pitch_constants::{ball, field};

/// Position on the pitch in percent units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f32,
    pub y: f32,
}

impl Coordinate {
    /// Kick-off spot (50,50)
    pub const CENTER: Self = Self { x: field::CENTER_X, y: field::CENTER_Y };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position, in percent units
    pub fn distance_to(self, other: Coordinate) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle from this position toward another, in radians
    pub fn angle_to(self, other: Coordinate) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Position reached by travelling `distance` along `angle` from here
    pub fn offset(self, angle: f32, distance: f32) -> Coordinate {
        Coordinate { x: self.x + angle.cos() * distance, y: self.y + angle.sin() * distance }
    }

    /// Clamp each axis to the ball travel bounds [5,95]
    pub fn clamp_to_ball_bounds(self) -> Coordinate {
        Coordinate {
            x: self.x.clamp(ball::MIN_PCT, ball::MAX_PCT),
            y: self.y.clamp(ball::MIN_PCT, ball::MAX_PCT),
        }
    }
}

/// Bounding rectangle of the pitch surface in pixel space.
///
/// Supplied by the presentation layer together with each pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Convert a pointer event's pixel position into percent coordinates.
///
/// Performs no clamping: pointer positions near the surface edges can map
/// slightly outside [0,100], and consumers must tolerate or clamp that.
pub fn pixel_to_percent(pixel: (f32, f32), rect: &SurfaceRect) -> Coordinate {
    Coordinate {
        x: (pixel.0 - rect.left) / rect.width * 100.0,
        y: (pixel.1 - rect.top) / rect.height * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Coordinate::new(40.0, 50.0);
        let b = Coordinate::new(50.0, 50.0);
        assert_eq!(a.distance_to(b), 10.0);

        let c = Coordinate::new(43.0, 54.0);
        assert!((a.distance_to(c) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_angle_cardinal_directions() {
        let origin = Coordinate::new(50.0, 50.0);
        assert_eq!(origin.angle_to(Coordinate::new(60.0, 50.0)), 0.0);
        assert!(
            (origin.angle_to(Coordinate::new(50.0, 60.0)) - std::f32::consts::FRAC_PI_2).abs()
                < 1e-6
        );
        assert!(
            (origin.angle_to(Coordinate::new(40.0, 50.0)) - std::f32::consts::PI).abs() < 1e-6
        );
    }

    #[test]
    fn test_offset_along_x_axis() {
        let from = Coordinate::new(50.0, 50.0);
        let moved = from.offset(0.0, 15.0);
        assert_eq!(moved, Coordinate::new(65.0, 50.0));
    }

    #[test]
    fn test_clamp_to_ball_bounds() {
        let wild = Coordinate::new(-4.9, 103.0);
        let clamped = wild.clamp_to_ball_bounds();
        assert_eq!(clamped, Coordinate::new(5.0, 95.0));

        // In-bounds positions pass through unchanged
        let center = Coordinate::CENTER;
        assert_eq!(center.clamp_to_ball_bounds(), center);
    }

    #[test]
    fn test_clamp_idempotent() {
        let pos = Coordinate::new(120.0, -30.0);
        let once = pos.clamp_to_ball_bounds();
        let twice = once.clamp_to_ball_bounds();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pixel_to_percent_center() {
        let rect = SurfaceRect { left: 100.0, top: 50.0, width: 800.0, height: 600.0 };
        let pos = pixel_to_percent((500.0, 350.0), &rect);
        assert!((pos.x - 50.0).abs() < 1e-5);
        assert!((pos.y - 50.0).abs() < 1e-5);
    }

    #[test]
    fn test_pixel_to_percent_is_not_clamped() {
        // A pointer release just outside the surface maps outside [0,100]
        let rect = SurfaceRect { left: 0.0, top: 0.0, width: 400.0, height: 400.0 };
        let pos = pixel_to_percent((-8.0, 410.0), &rect);
        assert!(pos.x < 0.0);
        assert!(pos.y > 100.0);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: clamped positions always lie within the ball bounds
            #[test]
            fn prop_clamp_in_bounds(
                x in -500.0f32..500.0f32,
                y in -500.0f32..500.0f32
            ) {
                let pos = Coordinate::new(x, y).clamp_to_ball_bounds();
                prop_assert!(pos.x >= 5.0 && pos.x <= 95.0);
                prop_assert!(pos.y >= 5.0 && pos.y <= 95.0);
            }

            /// Property: clamping is idempotent
            #[test]
            fn prop_clamp_idempotent(
                x in -500.0f32..500.0f32,
                y in -500.0f32..500.0f32
            ) {
                let once = Coordinate::new(x, y).clamp_to_ball_bounds();
                let twice = once.clamp_to_ball_bounds();
                prop_assert_eq!(once, twice);
            }

            /// Property: distance is symmetric
            #[test]
            fn prop_distance_symmetric(
                ax in 0.0f32..100.0f32,
                ay in 0.0f32..100.0f32,
                bx in 0.0f32..100.0f32,
                by in 0.0f32..100.0f32
            ) {
                let a = Coordinate::new(ax, ay);
                let b = Coordinate::new(bx, by);
                prop_assert!((a.distance_to(b) - b.distance_to(a)).abs() < 1e-4);
            }
        }
    }
}
