//! Playable-region boundary with inclusive clamping.

use glam::Vec2;

/// World boundary. Exactly one mode is active per world instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    /// Square region spanning `[-half, half]` on both axes.
    Square { half: f32 },
    /// Rectangle with independent half extents.
    Rect { half: Vec2 },
}

impl Bounds {
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Bounds::Square { half } => Vec2::splat(half),
            Bounds::Rect { half } => half,
        }
    }

    /// Inclusive containment of a circle's full footprint.
    #[inline]
    pub fn contains_circle(&self, p: Vec2, radius: f32) -> bool {
        let lim = self.half_extents() - Vec2::splat(radius);
        p.x.abs() <= lim.x && p.y.abs() <= lim.y
    }

    /// Clamp a circle center so the circle stays inside the region.
    /// Returns the clamped center and whether any clamping occurred.
    /// A region smaller than the circle pins the center to the middle.
    #[inline]
    pub fn clamp_circle(&self, p: Vec2, radius: f32) -> (Vec2, bool) {
        let lim = (self.half_extents() - Vec2::splat(radius)).max(Vec2::ZERO);
        let clamped = p.clamp(-lim, lim);
        (clamped, clamped != p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn square_clamp_and_containment() {
        let b = Bounds::Square { half: 100.0 };
        assert!(b.contains_circle(vec2(80.0, -80.0), 20.0));
        assert!(!b.contains_circle(vec2(81.0, 0.0), 20.0));

        let (p, hit) = b.clamp_circle(vec2(150.0, -150.0), 20.0);
        assert!(hit);
        assert_eq!(p, vec2(80.0, -80.0));

        let (p, hit) = b.clamp_circle(vec2(10.0, 10.0), 20.0);
        assert!(!hit);
        assert_eq!(p, vec2(10.0, 10.0));
    }

    #[test]
    fn rect_clamps_each_axis_independently() {
        let b = Bounds::Rect {
            half: vec2(200.0, 50.0),
        };
        let (p, hit) = b.clamp_circle(vec2(0.0, 90.0), 10.0);
        assert!(hit);
        assert_eq!(p, vec2(0.0, 40.0));
    }

    #[test]
    fn degenerate_region_pins_to_center() {
        let b = Bounds::Square { half: 5.0 };
        let (p, hit) = b.clamp_circle(vec2(30.0, 0.0), 10.0);
        assert!(hit);
        assert_eq!(p, vec2(0.0, 0.0));
    }
}
