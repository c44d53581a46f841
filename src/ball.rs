//! Bouncing-ball simulation.
//!
//! The simulator is deliberately tiny and fully deterministic: a position and
//! a velocity inside a fixed rectangle, advanced one step per tick with a
//! per-axis reflection at the bounds. No wall-clock reads and no randomness:
//! the trajectory is a pure function of the construction parameters and the
//! number of [`Ball::update`] calls.

use glam::Vec2;

/// Axis-aligned rectangle the ball's circle must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Create bounds from edge coordinates. Callers guarantee
    /// `right > left` and `bottom > top`.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds covering `0..width` x `0..height`.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }
}

/// A circle bouncing inside a rectangle, one step per tick.
#[derive(Debug, Clone)]
pub struct Ball {
    bounds: Bounds,
    radius: f32,
    position: Vec2,
    velocity: Vec2,
}

impl Ball {
    /// Create a ball centered in `bounds`.
    ///
    /// `speed` is in pixels per second; the per-tick displacement on each
    /// axis is `speed / ticks_per_second`, positive on both axes to start.
    /// Callers guarantee `ticks_per_second > 0` and `radius * 2 <=
    /// min(width, height)`; a larger radius does not fault but pins the
    /// ball between the two clamp targets, oscillating every tick.
    pub fn new(bounds: Bounds, radius: f32, speed: f32, ticks_per_second: u32) -> Self {
        let per_tick = speed / ticks_per_second as f32;
        Self {
            bounds,
            radius,
            position: bounds.center(),
            velocity: Vec2::new(per_tick, per_tick),
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Advance the ball by one tick.
    ///
    /// Each axis is stepped independently: move by the axis velocity, then
    /// clamp-and-reflect if the circle's edge crossed a bound. The far-bound
    /// check runs before the near-bound check; keep that order, it is what
    /// makes the degenerate oversized-radius case settle into a stable
    /// oscillation instead of drifting.
    pub fn update(&mut self) {
        let (x, vx) = step_axis(
            self.position.x,
            self.velocity.x,
            self.radius,
            self.bounds.left,
            self.bounds.right,
        );
        let (y, vy) = step_axis(
            self.position.y,
            self.velocity.y,
            self.radius,
            self.bounds.top,
            self.bounds.bottom,
        );
        self.position = Vec2::new(x, y);
        self.velocity = Vec2::new(vx, vy);
    }
}

/// One-dimensional step: advance, then reflect at whichever bound the
/// circle's edge crossed. Returns the new `(value, vector)` pair.
fn step_axis(value: f32, vector: f32, radius: f32, min: f32, max: f32) -> (f32, f32) {
    let mut value = value + vector;
    let mut vector = vector;
    if value + radius > max {
        value = max - radius;
        vector = -vector;
    } else if value - radius < min {
        value = min + radius;
        vector = -vector;
    }
    (value, vector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_centered_with_positive_velocity() {
        let ball = Ball::new(Bounds::from_size(1000.0, 600.0), 50.0, 150.0, 24);
        assert_eq!(ball.position(), Vec2::new(500.0, 300.0));
        assert_eq!(ball.velocity(), Vec2::new(150.0 / 24.0, 150.0 / 24.0));
    }

    #[test]
    fn test_no_reflection_when_edge_touches_bound() {
        // x + radius lands exactly on the bound: not "greater than", so the
        // step is taken without clamping and the velocity keeps its sign.
        let mut ball = Ball::new(Bounds::from_size(1000.0, 1000.0), 200.0, 240.0, 24);
        ball.position = Vec2::new(799.0, 500.0);
        ball.velocity = Vec2::new(10.0, 0.0);

        ball.update();
        assert_eq!(ball.position().x, 800.0);
        assert_eq!(ball.velocity().x, 10.0);

        // The next step would cross, so the center clamps to max - radius
        // and the velocity flips.
        ball.update();
        assert_eq!(ball.position().x, 800.0);
        assert_eq!(ball.velocity().x, -10.0);
    }

    #[test]
    fn test_reflects_at_near_bound() {
        let mut ball = Ball::new(Bounds::from_size(1000.0, 1000.0), 200.0, 240.0, 24);
        ball.position = Vec2::new(205.0, 500.0);
        ball.velocity = Vec2::new(-10.0, 0.0);

        ball.update();
        assert_eq!(ball.position().x, 200.0);
        assert_eq!(ball.velocity().x, 10.0);
    }

    #[test]
    fn test_axes_are_independent() {
        let mut ball = Ball::new(Bounds::from_size(1000.0, 1000.0), 200.0, 240.0, 24);
        ball.position = Vec2::new(795.0, 500.0);
        ball.velocity = Vec2::new(10.0, 3.0);

        // x reflects on this step; y must step as if nothing happened.
        ball.update();
        assert_eq!(ball.position().x, 800.0);
        assert_eq!(ball.velocity().x, -10.0);
        assert_eq!(ball.position().y, 503.0);
        assert_eq!(ball.velocity().y, 3.0);
    }

    #[test]
    fn test_contained_forever() {
        let bounds = Bounds::from_size(500.0, 500.0);
        let radius = 200.0;
        let mut ball = Ball::new(bounds, radius, 150.0, 24);

        for _ in 0..100_000 {
            ball.update();
            let p = ball.position();
            assert!(p.x - radius >= bounds.left, "left violated at {p}");
            assert!(p.x + radius <= bounds.right, "right violated at {p}");
            assert!(p.y - radius >= bounds.top, "top violated at {p}");
            assert!(p.y + radius <= bounds.bottom, "bottom violated at {p}");
            // For this configuration the center can never leave [200, 300].
            assert!((200.0..=300.0).contains(&p.x));
            assert!((200.0..=300.0).contains(&p.y));
        }
    }

    #[test]
    fn test_deterministic() {
        let mut a = Ball::new(Bounds::from_size(1280.0, 720.0), 100.0, 150.0, 24);
        let mut b = Ball::new(Bounds::from_size(1280.0, 720.0), 100.0, 150.0, 24);

        for _ in 0..10_000 {
            a.update();
            b.update();
            assert_eq!(a.position(), b.position());
            assert_eq!(a.velocity(), b.velocity());
        }
    }

    #[test]
    fn test_oversized_radius_oscillates() {
        // radius >= half the extent: both clamp targets sit inverted
        // (max - radius < min + radius), so every step trips the far-bound
        // check and the ball ping-pongs between the two targets.
        let mut ball = Ball::new(Bounds::from_size(300.0, 300.0), 200.0, 150.0, 24);

        ball.update();
        let first = ball.position();
        ball.update();
        let second = ball.position();
        ball.update();
        let third = ball.position();

        assert_eq!(first, third);
        assert_ne!(first, second);
        // The two positions are exactly the clamp targets.
        let targets = [300.0 - 200.0, 0.0 + 200.0];
        assert!(targets.contains(&first.x));
        assert!(targets.contains(&second.x));
    }
}
