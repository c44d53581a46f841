//! Integration tests for the bounce simulation.
//!
//! These exercise the public API only: construct a ball, tick it, and check
//! the trajectory properties the renderer relies on.

use ballsaver::{Ball, Bounds};

/// The circle must stay fully inside the bounds after every update, for any
/// sane configuration.
#[test]
fn test_circle_always_contained() {
    let cases = [
        (1920.0, 1080.0, 200.0),
        (1280.0, 720.0, 100.0),
        (500.0, 500.0, 200.0),
        (640.0, 480.0, 10.0),
    ];

    for (width, height, radius) in cases {
        let bounds = Bounds::from_size(width, height);
        let mut ball = Ball::new(bounds, radius, 150.0, 24);

        for tick in 0..50_000 {
            ball.update();
            let p = ball.position();
            assert!(
                p.x - radius >= bounds.left && p.x + radius <= bounds.right,
                "x escaped {width}x{height} r={radius} at tick {tick}: {p}"
            );
            assert!(
                p.y - radius >= bounds.top && p.y + radius <= bounds.bottom,
                "y escaped {width}x{height} r={radius} at tick {tick}: {p}"
            );
        }
    }
}

/// Bounds [0,500] x [0,500] with radius 200 leave the center a 100-pixel
/// corridor: [200, 300] on both axes, forever.
#[test]
fn test_tight_bounds_confine_center() {
    let mut ball = Ball::new(Bounds::from_size(500.0, 500.0), 200.0, 150.0, 24);

    for _ in 0..100_000 {
        ball.update();
        let p = ball.position();
        assert!((200.0..=300.0).contains(&p.x), "center x left corridor: {p}");
        assert!((200.0..=300.0).contains(&p.y), "center y left corridor: {p}");
    }
}

/// Identical construction gives bit-identical trajectories.
#[test]
fn test_trajectories_are_deterministic() {
    let make = || Ball::new(Bounds::from_size(1920.0, 1080.0), 200.0, 150.0, 24);
    let mut a = make();
    let mut b = make();

    for _ in 0..25_000 {
        a.update();
        b.update();
        assert_eq!(a.position(), b.position());
        assert_eq!(a.velocity(), b.velocity());
    }
}

/// The axes are independent: changing the width must not disturb the y
/// trajectory.
#[test]
fn test_width_change_does_not_affect_y() {
    let mut narrow = Ball::new(Bounds::from_size(600.0, 900.0), 100.0, 150.0, 24);
    let mut wide = Ball::new(Bounds::from_size(4000.0, 900.0), 100.0, 150.0, 24);

    // Different widths shift the starting x, so only compare y.
    for _ in 0..25_000 {
        narrow.update();
        wide.update();
        assert_eq!(narrow.position().y, wide.position().y);
        assert_eq!(narrow.velocity().y, wide.velocity().y);
    }
}

/// Per-axis speed never changes magnitude, only sign.
#[test]
fn test_speed_magnitude_is_preserved() {
    let mut ball = Ball::new(Bounds::from_size(1024.0, 768.0), 50.0, 150.0, 24);
    let per_tick = 150.0 / 24.0;

    for _ in 0..25_000 {
        ball.update();
        assert_eq!(ball.velocity().x.abs(), per_tick);
        assert_eq!(ball.velocity().y.abs(), per_tick);
    }
}

/// A radius at least half the extent cannot fit; the ball settles into a
/// period-two oscillation between the two clamp targets instead of
/// crashing or escaping.
#[test]
fn test_oversized_radius_settles_into_oscillation() {
    let mut ball = Ball::new(Bounds::from_size(300.0, 300.0), 200.0, 150.0, 24);

    ball.update();
    let a = ball.position();
    ball.update();
    let b = ball.position();
    assert_ne!(a, b);

    for _ in 0..1_000 {
        ball.update();
        let p = ball.position();
        assert!(p == a || p == b, "left the oscillation pair: {p}");
    }
}
