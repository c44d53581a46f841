//! Runtime configuration.
//!
//! The original screensaver hard-codes its tuning as process-wide constants;
//! here they are explicit values handed to the simulator and the shell at
//! construction, with builder-style overrides for the few knobs that exist.

/// Simulation ticks (and redraws) per second.
pub const DEFAULT_TICKS_PER_SECOND: u32 = 24;

/// Ball radius in pixels.
pub const DEFAULT_BALL_RADIUS: f32 = 200.0;

/// Ball speed in pixels per second, per axis.
pub const DEFAULT_BALL_SPEED: f32 = 150.0;

/// Configuration for a screensaver run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub ticks_per_second: u32,
    pub ball_radius: f32,
    pub ball_speed: f32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            ball_radius: DEFAULT_BALL_RADIUS,
            ball_speed: DEFAULT_BALL_SPEED,
        }
    }

    /// Set the tick rate. Must be greater than zero.
    pub fn with_ticks_per_second(mut self, rate: u32) -> Self {
        self.ticks_per_second = rate;
        self
    }

    /// Set the ball radius in pixels.
    pub fn with_ball_radius(mut self, radius: f32) -> Self {
        self.ball_radius = radius;
        self
    }

    /// Set the ball speed in pixels per second.
    pub fn with_ball_speed(mut self, speed: f32) -> Self {
        self.ball_speed = speed;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ticks_per_second, 24);
        assert_eq!(config.ball_radius, 200.0);
        assert_eq!(config.ball_speed, 150.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::new()
            .with_ticks_per_second(60)
            .with_ball_radius(32.0)
            .with_ball_speed(400.0);
        assert_eq!(config.ticks_per_second, 60);
        assert_eq!(config.ball_radius, 32.0);
        assert_eq!(config.ball_speed, 400.0);
    }
}
