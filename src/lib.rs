//! # ballsaver
//!
//! A full-screen bouncing-ball screensaver with a party trick: pressing
//! Escape swaps in a screenshot of the desktop taken at startup, rotated
//! 180 degrees, until a click or keypress brings the animation back. Any
//! other input during the animation exits.
//!
//! The interesting part is deliberately small: [`Ball`] advances a
//! position/velocity pair one step per tick and reflects at the bounds,
//! deterministically. Everything else is shell: a winit window, two wgpu
//! pipelines, a fixed-rate tick clock, and a one-shot portal capture.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ballsaver::Config;
//!
//! fn main() {
//!     env_logger::init();
//!     ballsaver::run(Config::default()).unwrap();
//! }
//! ```

pub mod ball;
pub mod capture;
pub mod config;
pub mod error;
mod gpu;
pub mod label;
pub mod shader;
pub mod time;
mod window;

pub use ball::{Ball, Bounds};
pub use config::Config;
pub use error::{CaptureError, GpuError, ShellError};
pub use glam::Vec2;
pub use window::run;
