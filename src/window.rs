//! Screensaver shell: window lifecycle, input dispatch, and the tick loop.
//!
//! The shell owns a single borderless full-screen window and a two-state
//! mode machine. While animating, Escape swaps in the fake desktop and any
//! other key or click exits; while the fake desktop is up, any key or click
//! returns to the animation.

use std::sync::Arc;

use chrono::Local;
use image::RgbaImage;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use crate::ball::{Ball, Bounds};
use crate::capture;
use crate::config::Config;
use crate::error::ShellError;
use crate::gpu::{FrameDesc, GpuState};
use crate::label::LabelRasterizer;
use crate::time::TickClock;

/// Point size of the clock label.
const LABEL_SIZE: f32 = 64.0;

/// What the window is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Bouncing ball plus clock label.
    Animating,
    /// The captured desktop, shown until dismissed.
    Desktop,
}

/// Capture the desktop, then run the screensaver until the user exits.
///
/// The capture happens before the window exists so the overlay shows the
/// real desktop rather than the screensaver itself. Blocks until the event
/// loop ends.
pub fn run(config: Config) -> Result<(), ShellError> {
    let desktop = capture::capture_screen()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, desktop);
    event_loop.run_app(&mut app)?;

    match app.init_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

pub struct App {
    config: Config,
    desktop: RgbaImage,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    ball: Option<Ball>,
    clock: TickClock,
    mode: Mode,
    labeler: LabelRasterizer,
    label_text: String,
    /// Startup failure carried out of the event loop.
    init_error: Option<ShellError>,
}

impl App {
    pub fn new(config: Config, desktop: RgbaImage) -> Self {
        Self {
            clock: TickClock::new(config.ticks_per_second),
            config,
            desktop,
            window: None,
            gpu: None,
            ball: None,
            mode: Mode::Animating,
            labeler: LabelRasterizer::from_system_fonts(LABEL_SIZE),
            label_text: String::new(),
            init_error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ShellError) {
        self.init_error = Some(error);
        event_loop.exit();
    }

    /// Re-rasterize the clock label when the formatted time changes.
    fn refresh_label(&mut self) {
        let text = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        if text == self.label_text {
            return;
        }
        if let Some(image) = self.labeler.render(&text) {
            if let Some(gpu) = &mut self.gpu {
                gpu.set_label(&image);
            }
        }
        self.label_text = text;
    }

    fn handle_key(&mut self, code: KeyCode, event_loop: &ActiveEventLoop) {
        match self.mode {
            Mode::Desktop => {
                self.mode = Mode::Animating;
                self.request_redraw();
            }
            Mode::Animating if code == KeyCode::Escape => {
                self.mode = Mode::Desktop;
                self.request_redraw();
            }
            Mode::Animating => event_loop.exit(),
        }
    }

    fn handle_click(&mut self, event_loop: &ActiveEventLoop) {
        match self.mode {
            Mode::Desktop => {
                self.mode = Mode::Animating;
                self.request_redraw();
            }
            Mode::Animating => event_loop.exit(),
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu) = &mut self.gpu else { return };
        let Some(ball) = &self.ball else { return };

        let frame = FrameDesc {
            ball_center: ball.position(),
            ball_radius: ball.radius(),
            show_desktop: self.mode == Mode::Desktop,
        };

        match gpu.render(&frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                width: gpu.config.width,
                height: gpu.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("ballsaver")
            .with_resizable(false)
            .with_fullscreen(Some(Fullscreen::Borderless(None)));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => return self.fail(event_loop, e.into()),
        };

        let size = window.inner_size();
        log::info!("Fullscreen surface: {}x{}", size.width, size.height);

        self.ball = Some(Ball::new(
            Bounds::from_size(size.width as f32, size.height as f32),
            self.config.ball_radius,
            self.config.ball_speed,
            self.config.ticks_per_second,
        ));

        let mut gpu = match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu) => gpu,
            Err(e) => return self.fail(event_loop, e.into()),
        };
        gpu.set_overlay(&self.desktop);

        self.gpu = Some(gpu);
        self.window = Some(window);
        self.refresh_label();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                self.handle_key(code, event_loop);
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                self.handle_click(event_loop);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            return;
        }

        let due = self.clock.advance();
        if due > 0 {
            if let Some(ball) = &mut self.ball {
                for _ in 0..due {
                    ball.update();
                }
            }
            self.refresh_label();
            self.request_redraw();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.clock.next_deadline()));
    }
}
