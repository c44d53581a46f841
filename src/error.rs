//! Error types for ballsaver.
//!
//! This module provides error types for GPU initialization, screen capture,
//! and event-loop startup. Everything here is fatal: the screensaver has no
//! retry policy, so errors propagate to `main` and end the process.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur while capturing the startup screenshot.
#[derive(Debug)]
pub enum CaptureError {
    /// The desktop portal request failed or was denied.
    Portal(ashpd::Error),
    /// The portal returned a URI that is not a local file.
    NotAFile(String),
    /// Failed to decode the captured image.
    Image(image::ImageError),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Portal(e) => write!(f, "Screenshot portal request failed: {}", e),
            CaptureError::NotAFile(uri) => {
                write!(f, "Screenshot portal returned a non-file URI: {}", uri)
            }
            CaptureError::Image(e) => write!(f, "Failed to decode captured screenshot: {}", e),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::Portal(e) => Some(e),
            CaptureError::Image(e) => Some(e),
            CaptureError::NotAFile(_) => None,
        }
    }
}

impl From<ashpd::Error> for CaptureError {
    fn from(e: ashpd::Error) -> Self {
        CaptureError::Portal(e)
    }
}

impl From<image::ImageError> for CaptureError {
    fn from(e: image::ImageError) -> Self {
        CaptureError::Image(e)
    }
}

/// Errors that can occur when running the screensaver shell.
#[derive(Debug)]
pub enum ShellError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Startup screen capture failed.
    Capture(CaptureError),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            ShellError::Window(e) => write!(f, "Failed to create window: {}", e),
            ShellError::Gpu(e) => write!(f, "GPU error: {}", e),
            ShellError::Capture(e) => write!(f, "Capture error: {}", e),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::EventLoop(e) => Some(e),
            ShellError::Window(e) => Some(e),
            ShellError::Gpu(e) => Some(e),
            ShellError::Capture(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for ShellError {
    fn from(e: winit::error::EventLoopError) -> Self {
        ShellError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for ShellError {
    fn from(e: winit::error::OsError) -> Self {
        ShellError::Window(e)
    }
}

impl From<GpuError> for ShellError {
    fn from(e: GpuError) -> Self {
        ShellError::Gpu(e)
    }
}

impl From<CaptureError> for ShellError {
    fn from(e: CaptureError) -> Self {
        ShellError::Capture(e)
    }
}
