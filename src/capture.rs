//! One-shot screen capture.
//!
//! The fake-desktop overlay needs a picture of the real desktop, taken
//! before the screensaver window exists. Capture goes through the XDG
//! desktop portal's screenshot interface: the portal writes the shot to
//! disk and hands back a file URI, which is decoded into RGBA pixels and
//! deleted. The portal call is async; it is bridged to the synchronous
//! startup path the same way GPU initialization is.

use ashpd::desktop::screenshot::Screenshot;
use image::RgbaImage;

use crate::error::CaptureError;

/// Capture the screen once, returning RGBA pixels.
///
/// Must be called before the screensaver window is created, otherwise the
/// capture shows the screensaver itself.
pub fn capture_screen() -> Result<RgbaImage, CaptureError> {
    pollster::block_on(request_screenshot())
}

async fn request_screenshot() -> Result<RgbaImage, CaptureError> {
    let response = Screenshot::request()
        .interactive(false)
        .modal(false)
        .send()
        .await?
        .response()?;

    let uri = response.uri();
    let path = uri
        .to_file_path()
        .map_err(|_| CaptureError::NotAFile(uri.to_string()))?;

    log::debug!("Portal wrote screenshot to {}", path.display());

    let pixels = image::open(&path)?.into_rgba8();

    // The portal leaves its copy on disk (usually under ~/Pictures);
    // it has served its purpose.
    if let Err(e) = std::fs::remove_file(&path) {
        log::warn!("Could not remove portal screenshot {}: {}", path.display(), e);
    }

    log::info!("Captured {}x{} desktop image", pixels.width(), pixels.height());
    Ok(pixels)
}
