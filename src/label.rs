//! Clock label rasterization.
//!
//! The animation shows the current wall-clock time in large red text, the
//! way the original drew its timestamp. Glyphs are rasterized on the CPU
//! with `rusttype` into a tight RGBA bitmap, which the renderer uploads as
//! a texture whenever the text changes (once per second).
//!
//! No font ships with the binary; the first readable font from a list of
//! common system locations is used. When none is found the label is simply
//! not drawn.

use rusttype::{point, Font, Scale};

/// Label text color (red, straight alpha applied per pixel from glyph
/// coverage).
const LABEL_COLOR: [u8; 3] = [255, 0, 0];

/// Common system font locations, tried in order.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A rasterized label ready for texture upload.
#[derive(Debug, Clone)]
pub struct LabelImage {
    /// RGBA pixels, `width * height * 4` bytes.
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rasterizes single-line text at a fixed size.
pub struct LabelRasterizer {
    font: Option<Font<'static>>,
    scale: Scale,
}

impl LabelRasterizer {
    /// Create a rasterizer using the first loadable system font.
    pub fn from_system_fonts(size: f32) -> Self {
        let font = FONT_CANDIDATES.iter().find_map(|path| {
            let bytes = std::fs::read(path).ok()?;
            let font = Font::try_from_vec(bytes)?;
            log::debug!("Label font: {}", path);
            Some(font)
        });
        if font.is_none() {
            log::warn!("No system font found; the clock label will not be drawn");
        }
        Self {
            font,
            scale: Scale::uniform(size),
        }
    }

    #[inline]
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Rasterize `text` into a tight RGBA bitmap.
    ///
    /// Returns `None` when no font is available or the text produces no
    /// visible glyphs.
    pub fn render(&self, text: &str) -> Option<LabelImage> {
        let font = self.font.as_ref()?;

        let v_metrics = font.v_metrics(self.scale);
        let glyphs: Vec<_> = font
            .layout(text, self.scale, point(0.0, v_metrics.ascent))
            .collect();

        let width = glyphs
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
            .ceil() as u32;
        let height = (v_metrics.ascent - v_metrics.descent).ceil() as u32;
        if width == 0 || height == 0 {
            return None;
        }

        let mut data = vec![0u8; (width * height * 4) as usize];
        for glyph in glyphs {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = bb.min.x + gx as i32;
                let py = bb.min.y + gy as i32;
                if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                    return;
                }
                let idx = ((py as u32 * width + px as u32) * 4) as usize;
                data[idx] = LABEL_COLOR[0];
                data[idx + 1] = LABEL_COLOR[1];
                data[idx + 2] = LABEL_COLOR[2];
                data[idx + 3] = (coverage * 255.0) as u8;
            });
        }

        Some(LabelImage {
            data,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_font_is_none() {
        let rasterizer = LabelRasterizer {
            font: None,
            scale: Scale::uniform(64.0),
        };
        assert!(rasterizer.render("12:34:56").is_none());
    }

    #[test]
    fn test_render_produces_tight_bitmap() {
        let rasterizer = LabelRasterizer::from_system_fonts(64.0);
        if !rasterizer.has_font() {
            // No fonts installed in this environment; nothing to check.
            return;
        }
        let label = rasterizer.render("2026-01-01 00:00:00").expect("label");
        assert!(label.width > 0);
        assert!(label.height > 0);
        assert_eq!(label.data.len(), (label.width * label.height * 4) as usize);
        // Some pixel must have ink.
        assert!(label.data.chunks_exact(4).any(|px| px[3] > 0));
    }

    #[test]
    fn test_empty_text_is_none() {
        let rasterizer = LabelRasterizer::from_system_fonts(64.0);
        if !rasterizer.has_font() {
            return;
        }
        assert!(rasterizer.render("").is_none());
    }
}
