//! PDF Export
//!
//! Turns a captured raster of the schedule view into a one-page PDF. The
//! raster is placed full width at the top of the page; its height follows the
//! raster's aspect ratio.

use printpdf::image_crate::{DynamicImage, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};

const MM_PER_INCH: f32 = 25.4;

/// Captured RGBA pixels, row-major, 4 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl RasterImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> ExportResult<Self> {
        if width == 0 || height == 0 {
            return Err(ExportError::EmptyRaster { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ExportError::PixelBufferSize { expected, actual: rgba.len() });
        }
        Ok(Self { width, height, rgba })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Drop alpha by compositing over white
    pub fn to_rgb_over_white(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.rgba.len() / 4 * 3);
        for px in self.rgba.chunks_exact(4) {
            let alpha = px[3] as u32;
            for &channel in &px[..3] {
                let blended = (channel as u32 * alpha + 255 * (255 - alpha) + 127) / 255;
                rgb.push(blended as u8);
            }
        }
        rgb
    }
}

/// Where the raster lands on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub width_mm: f32,
    pub height_mm: f32,
    /// Resolution that makes the raster exactly page width
    pub dpi: f32,
    /// Distance from the page bottom to the raster's bottom edge (PDF origin is bottom-left)
    pub bottom_mm: f32,
}

/// Full-width, top-aligned placement for a `width_px` x `height_px` raster
pub fn fit_full_width(config: &ExportConfig, width_px: u32, height_px: u32) -> Placement {
    let width_mm = config.page_width_mm;
    let height_mm = height_px as f32 * width_mm / width_px as f32;
    Placement {
        width_mm,
        height_mm,
        dpi: width_px as f32 * MM_PER_INCH / width_mm,
        bottom_mm: config.page_height_mm - height_mm,
    }
}

/// Date heading shown above the groups; `None` when the field is blank
pub fn sheet_heading(date: &str) -> Option<&str> {
    let date = date.trim();
    (!date.is_empty()).then_some(date)
}

/// Download name for the given date field
pub fn file_name(config: &ExportConfig, date: &str) -> String {
    let stem = sheet_heading(date).unwrap_or(config.default_stem.as_str());
    format!("{}{}.pdf", config.file_prefix, stem)
}

/// Assemble the single-page PDF and return its bytes
pub fn build_pdf(config: &ExportConfig, raster: &RasterImage) -> ExportResult<Vec<u8>> {
    let (width, height) = (raster.width(), raster.height());
    let placement = fit_full_width(config, width, height);
    log::debug!(
        "[EXPORT] Placing {}x{} raster at {:.1}x{:.1}mm ({:.1} dpi)",
        width, height, placement.width_mm, placement.height_mm, placement.dpi
    );

    let (doc, page, layer) = PdfDocument::new(
        config.title.clone(),
        Mm(config.page_width_mm),
        Mm(config.page_height_mm),
        "Schedule",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let pixels = RgbImage::from_raw(width, height, raster.to_rgb_over_white())
        .ok_or_else(|| ExportError::Pdf("raster does not fit its dimensions".to_string()))?;
    let image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(pixels));
    image.add_to_layer(
        layer,
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(placement.bottom_mm)),
            dpi: Some(placement.dpi),
            ..Default::default()
        },
    );

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}
