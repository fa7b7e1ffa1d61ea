use image::{Rgba, RgbaImage};

use super::color::RgbColor;
use super::layout::FillRect;
use crate::error::{Result, SpriteError};

/// Logical grid every layout is drawn on
pub const BASE_WIDTH: u32 = 16;
pub const BASE_HEIGHT: u32 = 24;

pub const DEFAULT_SCALE: u32 = 2;
pub const MAX_SCALE: u32 = 64;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

pub fn validate_scale(scale: u32) -> Result<u32> {
    if (1..=MAX_SCALE).contains(&scale) {
        Ok(scale)
    } else {
        Err(SpriteError::InvalidScale(scale))
    }
}

/// RGBA raster of `BASE_WIDTH*scale` x `BASE_HEIGHT*scale` pixels,
/// fully transparent until filled.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    scale: u32,
    image: RgbaImage,
}

impl Canvas {
    pub fn new(scale: u32) -> Result<Self> {
        validate_scale(scale).map(Self::blank)
    }

    /// Caller guarantees the scale already passed `validate_scale`.
    pub(crate) fn blank(scale: u32) -> Self {
        let image = RgbaImage::from_pixel(BASE_WIDTH * scale, BASE_HEIGHT * scale, TRANSPARENT);
        Self { scale, image }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Overwrite every pixel inside the scaled rectangle with its opaque
    /// palette color. Pixels past the canvas edge are clipped.
    pub fn fill(&mut self, rect: &FillRect) {
        let s = self.scale;
        let x_end = ((rect.x + rect.w) * s).min(self.width());
        let y_end = ((rect.y + rect.h) * s).min(self.height());
        let color = Rgba(rect.color.rgb().to_rgba());

        for y in rect.y * s..y_end {
            for x in rect.x * s..x_end {
                self.image.put_pixel(x, y, color);
            }
        }
    }

    /// RGBA at a pixel, or None outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Color at a pixel, or None where nothing was drawn or off the canvas
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<RgbColor> {
        match self.pixel(x, y)? {
            [_, _, _, 0] => None,
            [r, g, b, _] => Some(RgbColor(r, g, b)),
        }
    }

    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
