use tracing::debug;

use super::canvas::{validate_scale, Canvas, DEFAULT_SCALE};
use super::layout::layout;
use super::pose::Pose;
use crate::error::Result;

pub struct SpriteRenderer {
    scale: u32,
}

impl Default for SpriteRenderer {
    fn default() -> Self {
        Self { scale: DEFAULT_SCALE }
    }
}

impl SpriteRenderer {
    pub fn new(scale: u32) -> Result<Self> {
        Ok(Self { scale: validate_scale(scale)? })
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Paint the pose's fill list, in order, onto a fresh transparent canvas.
    pub fn render(&self, pose: Pose) -> Canvas {
        let mut canvas = Canvas::blank(self.scale);
        let rects = layout(pose);
        for rect in &rects {
            canvas.fill(rect);
        }
        debug!(%pose, scale = self.scale, fills = rects.len(), "rendered sprite");
        canvas
    }
}

/// Render at the default scale
pub fn render(pose: Pose) -> Canvas {
    SpriteRenderer::default().render(pose)
}
