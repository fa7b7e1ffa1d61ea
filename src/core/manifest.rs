use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error;
use crate::renderer::canvas::{validate_scale, BASE_HEIGHT, BASE_WIDTH};
use crate::renderer::Pose;

pub const MANIFEST_FILE: &str = "player_sprites.json";

/// Pixel-space description of the exported frames, for loaders that need
/// sizes and collision bodies without decoding the PNGs.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct SpriteManifest {
    pub scale: u32,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frames: Vec<FrameEntry>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct FrameEntry {
    pub key: String,
    pub pose: String,
    pub file: String,
    pub width: u32,
    pub height: u32,
    pub hitbox: HitboxEntry,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct HitboxEntry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SpriteManifest {
    pub fn build(scale: u32) -> error::Result<Self> {
        let scale = validate_scale(scale)?;
        let frame_width = BASE_WIDTH * scale;
        let frame_height = BASE_HEIGHT * scale;

        let frames = Pose::ALL
            .into_iter()
            .map(|pose| {
                let hb = pose.hitbox().scaled(scale);
                FrameEntry {
                    key: pose.texture_key(),
                    pose: pose.name().to_string(),
                    file: pose.file_name(),
                    width: frame_width,
                    height: frame_height,
                    hitbox: HitboxEntry {
                        x: hb.x,
                        y: hb.y,
                        width: hb.width,
                        height: hb.height,
                    },
                }
            })
            .collect();

        Ok(Self { scale, frame_width, frame_height, frames })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize sprite manifest")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }
}
