use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::core::manifest::{SpriteManifest, MANIFEST_FILE};
use crate::renderer::{Canvas, Pose, SpriteRenderer};

pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub scale: u32,
    pub write_manifest: bool,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
}

/// Render every pose and save it as `player_<pose>.png` under the output
/// directory. Stops at the first file that cannot be written.
pub fn export_all<W: Write>(options: &ExportOptions, out: &mut W) -> Result<ExportSummary> {
    let renderer = SpriteRenderer::new(options.scale)?;
    let start = Instant::now();

    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!("Failed to create output directory {}", options.output_dir.display())
    })?;

    info!(
        poses = Pose::ALL.len(),
        scale = renderer.scale(),
        dir = %options.output_dir.display(),
        "exporting sprites"
    );

    // Renders are independent; writes happen afterwards in export order.
    let rendered: Vec<(Pose, Canvas)> = Pose::ALL
        .par_iter()
        .map(|&pose| (pose, renderer.render(pose)))
        .collect();

    let mut files = Vec::with_capacity(rendered.len());
    for (pose, canvas) in &rendered {
        let file_name = pose.file_name();
        let path = options.output_dir.join(&file_name);
        canvas
            .image()
            .save(&path)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        debug!(path = %path.display(), "wrote sprite");
        writeln!(out, "Created {}", file_name)?;
        files.push(path);
    }

    let manifest = if options.write_manifest {
        let path = options.output_dir.join(MANIFEST_FILE);
        SpriteManifest::build(renderer.scale())?.write(&path)?;
        writeln!(out, "Created {}", MANIFEST_FILE)?;
        Some(path)
    } else {
        None
    };

    writeln!(out, "\nAll character sprites generated successfully!")?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "export finished");

    Ok(ExportSummary { files, manifest })
}
