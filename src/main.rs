use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pixel_sprites::core::exporter::{self, ExportOptions};
use pixel_sprites::core::manifest::SpriteManifest;
use pixel_sprites::renderer::canvas::DEFAULT_SCALE;
use pixel_sprites::renderer::{preview, Pose, SpriteRenderer};

#[derive(Parser)]
#[command(author, version, about = "Generate the player character's pixel-art sprite frames", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write player_<pose>.png for every pose
    Export {
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,
        #[arg(short, long, default_value_t = DEFAULT_SCALE)]
        scale: u32,
        #[arg(short, long, default_value_t = false, help = "Also write player_sprites.json describing each frame")]
        manifest: bool,
    },
    /// Draw one pose in the terminal using 24-bit color half blocks
    Preview {
        /// run1, run2, run3, run4, jump, duck or dead
        pose: String,
        #[arg(short, long, default_value_t = DEFAULT_SCALE)]
        scale: u32,
    },
    /// Print frame sizes and hitboxes as JSON
    List {
        #[arg(short, long, default_value_t = DEFAULT_SCALE)]
        scale: u32,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Export {
        output_dir: PathBuf::from("."),
        scale: DEFAULT_SCALE,
        manifest: false,
    });

    match command {
        Commands::Export { output_dir, scale, manifest } => {
            let options = ExportOptions { output_dir, scale, write_manifest: manifest };
            let stdout = io::stdout();
            let mut out = stdout.lock();
            exporter::export_all(&options, &mut out)?;
            out.flush()?;
        }
        Commands::Preview { pose, scale } => {
            let pose: Pose = pose.parse()?;
            let canvas = SpriteRenderer::new(scale)?.render(pose);
            let stdout = io::stdout();
            preview::write_preview(&mut stdout.lock(), &canvas)?;
        }
        Commands::List { scale } => {
            println!("{}", SpriteManifest::build(scale)?.to_json()?);
        }
    }

    Ok(())
}
