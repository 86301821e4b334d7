//! Workspace chores: regenerate the options schema and starter presets.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use vantage::camera::CameraMode;
use vantage::Options;

#[derive(Parser)]
#[command(name = "xtask", about = "Build tasks for the vantage workspace")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the JSON schema of the UI-exposed options.
    Schema {
        /// Output file.
        #[arg(long, default_value = "assets/options.schema.json")]
        out: PathBuf,
    },
    /// Write one default preset per camera mode.
    Presets {
        /// Output directory.
        #[arg(long, default_value = "assets/presets")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Command::Schema { out } => {
            let json = serde_json::to_string_pretty(&Options::json_schema())?;
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Command::Presets { dir } => {
            for mode in CameraMode::ALL {
                let mut options = Options::default();
                options.initial.mode = mode;
                options.camera.third_person_follow = mode == CameraMode::ThirdPerson;
                let path = dir.join(format!("{mode}.toml"));
                options
                    .save(&path)
                    .with_context(|| format!("writing {}", path.display()))?;
            }
        }
    }
    Ok(())
}
