//! Batch OBJ generator for track segment prefabs.
//!
//! Reads the prefab list once, builds one mesh per record, and writes one
//! `.obj` file per prefab into the output directory. Any failure is fatal:
//! the run stops at the first malformed record, unsupported segment, or
//! write error.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use config::constants::GeneratorConfig;
use track_mesh::{build_segment, write_obj, MeshError};
use track_prefab::{PrefabError, PrefabQueue};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON prefab list
    #[arg(short, long, default_value = "track_prefabs.json")]
    input: PathBuf,

    /// Directory receiving one OBJ file per prefab; must already exist
    #[arg(short, long, default_value = "prefabs")]
    out_dir: PathBuf,
}

/// Errors that abort a generation run.
#[derive(Debug, Error)]
enum PipelineError {
    #[error(transparent)]
    Prefab(#[from] PrefabError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(count) => {
            log::info!("wrote {count} prefab meshes to {}", args.out_dir.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Drains the prefab queue, writing one mesh file per record.
fn run(args: &Args) -> Result<usize, PipelineError> {
    let mut queue = PrefabQueue::from_path(&args.input)?;
    let config = GeneratorConfig::default();

    let mut written = 0;
    while let Some(prefab) = queue.next_prefab() {
        let mesh = build_segment(&prefab, &config)?;

        let path = args.out_dir.join(format!("{}.obj", prefab.name()));
        let file = File::create(&path).map_err(|source| PipelineError::Create {
            path: path.display().to_string(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        write_obj(&mesh, &mut writer)?;
        writer.flush().map_err(MeshError::from)?;

        log::info!("wrote {}", path.display());
        written += 1;
    }

    Ok(written)
}
