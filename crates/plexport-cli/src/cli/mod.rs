//! CLI for the plexport playlist exporter.

use anyhow::Result;
use clap::Parser;
use plexport_core::config;
use plexport_core::export;
use std::path::PathBuf;

/// Top-level CLI for the plexport playlist exporter.
#[derive(Debug, Parser)]
#[command(name = "plexport")]
#[command(about = "plexport: copy playlist descriptor tracks into per-playlist folders", long_about = None)]
pub struct Cli {
    /// Tab-separated playlist descriptor files to process, one playlist each.
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptors: Vec<PathBuf>,

    /// Directory under which playlist folders are created.
    /// Overrides `output_root` from the config file; defaults to the current directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse arguments and process every descriptor file in order.
    ///
    /// Returns the process exit code: 0 when every record of every descriptor
    /// copied, 1 when anything failed or no descriptor files were given. A
    /// failing descriptor never aborts the ones after it.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        if cli.descriptors.is_empty() {
            eprintln!("Usage: plexport [--output-dir DIR] <descriptor-file>...");
            return Ok(1);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let columns = cfg.columns();

        let output_root = match cli.output_dir.or(cfg.output_root) {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        let mut run_copied = 0usize;
        let mut run_total = 0usize;
        let mut failed = false;

        for descriptor in &cli.descriptors {
            match export::export_playlist(descriptor, &output_root, &columns) {
                Ok(stats) => {
                    run_copied += stats.copied;
                    run_total += stats.total;
                    if stats.copied < stats.total {
                        failed = true;
                    }
                }
                Err(err) => {
                    eprintln!("plexport error: {:#}", err);
                    tracing::warn!("descriptor {} failed: {:#}", descriptor.display(), err);
                    failed = true;
                }
            }
        }

        println!(
            "Run complete: copied {run_copied} of {run_total} tracks across {} playlist(s)",
            cli.descriptors.len()
        );
        Ok(if failed { 1 } else { 0 })
    }
}
