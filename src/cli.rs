use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use filemeta::{utils, DigestAlgorithm, ExportFormat, IntegrityStatus, Session};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "filemeta")]
#[command(author, version, about = "Extract file metadata and SHA-256 hashes, verify and export them")]
pub struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect metadata for one or more files
    Extract {
        /// Files to inspect. `a.txt;b.txt` is split into two paths.
        paths: Vec<String>,

        #[command(flatten)]
        reference: ReferenceArgs,

        /// Digest algorithm
        #[arg(long, default_value = "sha256")]
        algorithm: DigestAlgorithm,

        /// Write metadata_report.csv or metadata_report.json
        #[arg(long, value_name = "csv|json")]
        export: Option<ExportFormat>,

        /// Directory for the exported report
        #[arg(long, env = "FILEMETA_OUTPUT_DIR", default_value = ".")]
        output_dir: PathBuf,

        /// Do not print the report to stdout
        #[arg(long)]
        quiet_report: bool,
    },
    /// Check a single file against a known hash
    Verify {
        path: PathBuf,

        #[command(flatten)]
        reference: ReferenceArgs,

        #[arg(long, default_value = "sha256")]
        algorithm: DigestAlgorithm,
    },
    /// Open the desktop window
    Gui,
}

#[derive(clap::Args, Debug)]
pub struct ReferenceArgs {
    /// Known hash to compare against, taken verbatim
    #[arg(long, env = "FILEMETA_KNOWN_HASH", conflicts_with = "known_hash_file")]
    pub known_hash: Option<String>,

    /// Read the known hash from a text file (plain hex or sha256sum output)
    #[arg(long)]
    pub known_hash_file: Option<PathBuf>,
}

impl ReferenceArgs {
    pub fn resolve(&self) -> Result<Option<String>> {
        if let Some(hash) = &self.known_hash {
            return Ok(Some(hash.clone()));
        }
        let Some(file) = &self.known_hash_file else {
            return Ok(None);
        };
        let text = fs::read_to_string(file)
            .with_context(|| format!("reading hash file {}", file.display()))?;
        match utils::parse_first_hash_from_text(&text) {
            Some(hash) => Ok(Some(hash)),
            None => bail!("no hash found in {}", file.display()),
        }
    }
}

pub fn run_extract(
    paths: &[String],
    reference: &ReferenceArgs,
    algorithm: DigestAlgorithm,
    export: Option<ExportFormat>,
    output_dir: &Path,
    quiet_report: bool,
) -> Result<ExitCode> {
    let paths: Vec<String> = paths.iter().flat_map(|p| utils::split_path_list(p)).collect();
    if paths.is_empty() {
        warn!("No file selected.");
    }
    let known_hash = reference.resolve()?;

    let mut session = Session::new(algorithm);
    let notices = session.extract(&paths, known_hash.as_deref());
    for notice in &notices {
        warn!("{notice}");
    }

    if !quiet_report {
        print!("{}", session.render());
    }

    if let Some(format) = export {
        let written = session
            .export(format, output_dir)
            .with_context(|| format!("exporting {format} report"))?;
        info!("Metadata exported to {}", written.display());
    }
    Ok(ExitCode::SUCCESS)
}

pub fn run_verify(path: &Path, reference: &ReferenceArgs, algorithm: DigestAlgorithm) -> Result<ExitCode> {
    let Some(known_hash) = reference.resolve()? else {
        bail!("verify needs --known-hash or --known-hash-file");
    };
    let status = filemeta::integrity::verify_file(path, &known_hash, algorithm);
    println!("{}: {status}", path.display());
    Ok(match status {
        IntegrityStatus::Match => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}
