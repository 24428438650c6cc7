mod cli;
mod gui;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands};
use iced::{window, Size};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Cli::parse();
    filemeta::logging::init(filemeta::logging::level_for(args.verbose, args.quiet))?;

    match args.command {
        Commands::Extract {
            paths,
            reference,
            algorithm,
            export,
            output_dir,
            quiet_report,
        } => cli::run_extract(&paths, &reference, algorithm, export, &output_dir, quiet_report),
        Commands::Verify {
            path,
            reference,
            algorithm,
        } => cli::run_verify(&path, &reference, algorithm),
        Commands::Gui => {
            run_gui()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_gui() -> Result<()> {
    iced::application(
        "FileMeta - File Metadata Extractor",
        gui::FileMetaApp::update,
        gui::FileMetaApp::view,
    )
    .window(window::Settings {
        size: Size::new(760.0, 680.0),
        resizable: true,
        ..window::Settings::default()
    })
    .run_with(gui::FileMetaApp::new)
    .map_err(|e| anyhow!("desktop window failed: {e}"))
}
