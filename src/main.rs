use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tooldash::DashboardConfig;
use tooldash::tools::{documents, playlist, video};

mod args;
use args::{Args, Command};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match DashboardConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("{}", e);
                return ExitCode::FAILURE;
            }
        },
        None => DashboardConfig::default(),
    }
    .with_env_overrides();

    match run(args.command, config) {
        Ok(path) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: DashboardConfig) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = match command {
        Command::Seo { url, output_dir } => {
            let mut analysis = tooldash::SeoAnalysis::new(url).with_config(config.seo);
            if let Some(dir) = output_dir {
                analysis = analysis.with_output_dir(dir);
            }
            analysis.run()?
        }
        Command::Playlist { url, output_dir } => {
            playlist::download_playlist(&url, &output_dir, &config.playlist)?
        }
        Command::MergeDocs { files, output } => {
            documents::convert_and_merge(&files, &output, &config.documents)?
        }
        Command::ConvertVideo { input, output } => {
            let output = output.unwrap_or_else(|| video::default_output(&input));
            video::convert_to_mp4(&input, &output, &config.video)?
        }
    };
    Ok(path)
}
