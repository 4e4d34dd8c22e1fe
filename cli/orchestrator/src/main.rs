//! Weft command-line interface
//!
//! Translates IDL specs to the common representation and generates service
//! clients with the external spec compiler.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use config::Config;
use types::{ClientLanguage, ClientPlatform};
use weft_cli::{list_languages, run_client, run_common, run_sketch, CliError, Target};

/// Command-line interface configuration for weft.
#[derive(Parser, Debug)]
#[command(name = "weft", about = "IDL spec translation and client generation", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
    /// Configuration file (defaults to the user config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level, overriding the configured one
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Spec location arguments.
#[derive(Args, Debug)]
struct SpecArgs {
    /// Directory holding the spec files
    #[arg(long)]
    spec_dir: PathBuf,
    /// Main spec file, relative to the spec directory
    #[arg(long)]
    main: PathBuf,
    /// Output directory
    #[arg(long)]
    out: Option<PathBuf>,
}

impl From<SpecArgs> for Target {
    fn from(args: SpecArgs) -> Self {
        Target { spec_dir: args.spec_dir, main: args.main, out: args.out }
    }
}

/// Target language and platform arguments.
#[derive(Args, Debug)]
struct ClientArgs {
    #[command(flatten)]
    spec: SpecArgs,
    /// Client language (cpp, csharp, java, js, py)
    #[arg(long)]
    language: ClientLanguage,
    /// Target platform (windows, linux, macos); defaults to the host
    #[arg(long)]
    platform: Option<ClientPlatform>,
}

/// Available weft commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a spec to the common representation
    Common {
        #[command(flatten)]
        spec: SpecArgs,
        /// Translator executable, overriding the configured one
        #[arg(long)]
        translator: Option<PathBuf>,
    },
    /// Generate a service client and print its linkage descriptor
    Client(ClientArgs),
    /// Generate a service skeleton
    Sketch(ClientArgs),
    /// List the supported client languages
    Languages,
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    logging::init(&config.logging.level, config.logging.file.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.cmd {
        Commands::Common { spec, translator } =>
            run_common(&config, &spec.into(), translator.as_deref(), &mut out)?,
        Commands::Client(args) => {
            let platform = args.platform.unwrap_or_else(ClientPlatform::host);
            run_client(&config, &args.spec.into(), args.language, platform, &mut out)?
        }
        Commands::Sketch(args) => {
            let platform = args.platform.unwrap_or_else(ClientPlatform::host);
            run_sketch(&config, &args.spec.into(), args.language, platform, &mut out)?
        }
        Commands::Languages => list_languages(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Main entry point for the weft application.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
