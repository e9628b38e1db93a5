use crate::commands::*;
use crate::config::Config;
use crate::diagnostic_emitter::{CheatsResult, DiagnosticEmitter};
use std::path::PathBuf;
use std::str::FromStr;

mod commands;
mod config;
mod diagnostic_emitter;
mod utils;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorStyle {
    Short,
    Medium,
    Rich,
}

impl FromStr for ErrorStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(ErrorStyle::Short),
            "medium" => Ok(ErrorStyle::Medium),
            "rich" => Ok(ErrorStyle::Rich),
            _ => Err(format!("unknown error style: {}", s)),
        }
    }
}

/// Reads, checks and rewrites cheat lists
#[derive(argh::FromArgs, PartialEq, Debug)]
pub struct Args {
    /// increase the level of verbosity (may be repeated)
    #[argh(switch, short = 'v')]
    verbose: u64,

    /// disable colorized output
    #[argh(switch)]
    no_color: bool,

    /// how errors are shown: short, medium or rich
    #[argh(option, default = "ErrorStyle::Rich")]
    error_style: ErrorStyle,

    /// configuration file to use instead of ./cheats.toml
    #[argh(option)]
    config: Option<PathBuf>,

    #[argh(subcommand)]
    command: Command,
}

#[derive(argh::FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum Command {
    Check(CheckArgs),
    List(ListArgs),
    Format(FormatArgs),
    Version(VersionArgs),
}

fn run(args: &Args) -> CheatsResult<()> {
    let root = std::env::current_dir()?;
    let cfg = Config::load(args.config.as_deref(), &root)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        Command::Check(check) => check_command(check, &cfg),
        Command::List(list) => list_command(list, &cfg, &mut out),
        Command::Format(format) => format_command(format, &cfg, !args.no_color, &mut out),
        Command::Version(_) => version_command(),
    }
}

fn main() {
    #[cfg(windows)]
    let _ = ansi_term::enable_ansi_support();

    let args: Args = argh::from_env();

    if let Err(e) = loggerv::Logger::new()
        .base_level(log::Level::Info)
        .verbosity(args.verbose)
        .colors(!args.no_color)
        .module_path(false)
        .init()
    {
        eprintln!("could not initialize logging: {}", e);
    }

    if let Err(e) = run(&args) {
        DiagnosticEmitter::stderr(&args).emit(&e);
        std::process::exit(1);
    }
}
