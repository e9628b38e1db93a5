use crate::commands::load_games;
use crate::config::Config;
use crate::diagnostic_emitter::CheatsResult;
use crate::utils::render_diff;
use cheats_core::io::{to_string, write_file};
use fs_err as fs;
use std::io::Write;
use std::path::PathBuf;

/// Rewrites a cheat list file in the canonical format
#[derive(argh::FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "format")]
pub struct FormatArgs {
    /// the file to format
    #[argh(positional)]
    pub file: PathBuf,

    /// write the result here instead of back to the input file
    #[argh(option, short = 'o')]
    pub output: Option<PathBuf>,

    /// sort the games by title
    #[argh(switch)]
    pub sort: bool,

    /// only report whether the file is formatted, showing the differences if it is not
    #[argh(switch)]
    pub check: bool,
}

pub fn format_command(
    args: &FormatArgs,
    cfg: &Config,
    use_color: bool,
    out: &mut dyn Write,
) -> CheatsResult<()> {
    let mut games = load_games(&args.file, cfg)?;
    if args.sort {
        games.sort_by_title();
    }

    if args.check {
        let formatted = to_string(&games, &cfg.writer);
        let text = fs::read_to_string(&args.file)?.replace("\r\n", "\n");
        if text != formatted {
            write!(out, "{}", render_diff(&text, &formatted, use_color))?;
            anyhow::bail!("{} is not formatted", args.file.display());
        }
        log::info!("{} is formatted", args.file.display());
        return Ok(());
    }

    let target = args.output.as_ref().unwrap_or(&args.file);
    log::debug!("Writing: {}", target.display());
    write_file(target, &games, &cfg.writer)?;

    Ok(())
}
