use crate::commands::load_games;
use crate::config::Config;
use crate::diagnostic_emitter::CheatsResult;
use std::path::PathBuf;

/// Checks that cheat list file(s) are well-formed
#[derive(argh::FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "check")]
pub struct CheckArgs {
    /// the file(s) to check
    #[argh(positional)]
    pub files: Vec<PathBuf>,
}

pub fn check_command(args: &CheckArgs, cfg: &Config) -> CheatsResult<()> {
    for file in &args.files {
        let games = load_games(file, cfg)?;
        log::info!(
            "{}: {} game(s), {} cheat(s), {} code(s)",
            file.display(),
            games.len(),
            games.num_cheats(),
            games.num_codes()
        );
    }

    Ok(())
}
