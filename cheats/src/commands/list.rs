use crate::commands::load_games;
use crate::config::Config;
use crate::diagnostic_emitter::CheatsResult;
use cheats_core::io::{game_listing, to_listing};
use std::io::Write;
use std::path::PathBuf;

/// Lists the games, cheats and codes in a cheat list file
#[derive(argh::FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "list")]
pub struct ListArgs {
    /// the file to list
    #[argh(positional)]
    pub file: PathBuf,

    /// print JSON instead of text
    #[argh(switch)]
    pub json: bool,

    /// only list the game with this title
    #[argh(option)]
    pub title: Option<String>,
}

pub fn list_command(args: &ListArgs, cfg: &Config, out: &mut dyn Write) -> CheatsResult<()> {
    let games = load_games(&args.file, cfg)?;

    let text = match &args.title {
        Some(title) => {
            let game = games
                .find_by_title(title)
                .ok_or_else(|| anyhow::anyhow!("game not found: \"{}\"", title))?;
            if args.json {
                serde_json::to_string_pretty(game)?
            } else {
                game_listing(game)
            }
        }
        None => {
            if args.json {
                serde_json::to_string_pretty(&games)?
            } else {
                to_listing(&games)
            }
        }
    };

    writeln!(out, "{}", text)?;
    Ok(())
}
