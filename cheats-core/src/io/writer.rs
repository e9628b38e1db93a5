use crate::model::{Code, Game, GameList};
use crate::options::WriterOptions;
use std::io::Write;

/// Written after the contents of every game
pub const GAME_SEPARATOR: &str = "//--------";

/// Writes `games` in the canonical text format.
///
/// Comments and blank lines of the parsed input are not reproduced. Tags are dropped unless
/// [WriterOptions::emit_tags] is set. A failing sink aborts the write, leaving it partially written.
pub fn write<W: Write>(
    games: &GameList,
    sink: &mut W,
    options: &WriterOptions,
) -> std::io::Result<()> {
    for game in games {
        sink.write_all(game_text(game, options).as_bytes())?;
    }
    Ok(())
}

pub fn to_string(games: &GameList, options: &WriterOptions) -> String {
    games.iter().map(|game| game_text(game, options)).collect()
}

fn game_text(game: &Game, options: &WriterOptions) -> String {
    let mut lines = vec![format!("\"{}\"", game.title())];
    for cheat in game.cheats() {
        lines.push(cheat.description().to_string());
        lines.extend(cheat.codes().iter().map(|code| code_text(code, options)));
    }

    format!("{}\n\n{}\n\n", lines.join("\n"), GAME_SEPARATOR)
}

fn code_text(code: &Code, options: &WriterOptions) -> String {
    if options.emit_tags && code.tag != 0 {
        format!("{:08X} {}", code.tag, code)
    } else {
        code.to_string()
    }
}
