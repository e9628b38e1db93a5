use crate::model::{Game, GameList};
use crate::LINE_ENDING;
use itertools::Itertools;

const INDENT: &str = "    ";

fn count(n: usize, noun: &str) -> String {
    match n {
        1 => format!("1 {}", noun),
        _ => format!("{} {}s", n, noun),
    }
}

/// Renders a human-readable, indented overview of `games`
pub fn to_listing(games: &GameList) -> String {
    games.iter().map(game_listing).join(LINE_ENDING)
}

pub fn game_listing(game: &Game) -> String {
    let mut result = vec![];
    result.push(format!(
        "\"{}\" ({})",
        game.title(),
        count(game.cheats().len(), "cheat")
    ));

    for cheat in game.cheats() {
        result.push(format!(
            "{}{} ({})",
            INDENT,
            cheat.description(),
            count(cheat.codes().len(), "code")
        ));
        for code in cheat.codes() {
            let mut line = format!("{}{}{}", INDENT, INDENT, code);
            if code.tag != 0 {
                line += format!("  tag {:08X}", code.tag).as_str();
            }
            result.push(line);
        }
    }

    result.join(LINE_ENDING)
}
