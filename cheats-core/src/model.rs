//! The ownership hierarchy is strictly tree-shaped:
//!
//! ```text
//! GameList
//! |- Game
//! |  |- Cheat
//! |  |  |- Code
//! |  |  |- ...
//! |  |- ...
//! |- ...
//! ```
//!
//! Every node is owned by exactly one parent. Removing a node hands back the detached subtree;
//! dropping it (or the list) destroys everything beneath.
use crate::parser::{classify, is_space, TokenKind};
use derive_more::Display;
use serde::Serialize;

/// Max game title length, in characters
pub const GAME_TITLE_MAX: usize = 80;
/// Max cheat description length, in characters
pub const CHEAT_DESC_MAX: usize = 80;

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => {
            log::debug!("Truncating '{}' to {} characters", text, max);
            text[..idx].to_string()
        }
        None => text.to_string(),
    }
}

/// Truncates a description so that, once written, it is read back as the same description.
///
/// A cut can leave trailing whitespace, or a prefix that reads as a game title or a code line.
/// Characters are dropped from the end until neither is the case.
fn truncate_description(text: &str) -> String {
    let mut description = truncate(text, CHEAT_DESC_MAX);
    if description.len() == text.len() {
        return description;
    }

    loop {
        let len = description.trim_end_matches(is_space).len();
        description.truncate(len);
        if description.is_empty() || classify(&description) == TokenKind::CheatDescription {
            return description;
        }
        description.pop();
    }
}

/// An address/value pair. The tag carries arbitrary caller-defined information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{:08X} {:08X}", address, value)]
pub struct Code {
    pub address: u32,
    pub value: u32,
    pub tag: u32,
}

impl Code {
    pub fn new(address: u32, value: u32) -> Self {
        Self {
            address,
            value,
            tag: 0,
        }
    }

    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cheat {
    description: String,
    codes: Vec<Code>,
    pub tag: u32,
}

impl Cheat {
    /// Creates a cheat without codes. The description is cut off after at most [CHEAT_DESC_MAX]
    /// characters.
    pub fn new<S: AsRef<str>>(description: S) -> Self {
        Self {
            description: truncate_description(description.as_ref()),
            codes: vec![],
            tag: 0,
        }
    }

    pub fn with_codes<I: IntoIterator<Item = Code>>(mut self, codes: I) -> Self {
        self.codes.extend(codes);
        self
    }

    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    pub fn codes_mut(&mut self) -> &mut Vec<Code> {
        &mut self.codes
    }

    pub fn push_code(&mut self, code: Code) {
        self.codes.push(code);
    }

    pub fn remove_code(&mut self, index: usize) -> Option<Code> {
        if index < self.codes.len() {
            Some(self.codes.remove(index))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    title: String,
    cheats: Vec<Cheat>,
    pub tag: u32,
}

impl Game {
    /// Creates a game without cheats. The title is cut off after [GAME_TITLE_MAX] characters.
    pub fn new<S: AsRef<str>>(title: S) -> Self {
        Self {
            title: truncate(title.as_ref(), GAME_TITLE_MAX),
            cheats: vec![],
            tag: 0,
        }
    }

    pub fn with_cheats<I: IntoIterator<Item = Cheat>>(mut self, cheats: I) -> Self {
        self.cheats.extend(cheats);
        self
    }

    pub fn with_tag(mut self, tag: u32) -> Self {
        self.tag = tag;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cheats(&self) -> &[Cheat] {
        &self.cheats
    }

    pub fn cheats_mut(&mut self) -> &mut Vec<Cheat> {
        &mut self.cheats
    }

    pub fn push_cheat(&mut self, cheat: Cheat) {
        self.cheats.push(cheat);
    }

    /// Detaches the cheat at `index`, together with its codes
    pub fn remove_cheat(&mut self, index: usize) -> Option<Cheat> {
        if index < self.cheats.len() {
            Some(self.cheats.remove(index))
        } else {
            None
        }
    }

    pub fn num_codes(&self) -> usize {
        self.cheats.iter().map(|cheat| cheat.codes.len()).sum()
    }
}

/// An ordered list of games. Insertion order is kept; titles need not be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GameList {
    games: Vec<Game>,
}

impl GameList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.games.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Game> {
        self.games.iter_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Game> {
        self.games.get_mut(index)
    }

    pub fn first(&self) -> Option<&Game> {
        self.games.first()
    }

    pub fn last(&self) -> Option<&Game> {
        self.games.last()
    }

    /// Appends a game to the end of the list
    pub fn push(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Inserts a game at the head of the list
    pub fn push_front(&mut self, game: Game) {
        self.games.insert(0, game);
    }

    /// Inserts a game at `index`, shifting everything after it.
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, game: Game) {
        self.games.insert(index, game);
    }

    /// Moves all games of `other` to the end of this list, leaving `other` empty
    pub fn append(&mut self, other: &mut GameList) {
        self.games.append(&mut other.games);
    }

    /// Detaches the game at `index`, together with all its cheats and codes
    pub fn remove(&mut self, index: usize) -> Option<Game> {
        if index < self.games.len() {
            Some(self.games.remove(index))
        } else {
            None
        }
    }

    /// Detaches the first game titled `title`
    pub fn remove_by_title(&mut self, title: &str) -> Option<Game> {
        self.position_by_title(title).and_then(|index| self.remove(index))
    }

    /// Destroys every game, cheat and code in the list
    pub fn clear(&mut self) {
        self.games.clear();
    }

    pub fn position_by_title(&self, title: &str) -> Option<usize> {
        self.games.iter().position(|game| game.title == title)
    }

    /// Returns the first game in insertion order titled exactly `title`
    pub fn find_by_title(&self, title: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.title == title)
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Game> {
        self.games.iter_mut().find(|game| game.title == title)
    }

    /// Stable sort by title. Games with equal titles keep their relative order.
    pub fn sort_by_title(&mut self) {
        self.games.sort_by(|a, b| a.title.cmp(&b.title));
    }

    pub fn num_cheats(&self) -> usize {
        self.games.iter().map(|game| game.cheats.len()).sum()
    }

    pub fn num_codes(&self) -> usize {
        self.games.iter().map(Game::num_codes).sum()
    }
}

impl IntoIterator for GameList {
    type Item = Game;
    type IntoIter = std::vec::IntoIter<Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.into_iter()
    }
}

impl<'a> IntoIterator for &'a GameList {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

impl<'a> IntoIterator for &'a mut GameList {
    type Item = &'a mut Game;
    type IntoIter = std::slice::IterMut<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter_mut()
    }
}

impl std::iter::FromIterator<Game> for GameList {
    fn from_iter<I: IntoIterator<Item = Game>>(iter: I) -> Self {
        Self {
            games: iter.into_iter().collect(),
        }
    }
}

impl Extend<Game> for GameList {
    fn extend<I: IntoIterator<Item = Game>>(&mut self, iter: I) {
        self.games.extend(iter);
    }
}
