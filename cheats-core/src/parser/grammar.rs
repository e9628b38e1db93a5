use super::TokenKind;
use bitflags::bitflags;

bitflags! {
    /// A set of token kinds
    pub struct TokenSet: u8 {
        const GAME_TITLE = 0b001;
        const CHEAT_DESCRIPTION = 0b010;
        const CHEAT_CODE = 0b100;
    }
}

impl From<TokenKind> for TokenSet {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::GameTitle => TokenSet::GAME_TITLE,
            TokenKind::CheatDescription => TokenSet::CHEAT_DESCRIPTION,
            TokenKind::CheatCode => TokenSet::CHEAT_CODE,
        }
    }
}

/// Tracks which token kinds may appear on the next significant line.
///
/// Input must open with a game title. A game may be empty, but a code is only allowed once a
/// cheat description has been seen. There is no final state: input may end anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    expected: TokenSet,
}

impl Default for Grammar {
    fn default() -> Self {
        Self {
            expected: TokenSet::GAME_TITLE,
        }
    }
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expected(&self) -> TokenSet {
        self.expected
    }

    pub fn permits(&self, kind: TokenKind) -> bool {
        self.expected.contains(kind.into())
    }

    /// Moves on after a token of `kind` was consumed
    pub fn advance(&mut self, kind: TokenKind) {
        self.expected = next_expected(kind);
    }
}

fn next_expected(kind: TokenKind) -> TokenSet {
    match kind {
        TokenKind::GameTitle => TokenSet::GAME_TITLE | TokenSet::CHEAT_DESCRIPTION,
        TokenKind::CheatDescription | TokenKind::CheatCode => TokenSet::all(),
    }
}
