use nom::bytes::complete::take_while1;
use nom::character::complete::hex_digit1;
use nom::combinator::{all_consuming, opt};
use nom::sequence::{preceded, tuple};
use nom::IResult;

/// Marks the start of a comment, which runs until the end of the line
pub const COMMENT_MARKER: &str = "//";

/// The role a single significant input line plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum TokenKind {
    #[strum(serialize = "game title")]
    GameTitle,
    #[strum(serialize = "cheat description")]
    CheatDescription,
    #[strum(serialize = "cheat code")]
    CheatCode,
}

/// The hexadecimal words of a cheat code line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeWords<'a> {
    pub tag: Option<&'a str>,
    pub address: &'a str,
    pub value: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Title without its surrounding quotes
    GameTitle(&'a str),
    CheatDescription(&'a str),
    CheatCode(CodeWords<'a>),
}

impl<'a> Token<'a> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::GameTitle(_) => TokenKind::GameTitle,
            Token::CheatDescription(_) => TokenKind::CheatDescription,
            Token::CheatCode(_) => TokenKind::CheatCode,
        }
    }
}

/// Removes a trailing comment and surrounding whitespace from a raw line
pub fn screen(line: &str) -> &str {
    let line = match line.find(COMMENT_MARKER) {
        Some(idx) => &line[..idx],
        None => line,
    };
    line.trim_matches(is_space)
}

/// Classifies a screened, non-empty line. The first matching rule wins:
/// a quoted title, then a line of two or three hex words, then anything else is a description.
pub fn tokenize(line: &str) -> Token {
    if let Some(title) = game_title(line) {
        Token::GameTitle(title)
    } else if let Some(words) = code_words(line) {
        Token::CheatCode(words)
    } else {
        Token::CheatDescription(line)
    }
}

pub fn classify(line: &str) -> TokenKind {
    tokenize(line).kind()
}

fn game_title(line: &str) -> Option<&str> {
    if line.len() > 2 && line.starts_with('"') && line.ends_with('"') {
        Some(&line[1..line.len() - 1])
    } else {
        None
    }
}

fn code_words(line: &str) -> Option<CodeWords> {
    hex_words(line).ok().map(|(_, words)| match words {
        (address, value, None) => CodeWords {
            tag: None,
            address,
            value,
        },
        (tag, address, Some(value)) => CodeWords {
            tag: Some(tag),
            address,
            value,
        },
    })
}

fn hex_words(input: &str) -> IResult<&str, (&str, &str, Option<&str>)> {
    all_consuming(tuple((
        hex_digit1,
        preceded(whitespace, hex_digit1),
        opt(preceded(whitespace, hex_digit1)),
    )))(input)
}

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while1(is_space)(input)
}

/// The characters C's `isspace` accepts
pub(crate) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn game_titles() {
        assert_eq!(tokenize(r#""A""#), Token::GameTitle("A"));
        assert_eq!(
            tokenize(r#""TimeSplitters PAL""#),
            Token::GameTitle("TimeSplitters PAL")
        );
        // No unescaping happens
        assert_eq!(tokenize(r#""a"b""#), Token::GameTitle(r#"a"b"#));
    }

    #[test]
    fn game_title_needs_more_than_two_characters() {
        assert_eq!(classify(r#""""#), TokenKind::CheatDescription);
        assert_eq!(classify(r#"""#), TokenKind::CheatDescription);
        assert_eq!(classify(r#""open"#), TokenKind::CheatDescription);
    }

    #[test]
    fn two_word_codes() {
        assert_eq!(
            tokenize("AB CD"),
            Token::CheatCode(CodeWords {
                tag: None,
                address: "AB",
                value: "CD"
            })
        );
        assert_eq!(classify("10B8DAFA 00003F00"), TokenKind::CheatCode);
        assert_eq!(classify("10b8dafa\t\t00003f00"), TokenKind::CheatCode);
    }

    #[test]
    fn three_word_codes() {
        assert_eq!(
            tokenize("AB CD EF"),
            Token::CheatCode(CodeWords {
                tag: Some("AB"),
                address: "CD",
                value: "EF"
            })
        );
        assert_eq!(classify("F10 00B80000 00B8DA00"), TokenKind::CheatCode);
    }

    #[test]
    fn non_codes_fall_back_to_descriptions() {
        assert_eq!(classify("AB CD EF GH"), TokenKind::CheatDescription);
        assert_eq!(classify("AB CD EF 01"), TokenKind::CheatDescription);
        assert_eq!(classify("ABCD"), TokenKind::CheatDescription);
        assert_eq!(classify("Max cash"), TokenKind::CheatDescription);
        assert_eq!(classify("Face"), TokenKind::CheatDescription);
        assert_eq!(classify("Dead Beef"), TokenKind::CheatCode);
    }

    #[test]
    fn screening() {
        assert_eq!(screen("  \"Game\"  // comment"), "\"Game\"");
        assert_eq!(screen("// only a comment"), "");
        assert_eq!(screen("\t12345678 9ABCDEF0\r"), "12345678 9ABCDEF0");
        assert_eq!(screen("   "), "");
        assert_eq!(screen("a / b"), "a / b");
        // Comments are cut even inside quotes
        assert_eq!(screen(r#""http://example""#), r#""http:"#);
    }

    #[test]
    fn token_kind_names() {
        let names: Vec<String> = TokenKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            vec!["game title", "cheat description", "cheat code"]
        );
    }
}
