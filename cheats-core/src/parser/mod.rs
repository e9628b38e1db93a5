use crate::errors::{CoreResult, ErrorKind, ParseError};
use crate::model::{Cheat, Code, Game, GameList};
use crate::options::ParserOptions;
use std::io::BufRead;

pub use grammar::*;
pub use source::*;
pub use token::*;

/// Which token kinds may follow which
mod grammar;
/// Where input lines come from
pub mod source;
/// Line screening and classification
mod token;

/// Parses cheat list text from `source`, appending every game found to `games`.
///
/// Parsing stops at the first bad line. Games, cheats and codes read before that line are left
/// in `games`, so use a fresh list before trying again.
pub fn parse<S: LineSource>(source: S, games: &mut GameList) -> CoreResult<()> {
    parse_with_options(source, games, &ParserOptions::default())
}

pub fn parse_with_options<S: LineSource>(
    mut source: S,
    games: &mut GameList,
    options: &ParserOptions,
) -> CoreResult<()> {
    let mut ctx = ParserContext::new(games, options);
    loop {
        let line = match source.next_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(ctx.read_error(e).into()),
        };
        ctx.parse_line(&line)?;
    }
    log::trace!("Parsed {} line(s)", ctx.line_number);
    Ok(())
}

pub fn parse_str(src: &str, games: &mut GameList) -> CoreResult<()> {
    parse(StrSource::new(src), games)
}

pub fn parse_reader<R: BufRead>(reader: R, games: &mut GameList) -> CoreResult<()> {
    parse(ReaderSource::new(reader), games)
}

struct ParserContext<'a> {
    games: &'a mut GameList,
    options: &'a ParserOptions,
    grammar: Grammar,
    line_number: usize,
    /// Index into `games` of the game opened by this parse, if any
    game: Option<usize>,
    /// Index into the current game's cheats
    cheat: Option<usize>,
}

impl<'a> ParserContext<'a> {
    fn new(games: &'a mut GameList, options: &'a ParserOptions) -> Self {
        Self {
            games,
            options,
            grammar: Grammar::new(),
            line_number: 0,
            game: None,
            cheat: None,
        }
    }

    fn parse_line(&mut self, raw: &str) -> Result<(), ParseError> {
        self.line_number += 1;

        if raw.chars().count() > self.options.max_line_length {
            return Err(self.error(
                ErrorKind::LineTooLong,
                format!(
                    "line exceeds the maximum length of {} characters",
                    self.options.max_line_length
                ),
            ));
        }

        let line = screen(raw);
        if line.is_empty() {
            return Ok(());
        }

        let token = tokenize(line);
        let kind = token.kind();
        log::trace!("{:>4}  {:<17}  {}", self.line_number, kind, line);

        if !self.grammar.permits(kind) {
            return Err(self.error(
                ErrorKind::GrammarViolation,
                format!("{} invalid here", kind),
            ));
        }

        match token {
            Token::GameTitle(title) => self.open_game(title),
            Token::CheatDescription(description) => self.open_cheat(description)?,
            Token::CheatCode(words) => {
                let code = self.make_code(&words)?;
                self.add_code(code)?;
            }
        }

        self.grammar.advance(kind);
        Ok(())
    }

    fn open_game(&mut self, title: &str) {
        log::debug!("Line {}: game '{}'", self.line_number, title);
        self.games.push(Game::new(title));
        self.game = Some(self.games.len() - 1);
        self.cheat = None;
    }

    fn open_cheat(&mut self, description: &str) -> Result<(), ParseError> {
        let line_number = self.line_number;
        let game = self.current_game().ok_or_else(|| {
            ParseError::new(
                ErrorKind::ConstructionFailure,
                line_number,
                "cheat description without a game",
            )
        })?;
        game.push_cheat(Cheat::new(description));
        let cheat = game.cheats().len() - 1;
        self.cheat = Some(cheat);
        Ok(())
    }

    fn add_code(&mut self, code: Code) -> Result<(), ParseError> {
        let line_number = self.line_number;
        let cheat = self.current_cheat().ok_or_else(|| {
            ParseError::new(
                ErrorKind::ConstructionFailure,
                line_number,
                "cheat code without a cheat description",
            )
        })?;
        cheat.push_code(code);
        Ok(())
    }

    fn current_game(&mut self) -> Option<&mut Game> {
        match self.game {
            Some(idx) => self.games.get_mut(idx),
            None => None,
        }
    }

    fn current_cheat(&mut self) -> Option<&mut Cheat> {
        let cheat = self.cheat?;
        self.current_game()?.cheats_mut().get_mut(cheat)
    }

    fn make_code(&self, words: &CodeWords) -> Result<Code, ParseError> {
        let tag = match words.tag {
            Some(tag) => self.parse_hex(tag)?,
            None => 0,
        };
        let address = self.parse_hex(words.address)?;
        let value = self.parse_hex(words.value)?;
        Ok(Code::new(address, value).with_tag(tag))
    }

    /// Parses a hex word, keeping only the low 32 bits of overly long words
    fn parse_hex(&self, word: &str) -> Result<u32, ParseError> {
        let mut result: u32 = 0;
        let mut overflow = false;
        for c in word.chars() {
            let digit = c.to_digit(16).ok_or_else(|| {
                self.error(
                    ErrorKind::MalformedCode,
                    format!("'{}' is not a hexadecimal number", word),
                )
            })?;
            overflow |= result >> 28 != 0;
            result = (result << 4) | digit;
        }

        if overflow {
            log::warn!(
                "Line {}: '{}' does not fit in 32 bits, truncated to {:08X}",
                self.line_number,
                word,
                result
            );
        }
        Ok(result)
    }

    /// A failure to read the line following the last one parsed
    fn read_error(&self, e: std::io::Error) -> ParseError {
        ParseError::new(ErrorKind::IoFailure, self.line_number + 1, e.to_string())
    }

    fn error<M: Into<String>>(&self, kind: ErrorKind, message: M) -> ParseError {
        ParseError::new(kind, self.line_number, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CoreError;
    use cheats_testing::enable_default_tracing;

    fn parse_ok(src: &str) -> CoreResult<GameList> {
        enable_default_tracing();
        let mut games = GameList::new();
        parse_str(src, &mut games)?;
        Ok(games)
    }

    fn parse_err(src: &str) -> (GameList, ParseError) {
        enable_default_tracing();
        let mut games = GameList::new();
        match parse_str(src, &mut games) {
            Err(CoreError::Parse(e)) => (games, e),
            other => panic!("expected a parse error, got: {:?}", other),
        }
    }

    #[test]
    fn two_games() -> CoreResult<()> {
        let games = parse_ok(
            r#""Game A"
Cheat X
11112222 33334444
"Game B"
Cheat Y
"#,
        )?;

        assert_eq!(games.len(), 2);
        let a = games.get(0).unwrap();
        assert_eq!(a.title(), "Game A");
        assert_eq!(a.cheats().len(), 1);
        assert_eq!(a.cheats()[0].description(), "Cheat X");
        assert_eq!(a.cheats()[0].codes(), &[Code::new(0x11112222, 0x33334444)]);

        let b = games.get(1).unwrap();
        assert_eq!(b.title(), "Game B");
        assert_eq!(b.cheats().len(), 1);
        assert_eq!(b.cheats()[0].description(), "Cheat Y");
        assert!(b.cheats()[0].codes().is_empty());
        Ok(())
    }

    #[test]
    fn three_word_codes_carry_a_tag() -> CoreResult<()> {
        let games = parse_ok(
            r#""Game"
Cheat
00 AABBCCDD 11223344
F10 00B80000 00B8DA00
"#,
        )?;
        let codes = games.get(0).unwrap().cheats()[0].codes();
        assert_eq!(codes[0], Code::new(0xaabbccdd, 0x11223344));
        assert_eq!(codes[1], Code::new(0x00b80000, 0x00b8da00).with_tag(0xf10));
        Ok(())
    }

    #[test]
    fn empty_games_are_allowed() -> CoreResult<()> {
        let games = parse_ok("\"A\"\n\"B\"\n")?;
        assert_eq!(games.len(), 2);
        assert!(games.iter().all(|g| g.cheats().is_empty()));
        Ok(())
    }

    #[test]
    fn empty_input() -> CoreResult<()> {
        assert!(parse_ok("")?.is_empty());
        assert!(parse_ok("\n  \n// nothing here\n")?.is_empty());
        Ok(())
    }

    #[test]
    fn comments_and_whitespace_are_screened() -> CoreResult<()> {
        let games = parse_ok(
            "// header\n   \"Game\"   // the game\n\tInf health // cheat\n  12345678   9ABCDEF0  \n",
        )?;
        let game = games.get(0).unwrap();
        assert_eq!(game.title(), "Game");
        assert_eq!(game.cheats()[0].description(), "Inf health");
        assert_eq!(
            game.cheats()[0].codes(),
            &[Code::new(0x12345678, 0x9abcdef0)]
        );
        Ok(())
    }

    #[test]
    fn first_line_must_be_a_title() {
        let (games, err) = parse_err("Loose description\n\"Game A\"\n");
        assert_eq!(err.kind(), ErrorKind::GrammarViolation);
        assert_eq!(err.line(), 1);
        assert_eq!(err.message(), "cheat description invalid here");
        assert!(games.is_empty());

        let (_, err) = parse_err("12345678 00000000\n");
        assert_eq!(err.line(), 1);
        assert_eq!(err.message(), "cheat code invalid here");
    }

    #[test]
    fn code_needs_a_cheat() {
        let (games, err) = parse_err("\"Game\"\n12345678 00000000\n");
        assert_eq!(err.kind(), ErrorKind::GrammarViolation);
        assert_eq!(err.line(), 2);
        assert_eq!(err.to_string(), "line 2: cheat code invalid here");
        assert_eq!(games.len(), 1);
    }

    #[test]
    fn skipped_lines_still_count() {
        let (_, err) = parse_err("// comment\n\n   \nDescription\n");
        assert_eq!(err.line(), 4);

        let (_, err) = parse_err("\"Game\"\r\n\r\n// x\r\n\r\n0 1\r\n");
        assert_eq!(err.line(), 5);
    }

    #[test]
    fn partial_result_is_kept() {
        let (games, err) = parse_err("\"A\"\nCheat\n1 2\n\"B\"\n3 4\n\"C\"\n");
        assert_eq!(err.line(), 5);
        assert_eq!(games.len(), 2);
        assert_eq!(games.num_codes(), 1);
    }

    #[test]
    fn overlong_lines_are_rejected() {
        let src = format!("\"Game\"\n{}\n", "x".repeat(512));
        let (_, err) = parse_err(&src);
        assert_eq!(err.kind(), ErrorKind::LineTooLong);
        assert_eq!(err.line(), 2);

        let src = format!("\"Game\"\n{}\n", "x".repeat(511));
        assert!(parse_ok(&src).is_ok());
    }

    #[test]
    fn custom_max_line_length() {
        let mut games = GameList::new();
        let options = ParserOptions { max_line_length: 8 };
        let err = parse_with_options(
            StrSource::new("\"Game\"\n\"Long game\"\n"),
            &mut games,
            &options,
        )
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::LineTooLong);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn long_hex_words_are_truncated() -> CoreResult<()> {
        let games = parse_ok("\"Game\"\nCheat\n1DEADBEEF 123456789\n")?;
        assert_eq!(
            games.get(0).unwrap().cheats()[0].codes(),
            &[Code::new(0xdeadbeef, 0x23456789)]
        );
        Ok(())
    }

    #[test]
    fn long_titles_are_truncated() -> CoreResult<()> {
        let title = "T".repeat(100);
        let games = parse_ok(&format!("\"{}\"\n", title))?;
        assert_eq!(games.get(0).unwrap().title(), &title[..80]);
        Ok(())
    }

    #[test]
    fn parse_appends_to_existing_games() -> CoreResult<()> {
        let mut games = GameList::new();
        games.push(Game::new("Existing"));
        parse_str("\"New\"\nCheat\n", &mut games)?;
        assert_eq!(games.len(), 2);
        assert!(games.get(0).unwrap().cheats().is_empty());
        assert_eq!(games.get(1).unwrap().cheats().len(), 1);

        // A description can never extend a game from an earlier parse
        let err = parse_str("Cheat\n", &mut games).err().unwrap();
        assert_eq!(err.line(), Some(1));
        Ok(())
    }

    #[test]
    fn reader_input() -> CoreResult<()> {
        let mut games = GameList::new();
        parse_reader("\"Game\"\r\nCheat\r\n1 2\r\n".as_bytes(), &mut games)?;
        assert_eq!(games.num_codes(), 1);
        Ok(())
    }

    #[test]
    fn invalid_utf8_is_replaced() -> CoreResult<()> {
        let mut games = GameList::new();
        let bytes: &[u8] = &[b'"', b'A', b'"', b'\n', b'C', 0xe9, b'\n'];
        parse_reader(bytes, &mut games)?;
        assert_eq!(games.get(0).unwrap().cheats()[0].description(), "C\u{fffd}");
        Ok(())
    }

    struct FailingReader;

    impl std::io::Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "source closed",
            ))
        }
    }

    #[test]
    fn read_failures_are_located() {
        use std::io::Read;

        let mut games = GameList::new();
        let reader = std::io::BufReader::new("\"A\"\n".as_bytes().chain(FailingReader));
        let err = parse_reader(reader, &mut games).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.message(), "source closed");
        assert_eq!(games.len(), 1);
    }

    #[test]
    fn guards_against_missing_parents() {
        let mut games = GameList::new();
        let options = ParserOptions::default();
        let mut ctx = ParserContext::new(&mut games, &options);
        ctx.line_number = 3;
        assert_eq!(
            ctx.open_cheat("Cheat").err().map(|e| e.kind()),
            Some(ErrorKind::ConstructionFailure)
        );
        assert_eq!(
            ctx.add_code(Code::new(1, 2)).err().map(|e| e.line()),
            Some(3)
        );
    }

    #[test]
    fn malformed_hex_words() {
        let mut games = GameList::new();
        let options = ParserOptions::default();
        let ctx = ParserContext::new(&mut games, &options);
        let err = ctx
            .make_code(&CodeWords {
                tag: None,
                address: "12",
                value: "XY",
            })
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::MalformedCode);
        assert_eq!(err.message(), "'XY' is not a hexadecimal number");
    }
}
