use crate::errors::CoreResult;
use crate::model::GameList;
use crate::options::{ParserOptions, WriterOptions};
use crate::parser::{parse_with_options, ReaderSource};
use crate::LINE_ENDING;
use fs_err as fs;
use std::io::BufReader;
use std::path::Path;

pub use listing::*;
pub use writer::*;

/// Human-readable overviews of a game list
mod listing;
/// The canonical text format
mod writer;

/// Parses the cheat list file at `path`, appending its games to `games`
pub fn read_file<P: AsRef<Path>>(
    path: P,
    games: &mut GameList,
    options: &ParserOptions,
) -> CoreResult<()> {
    log::trace!("Reading: {:?}", path.as_ref());
    let file = fs::File::open(path.as_ref())?;
    let source = ReaderSource::with_max_line_length(BufReader::new(file), options.max_line_length);
    parse_with_options(source, games, options)
}

/// Writes `games` to the file at `path` in the canonical format, replacing its contents.
/// Lines end in the platform's [LINE_ENDING].
pub fn write_file<P: AsRef<Path>>(
    path: P,
    games: &GameList,
    options: &WriterOptions,
) -> CoreResult<()> {
    log::trace!("Writing: {:?}", path.as_ref());
    let text = to_string(games, options).replace('\n', LINE_ENDING);
    fs::write(path.as_ref(), text)?;
    Ok(())
}
