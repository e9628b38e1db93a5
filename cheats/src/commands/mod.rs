use crate::config::Config;
use crate::diagnostic_emitter::CheatsResult;
use cheats_core::errors::{CoreError, ParseError};
use cheats_core::io::read_file;
use cheats_core::model::GameList;
use fs_err as fs;
use std::path::Path;

pub use check::*;
pub use format::*;
pub use list::*;
pub use version::*;

mod check;
mod format;
mod list;
mod version;

/// A parse error together with the file it was found in
#[derive(Debug, thiserror::Error)]
#[error("{path}: {error}")]
pub struct SourceError {
    pub path: String,
    pub text: String,
    pub error: ParseError,
}

/// Reads and parses a single cheat list.
///
/// Parse errors come back as a [SourceError] holding the file's text, for rendering.
pub fn load_games(path: &Path, cfg: &Config) -> CheatsResult<GameList> {
    let mut games = GameList::new();
    match read_file(path, &mut games, &cfg.parser) {
        Ok(()) => Ok(games),
        Err(CoreError::Parse(error)) => {
            let text = String::from_utf8_lossy(&fs::read(path)?).into_owned();
            Err(SourceError {
                path: path.display().to_string(),
                text,
                error,
            }
            .into())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
pub(crate) fn test_data<P: AsRef<Path>>(name: P) -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}
