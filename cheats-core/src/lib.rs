/// Games, cheats and codes: the in-memory representation of a cheat list
pub mod model;

/// Turns cheat list text into a [model::GameList]
pub mod parser;

/// Contains code related to IO: writing the canonical format, listings and file wrappers
pub mod io;

/// The main error and result types
pub mod errors;

/// Parser and writer options
pub mod options;

#[cfg(windows)]
/// A platform-specific newline.
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
/// A platform-specific newline
pub const LINE_ENDING: &str = "\n";
