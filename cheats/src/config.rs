use crate::diagnostic_emitter::CheatsResult;
use cheats_core::options::{ParserOptions, WriterOptions};
use fs_err as fs;
use serde::Deserialize;
use std::path::Path;

/// Looked up in the working directory when no configuration file is given
pub const CONFIG_FILE: &str = "cheats.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
    pub parser: ParserOptions,
    pub writer: WriterOptions,
}

impl Config {
    pub fn from_toml(toml: &str) -> CheatsResult<Config> {
        Ok(toml::from_str(toml)?)
    }

    /// Loads `path`, or [CONFIG_FILE] in `root` if that exists, or the defaults
    pub fn load(path: Option<&Path>, root: &Path) -> CheatsResult<Config> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let path = root.join(CONFIG_FILE);
                if !path.exists() {
                    return Ok(Config::default());
                }
                path
            }
        };

        log::debug!("Using configuration: {:?}", path);
        Config::from_toml(&fs::read_to_string(&path)?)
    }
}
