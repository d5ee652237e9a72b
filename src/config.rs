use serde::Deserialize;
use std::{fmt, fs, io, path};

use crate::file_paths;

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub prompt: String,
    pub uppercase_hex: bool,
    pub show_bit_length: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            uppercase_hex: false,
            show_bit_length: false,
        }
    }
}

pub const DEFAULT_CONFIG_FILE: &str = r#"# Default ctint configuration file
#
# This file lives at $CTINT_CONFIG_DIR/config.toml, or in the platform
# config directory (e.g. ~/.config/ctint/config.toml on Linux).

# The prompt shown in interactive mode
prompt = "> "

# Print results as 0xABCD instead of 0xabcd
uppercase_hex = false

# Append the bit length of every result, e.g. `0xff (8 bits)`
show_bit_length = false
"#;

enum ReadConfigErr {
    FileReadingError(io::Error),
    DeserializationError(toml::de::Error),
}

impl fmt::Display for ReadConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileReadingError(e) => write!(f, "unable to read file: {e}"),
            Self::DeserializationError(e) => write!(f, "{e}"),
        }
    }
}

impl From<io::Error> for ReadConfigErr {
    fn from(err: io::Error) -> Self {
        Self::FileReadingError(err)
    }
}

impl From<toml::de::Error> for ReadConfigErr {
    fn from(err: toml::de::Error) -> Self {
        Self::DeserializationError(err)
    }
}

fn parse_config_file(path: &path::Path) -> Result<Config, ReadConfigErr> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn read_config_file() -> Config {
    let Some(path) = file_paths::get_config_file_location() else {
        return Config::default();
    };
    match parse_config_file(&path) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            config
        }
        Err(ReadConfigErr::FileReadingError(e)) if e.kind() == io::ErrorKind::NotFound => {
            Config::default()
        }
        Err(e) => {
            eprintln!("Invalid config file in {}: {e}", path.display());
            eprintln!("Using default config file:\n{DEFAULT_CONFIG_FILE}");
            Config::default()
        }
    }
}

pub fn read() -> Config {
    read_config_file()
}
