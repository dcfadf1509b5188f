use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use thiserror::Error;
use tracing::{info, warn};

pub const CONFIG_ENV: &str = "TOUCH_TYPING_CONFIG";
pub const CONFIG_FILE: &str = "touch_typing.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("couldn't read config file")]
    Io(#[from] io::Error),
    #[error("couldn't parse config file")]
    Parse(#[from] toml::de::Error),
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub theme: Theme,
    pub text: TextConfig,
    pub keyboard: KeyboardConfig,
    pub terminal: TerminalConfig,
}

#[derive(Serialize, Deserialize, Debug, SmartDefault, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    #[default("Touch Typing".into())]
    pub title: String,
    #[default(500)]
    pub width: u32,
    #[default(300)]
    pub height: u32,
}

#[derive(Serialize, Deserialize, Debug, SmartDefault, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    #[default(Rgb(249, 241, 241))]
    pub background: Rgb,
    #[default(Rgb(196, 191, 223))]
    pub key_normal: Rgb,
    #[default(Rgb(245, 246, 141))]
    pub key_pressed: Rgb,
    #[default(Rgb(255, 255, 255))]
    pub key_border: Rgb,
}

#[derive(Serialize, Deserialize, Debug, SmartDefault, Clone, PartialEq)]
#[serde(default)]
pub struct TextConfig {
    #[default(5)]
    pub rows: u16,
    #[default(30)]
    pub cols: u16,
    #[default("serif".into())]
    pub font_family: String,
    #[default(20)]
    pub font_size: u16,
}

#[derive(Serialize, Deserialize, Debug, SmartDefault, Clone, PartialEq)]
#[serde(default)]
pub struct KeyboardConfig {
    /// edge length of a virtual key, in pixels
    #[default(60)]
    pub key_size: u16,
}

#[derive(Serialize, Deserialize, Debug, SmartDefault, Clone, PartialEq)]
#[serde(default)]
pub struct TerminalConfig {
    /// how long a key stays lit on terminals that never report key releases
    #[default(90)]
    pub release_delay_ms: u64,
}

/// An sRGB color, written as `[r, g, b]` in the config file.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_css(self) -> String {
        let Rgb(r, g, b) = self;
        format!("rgb({r}, {g}, {b})")
    }
}

impl Config {
    pub fn from_toml(source: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Where the config is looked up: `$TOUCH_TYPING_CONFIG`, or `touch_typing.toml` in the
    /// working directory.
    pub fn path() -> PathBuf {
        env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Loads the config from [`Config::path`], falling back to the defaults when there is no
    /// file or it can't be used.
    pub fn load_or_default() -> Config {
        let path = Self::path();
        match Self::load(&path) {
            Ok(config) => {
                info!("loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                Config::default()
            }
            Err(e) => {
                warn!("couldn't use config at {}, using defaults: {e:?}", path.display());
                Config::default()
            }
        }
    }
}
