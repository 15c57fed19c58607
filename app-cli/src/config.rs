use failure::Error;

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub defaults: Defaults,
  pub display: Display,
}

impl Default for Config {
  fn default() -> Config {
    Config {
      defaults: Defaults::default(),
      display: Display::default(),
    }
  }
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
  }

  #[allow(dead_code)]
  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    Ok(config)
  }
}

/// Initial field values shown before the user types anything.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Defaults {
  pub base_bpm: i32,
  pub white_number: i32,
  pub target_green_number: i32,
  pub playback_rate: f32,
}

impl Default for Defaults {
  fn default() -> Defaults {
    Defaults {
      base_bpm: 150,
      white_number: 200,
      target_green_number: 300,
      playback_rate: 1.0,
    }
  }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Display {
  pub decimals: usize,
}

impl Default for Display {
  fn default() -> Display {
    Display { decimals: 2 }
  }
}
