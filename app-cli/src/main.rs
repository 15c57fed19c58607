use std::io;
use std::path::Path;

use log::{debug, info, LevelFilter};

use failure::{Error, Fail};

use clap::Parser;

use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};

use hispeed_core::GreenNumberCalculator;

mod config;
use crate::config::Config;

mod state;
use crate::state::{Calculator, CalculatorEvent};

mod repl;

const HISPEED_CONFIG: &str = "HISPEED_CONFIG";
const DEFAULT_HISPEED_CONFIG: &str = "hispeed.toml";

const HISPEED_LOG_CONFIG: &str = "HISPEED_LOG_CONFIG";
const DEFAULT_HISPEED_LOG_CONFIG: &str = "log4rs.yaml";

#[derive(Debug, Fail)]
enum MainError {
  #[fail(display = "Failed to init logging: {}", cause)]
  LoggingInit { cause: String },

  #[fail(display = "Failed to load configuration from {}: {}", path, cause)]
  ConfigLoad { path: String, cause: String },

  #[fail(display = "Unable to calculate the required Hi-Speed")]
  Calculation,
}

/// Hi-Speed needed to reach a target green number.
#[derive(Parser, Debug)]
#[command(name = "hispeed", version)]
struct Cli {
  /// Base BPM of the song
  #[arg(long)]
  bpm: Option<String>,

  /// White number (SUD+)
  #[arg(long)]
  white: Option<String>,

  /// Playback rate, between 0.5 and 1.5
  #[arg(long, allow_negative_numbers = true)]
  rate: Option<f32>,

  /// Target green number
  #[arg(long)]
  green: Option<String>,

  /// Read field changes from stdin and print the result after each one
  #[arg(short, long)]
  interactive: bool,
}

fn main() -> Result<(), Error> {
  let cli = Cli::parse();

  init_logging()?;

  let config = init_config()?;

  let mut calculator = Calculator::new(GreenNumberCalculator::new(), &config.defaults);
  apply_arguments(&mut calculator, &cli);

  let decimals = config.display.decimals;

  if cli.interactive {
    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut calculator, decimals, stdin.lock(), &mut stdout.lock())
  } else {
    print!("{}", repl::render(calculator.state(), decimals));
    if calculator.state().required_hi_speed.is_some() {
      Ok(())
    } else {
      Err(MainError::Calculation.into())
    }
  }
}

fn init_logging() -> Result<(), Error> {
  let log_config_path = std::env::var(HISPEED_LOG_CONFIG)
    .unwrap_or_else(|_| DEFAULT_HISPEED_LOG_CONFIG.to_string());

  if Path::new(&log_config_path).exists() {
    log4rs::init_file(log_config_path.as_str(), Default::default()).map_err(|err| {
      MainError::LoggingInit {
        cause: err.to_string(),
      }
    })?;
  } else {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let log_config = LogConfig::builder()
      .appender(Appender::builder().build("stderr", Box::new(stderr)))
      .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
      .map_err(|err| MainError::LoggingInit {
        cause: err.to_string(),
      })?;
    log4rs::init_config(log_config).map_err(|err| MainError::LoggingInit {
      cause: err.to_string(),
    })?;
  }

  Ok(())
}

fn init_config() -> Result<Config, Error> {
  let explicit_path = std::env::var(HISPEED_CONFIG).ok();
  let config_path = explicit_path
    .clone()
    .unwrap_or_else(|| DEFAULT_HISPEED_CONFIG.to_string());

  if explicit_path.is_none() && !Path::new(&config_path).exists() {
    info!("No {} found, using built-in defaults", config_path);
    return Ok(Config::default());
  }

  info!("Loading configuration from {} ...", config_path);
  let config =
    Config::from_file(config_path.as_str()).map_err(|err| MainError::ConfigLoad {
      path: config_path.clone(),
      cause: err.to_string(),
    })?;
  debug!("{:#?}", config);

  Ok(config)
}

fn apply_arguments(calculator: &mut Calculator, cli: &Cli) {
  if let Some(bpm) = &cli.bpm {
    calculator.on_event(CalculatorEvent::BaseBpmChanged(bpm.clone()));
  }
  if let Some(white) = &cli.white {
    calculator.on_event(CalculatorEvent::WhiteNumberChanged(white.clone()));
  }
  if let Some(rate) = cli.rate {
    calculator.on_event(CalculatorEvent::PlaybackRateChanged(rate));
  }
  if let Some(green) = &cli.green {
    calculator.on_event(CalculatorEvent::TargetGreenNumberChanged(green.clone()));
  }
}
