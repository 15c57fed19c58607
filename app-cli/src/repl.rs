use std::fmt::Write as FmtWrite;
use std::io::{BufRead, Write};

use failure::{Error, Fail};
use log::{debug, info};

use crate::state::{
  snap_playback_rate, Calculator, CalculatorEvent, CalculatorState, PLAYBACK_RATE_PRESETS,
};

const MISSING_INPUT: &str = "Every field needs a value";

const HELP: &str = "\
Commands:
  bpm <n>      base BPM of the song
  white <n>    white number (SUD+)
  green <n>    target green number
  rate <x>     playback rate, snapped to 0.05 steps
  preset <n>   playback rate preset 1-4 (x0.5, x0.75, x1.0, x1.25)
  show         print the current state
  help         print this message
  quit         leave";

#[derive(Debug, Fail, PartialEq)]
pub enum CommandError {
  #[fail(display = "Unknown command: {}", name)]
  Unknown { name: String },

  #[fail(display = "Missing value for {}", name)]
  MissingValue { name: String },

  #[fail(display = "Invalid playback rate: {}", value)]
  InvalidRate { value: String },

  #[fail(display = "Preset must be between 1 and {}. Provided: {}", count, value)]
  InvalidPreset { count: usize, value: String },
}

#[derive(Debug, PartialEq)]
pub enum Command {
  Event(CalculatorEvent),
  Show,
  Help,
  Quit,
}

impl Command {
  pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();

    let name = match words.next() {
      Some(name) => name,
      None => return Ok(None),
    };

    // an absent value clears a text field, like deleting its content
    let value = words.next().unwrap_or("").to_string();

    let command = match name {
      "bpm" => Command::Event(CalculatorEvent::BaseBpmChanged(value)),
      "white" => Command::Event(CalculatorEvent::WhiteNumberChanged(value)),
      "green" => Command::Event(CalculatorEvent::TargetGreenNumberChanged(value)),
      "rate" => {
        let rate = parse_rate(name, &value)?;
        Command::Event(CalculatorEvent::PlaybackRateChanged(snap_playback_rate(rate)))
      }
      "preset" => Command::Event(CalculatorEvent::PlaybackRateChanged(parse_preset(
        name, &value,
      )?)),
      "show" => Command::Show,
      "help" | "?" => Command::Help,
      "quit" | "exit" | "q" => Command::Quit,
      _ => {
        return Err(CommandError::Unknown {
          name: name.to_string(),
        })
      }
    };

    Ok(Some(command))
  }
}

fn parse_rate(name: &str, value: &str) -> Result<f32, CommandError> {
  if value.is_empty() {
    return Err(CommandError::MissingValue {
      name: name.to_string(),
    });
  }
  value
    .trim_start_matches('x')
    .parse::<f32>()
    .map_err(|_| CommandError::InvalidRate {
      value: value.to_string(),
    })
}

fn parse_preset(name: &str, value: &str) -> Result<f32, CommandError> {
  if value.is_empty() {
    return Err(CommandError::MissingValue {
      name: name.to_string(),
    });
  }
  let invalid = || CommandError::InvalidPreset {
    count: PLAYBACK_RATE_PRESETS.len(),
    value: value.to_string(),
  };
  let index = value.parse::<usize>().map_err(|_| invalid())?;
  index
    .checked_sub(1)
    .and_then(|index| PLAYBACK_RATE_PRESETS.get(index))
    .cloned()
    .ok_or_else(invalid)
}

pub fn render(state: &CalculatorState, decimals: usize) -> String {
  let mut out = String::new();

  // writing into a String never fails
  let _ = writeln!(
    out,
    "BPM {} | White {} | Rate x{:.2} | Green {}",
    state.base_bpm, state.white_number, state.playback_rate, state.target_green_number
  );
  let _ = writeln!(out, "Required Hi-Speed: {}", state.display_hi_speed(decimals));
  let errors = state.errors();
  for err in &errors {
    let _ = writeln!(out, "  ! {}", err);
  }
  if errors.is_empty() && !state.is_input_valid() {
    let _ = writeln!(out, "  ! {}", MISSING_INPUT);
  }

  out
}

/// Feeds every input line to the calculator until `quit` or end of input.
pub fn run<R, W>(calculator: &mut Calculator, decimals: usize, input: R, output: &mut W) -> Result<(), Error>
where
  R: BufRead,
  W: Write,
{
  info!("Starting interactive mode");

  write!(output, "{}", render(calculator.state(), decimals))?;

  for line in input.lines() {
    let line = line?;
    match Command::parse(&line) {
      Ok(Some(Command::Event(event))) => {
        let state = calculator.on_event(event);
        write!(output, "{}", render(state, decimals))?;
      }
      Ok(Some(Command::Show)) => write!(output, "{}", render(calculator.state(), decimals))?,
      Ok(Some(Command::Help)) => writeln!(output, "{}", HELP)?,
      Ok(Some(Command::Quit)) => break,
      Ok(None) => {}
      Err(err) => {
        debug!("Rejected input {:?}: {}", line, err);
        writeln!(output, "{}", err)?;
      }
    }
    output.flush()?;
  }

  Ok(())
}
