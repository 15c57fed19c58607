use log::debug;

use hispeed_core::{
  BaseBpm, GreenNumberCalculator, HiSpeed, PlaybackRate, TargetGreenNumber, WhiteNumber,
};

use crate::config::Defaults;

pub const INVALID_NUMBER: &str = "Invalid number";

pub const PLAYBACK_RATE_STEP: f32 = 0.05;
pub const PLAYBACK_RATE_PRESETS: [f32; 4] = [0.5, 0.75, 1.0, 1.25];

/// Rounds a slider position to the nearest playback rate step.
pub fn snap_playback_rate(value: f32) -> f32 {
  (value / PLAYBACK_RATE_STEP).round() * PLAYBACK_RATE_STEP
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorEvent {
  BaseBpmChanged(String),
  WhiteNumberChanged(String),
  TargetGreenNumberChanged(String),
  PlaybackRateChanged(f32),
}

/// What the user has entered and what came out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
  pub base_bpm: String,
  pub white_number: String,
  pub target_green_number: String,
  pub playback_rate: f32,

  pub required_hi_speed: Option<HiSpeed>,

  pub base_bpm_error: Option<String>,
  pub white_number_error: Option<String>,
  pub target_green_number_error: Option<String>,
  pub playback_rate_error: Option<String>,

  pub calculation_error: Option<String>,
}

impl CalculatorState {
  pub fn new(defaults: &Defaults) -> CalculatorState {
    CalculatorState {
      base_bpm: defaults.base_bpm.to_string(),
      white_number: defaults.white_number.to_string(),
      target_green_number: defaults.target_green_number.to_string(),
      playback_rate: defaults.playback_rate,
      required_hi_speed: None,
      base_bpm_error: None,
      white_number_error: None,
      target_green_number_error: None,
      playback_rate_error: None,
      calculation_error: None,
    }
  }

  pub fn is_input_valid(&self) -> bool {
    self.base_bpm_error.is_none()
      && self.white_number_error.is_none()
      && self.target_green_number_error.is_none()
      && self.playback_rate_error.is_none()
      && !self.base_bpm.is_empty()
      && !self.white_number.is_empty()
      && !self.target_green_number.is_empty()
  }

  /// Every message currently attached to a field or to the calculation.
  pub fn errors(&self) -> Vec<&str> {
    [
      &self.base_bpm_error,
      &self.white_number_error,
      &self.target_green_number_error,
      &self.playback_rate_error,
      &self.calculation_error,
    ]
    .iter()
    .filter_map(|err| err.as_ref().map(String::as_str))
    .collect()
  }

  pub fn display_hi_speed(&self, decimals: usize) -> String {
    self
      .required_hi_speed
      .map(|hi_speed| hi_speed.display(decimals))
      .unwrap_or_else(|| "---".to_string())
  }
}

pub struct Calculator {
  calculator: GreenNumberCalculator,
  state: CalculatorState,
}

impl Calculator {
  pub fn new(calculator: GreenNumberCalculator, defaults: &Defaults) -> Calculator {
    let mut calculator = Calculator {
      calculator,
      state: CalculatorState::new(defaults),
    };
    calculator.recalculate();
    calculator
  }

  pub fn state(&self) -> &CalculatorState {
    &self.state
  }

  pub fn on_event(&mut self, event: CalculatorEvent) -> &CalculatorState {
    debug!("{:?}", event);
    match event {
      CalculatorEvent::BaseBpmChanged(value) => self.state.base_bpm = value,
      CalculatorEvent::WhiteNumberChanged(value) => self.state.white_number = value,
      CalculatorEvent::TargetGreenNumberChanged(value) => self.state.target_green_number = value,
      CalculatorEvent::PlaybackRateChanged(value) => self.state.playback_rate = value,
    }
    self.recalculate();
    &self.state
  }

  fn recalculate(&mut self) {
    let state = &mut self.state;

    let base_bpm = parse_field(&state.base_bpm);
    let white_number = parse_field(&state.white_number);
    let target_green_number = parse_field(&state.target_green_number);

    state.base_bpm_error = parse_error(&base_bpm);
    state.white_number_error = parse_error(&white_number);
    state.target_green_number_error = parse_error(&target_green_number);
    state.playback_rate_error = None;
    state.required_hi_speed = None;
    state.calculation_error = None;

    let (base_bpm, white_number, target_green_number) =
      match (base_bpm, white_number, target_green_number) {
        (Entry::Number(bpm), Entry::Number(white), Entry::Number(green)) => (bpm, white, green),
        _ => return,
      };

    let base_bpm = BaseBpm::create(base_bpm);
    let white_number = WhiteNumber::create(white_number);
    let target_green_number = TargetGreenNumber::create(target_green_number);
    let playback_rate = PlaybackRate::create(state.playback_rate);

    state.base_bpm_error = base_bpm.as_ref().err().map(ToString::to_string);
    state.white_number_error = white_number.as_ref().err().map(ToString::to_string);
    state.target_green_number_error = target_green_number.as_ref().err().map(ToString::to_string);
    state.playback_rate_error = playback_rate.as_ref().err().map(ToString::to_string);

    if let (Ok(base_bpm), Ok(white_number), Ok(playback_rate), Ok(target_green_number)) =
      (base_bpm, white_number, playback_rate, target_green_number)
    {
      match self
        .calculator
        .calculate(base_bpm, white_number, playback_rate, target_green_number)
      {
        Ok(hi_speed) => state.required_hi_speed = Some(hi_speed),
        Err(err) => state.calculation_error = Some(err.to_string()),
      }
    }
  }
}

enum Entry {
  Empty,
  Invalid,
  Number(i32),
}

fn parse_field(text: &str) -> Entry {
  if text.is_empty() {
    Entry::Empty
  } else {
    text.parse().map(Entry::Number).unwrap_or(Entry::Invalid)
  }
}

fn parse_error(field: &Entry) -> Option<String> {
  match field {
    Entry::Invalid => Some(INVALID_NUMBER.to_string()),
    _ => None,
  }
}

#[cfg(test)]
mod test {

  use approx::assert_abs_diff_eq;

  use hispeed_core::GreenNumberCalculator;

  use super::{snap_playback_rate, Calculator, CalculatorEvent, INVALID_NUMBER};
  use crate::config::Defaults;

  fn calculator() -> Calculator {
    Calculator::new(GreenNumberCalculator::new(), &Defaults::default())
  }

  #[test]
  pub fn calculates_defaults_on_start() {
    let calculator = calculator();
    let state = calculator.state();
    assert!(state.is_input_valid());
    // 174 * 800 / (150 * 300)
    assert_eq!(state.display_hi_speed(2), "3.09");
  }

  #[test]
  pub fn field_change_recalculates() {
    let mut calculator = calculator();
    calculator.on_event(CalculatorEvent::WhiteNumberChanged("300".into()));
    let state = calculator.on_event(CalculatorEvent::TargetGreenNumberChanged("290".into()));
    let hi_speed = state.required_hi_speed.unwrap().value();
    assert_abs_diff_eq!(hi_speed, 2.8, epsilon = 0.01);

    let state = calculator.on_event(CalculatorEvent::PlaybackRateChanged(0.5));
    assert_eq!(state.display_hi_speed(2), "5.60");
  }

  #[test]
  pub fn empty_field_is_not_an_error() {
    let mut calculator = calculator();
    let state = calculator.on_event(CalculatorEvent::BaseBpmChanged("".into()));
    assert_eq!(state.base_bpm_error, None);
    assert_eq!(state.required_hi_speed, None);
    assert!(!state.is_input_valid());
    assert_eq!(state.display_hi_speed(2), "---");
  }

  #[test]
  pub fn unparseable_field() {
    let mut calculator = calculator();
    let state = calculator.on_event(CalculatorEvent::WhiteNumberChanged("abc".into()));
    assert_eq!(state.white_number_error.as_deref(), Some(INVALID_NUMBER));
    assert_eq!(state.base_bpm_error, None);
    assert_eq!(state.required_hi_speed, None);
    assert!(!state.is_input_valid());
  }

  #[test]
  pub fn out_of_range_fields_are_reported_separately() {
    let mut calculator = calculator();
    calculator.on_event(CalculatorEvent::BaseBpmChanged("0".into()));
    let state = calculator.on_event(CalculatorEvent::TargetGreenNumberChanged("0".into()));
    assert_eq!(
      state.base_bpm_error.as_deref(),
      Some("BPM must be between 1 and 1000. Provided: 0")
    );
    assert_eq!(
      state.target_green_number_error.as_deref(),
      Some("TargetGreenNumber must be greater than or equal to 1. Provided: 0")
    );
    assert_eq!(state.white_number_error, None);
    assert_eq!(state.calculation_error, None);
    assert_eq!(state.required_hi_speed, None);
    assert_eq!(state.errors().len(), 2);
  }

  #[test]
  pub fn invalid_playback_rate() {
    let mut calculator = calculator();
    let state = calculator.on_event(CalculatorEvent::PlaybackRateChanged(2.0));
    assert_eq!(
      state.playback_rate_error.as_deref(),
      Some("PlaybackRate must be between 0.5 and 1.5. Provided: 2.0")
    );
    assert_eq!(state.required_hi_speed, None);
  }

  #[test]
  pub fn correcting_a_field_clears_its_error() {
    let mut calculator = calculator();
    calculator.on_event(CalculatorEvent::BaseBpmChanged("2000".into()));
    let state = calculator.on_event(CalculatorEvent::BaseBpmChanged("150".into()));
    assert!(state.errors().is_empty());
    assert!(state.required_hi_speed.is_some());
  }

  #[test]
  pub fn snapping() {
    assert_abs_diff_eq!(snap_playback_rate(1.02), 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(snap_playback_rate(1.03), 1.05, epsilon = 1e-6);
    assert_abs_diff_eq!(snap_playback_rate(0.5), 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(snap_playback_rate(1.49), 1.5, epsilon = 1e-6);
  }
}
