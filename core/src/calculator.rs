use failure::Fail;
use log::{debug, trace};

use crate::model::{
  BaseBpm, HiSpeed, PlaybackRate, TargetGreenNumber, ValidationError, WhiteNumber,
};

/// Green number constant of the game's scroll timing.
pub const GREEN_NUMBER_FACTOR: f64 = 174.0;

#[derive(Debug, Clone, PartialEq, Fail)]
pub enum CalculationError {
  #[fail(display = "Denominator is zero, cannot calculate HiSpeed.")]
  DivisionByZero,

  #[fail(display = "{}", cause)]
  InvalidResult {
    #[fail(cause)]
    cause: ValidationError,
  },
}

pub type CalculationResult<T> = Result<T, CalculationError>;

/// Computes the Hi-Speed needed to see notes at a target green number.
///
/// ```text
/// hi_speed = (174 * (1000 - white_number)) / ((base_bpm * playback_rate) * target_green_number)
/// ```
///
/// Arithmetic runs in `f64` and the result is narrowed to `f32`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreenNumberCalculator;

impl GreenNumberCalculator {
  pub fn new() -> GreenNumberCalculator {
    GreenNumberCalculator
  }

  pub fn calculate(
    &self,
    base_bpm: BaseBpm,
    white_number: WhiteNumber,
    playback_rate: PlaybackRate,
    target_green_number: TargetGreenNumber,
  ) -> CalculationResult<HiSpeed> {
    trace!(
      "calculate: bpm={} white={} rate={} green={}",
      base_bpm.value(),
      white_number.value(),
      playback_rate.value(),
      target_green_number.value()
    );

    let numerator = GREEN_NUMBER_FACTOR * f64::from(white_number.visible_lane());
    let denominator =
      (f64::from(base_bpm) * f64::from(playback_rate)) * f64::from(target_green_number);

    if denominator == 0.0 {
      debug!("Refusing to divide by a zero denominator");
      return Err(CalculationError::DivisionByZero);
    }

    let hi_speed = numerator / denominator;
    debug!("Required Hi-Speed {}", hi_speed);

    HiSpeed::create(hi_speed as f32).map_err(|cause| CalculationError::InvalidResult { cause })
  }
}
