pub mod calculator;
pub mod model;

pub use crate::calculator::{CalculationError, CalculationResult, GreenNumberCalculator};
pub use crate::model::{
  BaseBpm, Field, HiSpeed, PlaybackRate, TargetGreenNumber, ValidationError, WhiteNumber,
};
