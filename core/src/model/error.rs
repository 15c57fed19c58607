use std::fmt;

use failure::Fail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  BaseBpm,
  WhiteNumber,
  PlaybackRate,
  TargetGreenNumber,
  HiSpeed,
}

impl Field {
  pub fn name(self) -> &'static str {
    match self {
      Field::BaseBpm => "BPM",
      Field::WhiteNumber => "WhiteNumber",
      Field::PlaybackRate => "PlaybackRate",
      Field::TargetGreenNumber => "TargetGreenNumber",
      Field::HiSpeed => "HiSpeed",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Raised when a raw value falls outside the legal range of its value object.
///
/// Bounds and the provided value are kept as display text so integer and
/// real-valued fields share a single error type.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum ValidationError {
  #[fail(
    display = "{} must be between {} and {}. Provided: {}",
    field, min, max, provided
  )]
  OutOfRange {
    field: Field,
    min: String,
    max: String,
    provided: String,
  },

  #[fail(
    display = "{} must be greater than or equal to {}. Provided: {}",
    field, min, provided
  )]
  BelowMinimum {
    field: Field,
    min: String,
    provided: String,
  },
}

impl ValidationError {
  pub(crate) fn out_of_range<T: fmt::Debug>(field: Field, min: T, max: T, provided: T) -> Self {
    ValidationError::OutOfRange {
      field,
      min: format!("{:?}", min),
      max: format!("{:?}", max),
      provided: format!("{:?}", provided),
    }
  }

  pub(crate) fn below_minimum<T: fmt::Debug>(field: Field, min: T, provided: T) -> Self {
    ValidationError::BelowMinimum {
      field,
      min: format!("{:?}", min),
      provided: format!("{:?}", provided),
    }
  }

  pub fn field(&self) -> Field {
    match self {
      ValidationError::OutOfRange { field, .. } => *field,
      ValidationError::BelowMinimum { field, .. } => *field,
    }
  }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
