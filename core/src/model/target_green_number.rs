use crate::model::error::{Field, ValidationError, ValidationResult};

/// The green number the player wants to keep while practising.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetGreenNumber(u32);

impl TargetGreenNumber {
  // used as a denominator
  pub const MIN: i32 = 1;

  pub fn create(value: i32) -> ValidationResult<TargetGreenNumber> {
    if value >= Self::MIN {
      Ok(TargetGreenNumber(value as u32))
    } else {
      Err(ValidationError::below_minimum(
        Field::TargetGreenNumber,
        Self::MIN,
        value,
      ))
    }
  }

  pub fn value(&self) -> u32 {
    self.0
  }

  #[cfg(test)]
  pub(crate) fn unchecked(value: u32) -> TargetGreenNumber {
    TargetGreenNumber(value)
  }
}

impl From<TargetGreenNumber> for f64 {
  fn from(item: TargetGreenNumber) -> Self {
    f64::from(item.0)
  }
}

impl From<TargetGreenNumber> for u32 {
  fn from(item: TargetGreenNumber) -> Self {
    item.0
  }
}
