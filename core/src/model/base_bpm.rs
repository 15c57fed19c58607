use crate::model::error::{Field, ValidationError, ValidationResult};

/// Song tempo in beats per minute, the base for the green number formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BaseBpm(u16);

impl BaseBpm {
  // zero would leave the formula without a denominator
  pub const MIN: i32 = 1;
  pub const MAX: i32 = 1000;

  pub fn create(value: i32) -> ValidationResult<BaseBpm> {
    if (Self::MIN..=Self::MAX).contains(&value) {
      Ok(BaseBpm(value as u16))
    } else {
      Err(ValidationError::out_of_range(
        Field::BaseBpm,
        Self::MIN,
        Self::MAX,
        value,
      ))
    }
  }

  pub fn value(&self) -> u16 {
    self.0
  }

  #[cfg(test)]
  pub(crate) fn unchecked(value: u16) -> BaseBpm {
    BaseBpm(value)
  }
}

impl From<BaseBpm> for f64 {
  fn from(item: BaseBpm) -> Self {
    f64::from(item.0)
  }
}

impl From<BaseBpm> for u16 {
  fn from(item: BaseBpm) -> Self {
    item.0
  }
}
