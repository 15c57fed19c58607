use std::hash::{Hash, Hasher};

use crate::model::error::{Field, ValidationError, ValidationResult};

/// Scroll speed multiplier, the output of the green number calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HiSpeed(f32);

impl HiSpeed {
  pub const MIN: f32 = 0.0;

  pub fn create(value: f32) -> ValidationResult<HiSpeed> {
    if value.is_finite() && value >= Self::MIN {
      // -0.0 passes the check above, store it as 0.0 to keep hashing consistent
      let value = if value == 0.0 { 0.0 } else { value };
      Ok(HiSpeed(value))
    } else {
      Err(ValidationError::below_minimum(Field::HiSpeed, Self::MIN, value))
    }
  }

  pub fn value(&self) -> f32 {
    self.0
  }

  /// Value rounded for display, e.g. `2.80`.
  pub fn display(&self, decimals: usize) -> String {
    format!("{:.*}", decimals, self.0)
  }
}

impl Eq for HiSpeed {}

impl Hash for HiSpeed {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.to_bits().hash(state);
  }
}

impl From<HiSpeed> for f64 {
  fn from(item: HiSpeed) -> Self {
    f64::from(item.0)
  }
}

impl From<HiSpeed> for f32 {
  fn from(item: HiSpeed) -> Self {
    item.0
  }
}

#[cfg(test)]
mod test {

  use std::collections::HashSet;

  use super::HiSpeed;
  use crate::model::Field;

  #[test]
  pub fn create_valid() {
    assert_eq!(HiSpeed::create(2.8).unwrap().value(), 2.8);
    assert_eq!(HiSpeed::create(0.0).unwrap().value(), 0.0);
  }

  #[test]
  pub fn create_negative() {
    let err = HiSpeed::create(-0.1).unwrap_err();
    assert_eq!(err.field(), Field::HiSpeed);
    assert_eq!(
      err.to_string(),
      "HiSpeed must be greater than or equal to 0.0. Provided: -0.1"
    );
  }

  #[test]
  pub fn create_non_finite() {
    assert!(HiSpeed::create(std::f32::NAN).is_err());
    assert!(HiSpeed::create(std::f32::INFINITY).is_err());
  }

  #[test]
  pub fn negative_zero_is_zero() {
    let zero = HiSpeed::create(0.0).unwrap();
    let negative_zero = HiSpeed::create(-0.0).unwrap();
    assert_eq!(zero, negative_zero);
    assert!(negative_zero.value().is_sign_positive());

    let set: HashSet<HiSpeed> = vec![zero, negative_zero].into_iter().collect();
    assert_eq!(set.len(), 1);
  }

  #[test]
  pub fn display() {
    assert_eq!(HiSpeed::create(2.8).unwrap().display(2), "2.80");
    assert_eq!(HiSpeed::create(116.0).unwrap().display(2), "116.00");
    assert_eq!(HiSpeed::create(1.23456).unwrap().display(3), "1.235");
  }
}
