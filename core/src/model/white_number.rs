use crate::model::error::{Field, ValidationError, ValidationResult};

/// SUD+ cover setting. Zero means the lane is not covered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WhiteNumber(u16);

impl WhiteNumber {
  pub const MIN: i32 = 0;
  pub const MAX: i32 = 1000;

  pub fn create(value: i32) -> ValidationResult<WhiteNumber> {
    if (Self::MIN..=Self::MAX).contains(&value) {
      Ok(WhiteNumber(value as u16))
    } else {
      Err(ValidationError::out_of_range(
        Field::WhiteNumber,
        Self::MIN,
        Self::MAX,
        value,
      ))
    }
  }

  pub fn value(&self) -> u16 {
    self.0
  }

  /// Part of the lane still visible, in thousandths.
  pub fn visible_lane(&self) -> u16 {
    Self::MAX as u16 - self.0
  }
}

impl From<WhiteNumber> for f64 {
  fn from(item: WhiteNumber) -> Self {
    f64::from(item.0)
  }
}

impl From<WhiteNumber> for u16 {
  fn from(item: WhiteNumber) -> Self {
    item.0
  }
}

#[cfg(test)]
mod test {

  use super::WhiteNumber;
  use crate::model::Field;

  #[test]
  pub fn create_valid() {
    let white = WhiteNumber::create(300).unwrap();
    assert_eq!(white.value(), 300);
    assert_eq!(white.visible_lane(), 700);
  }

  #[test]
  pub fn create_bounds() {
    assert_eq!(WhiteNumber::create(0).unwrap().visible_lane(), 1000);
    assert_eq!(WhiteNumber::create(1000).unwrap().visible_lane(), 0);
  }

  #[test]
  pub fn create_outside_bounds() {
    let err = WhiteNumber::create(-1).unwrap_err();
    assert_eq!(err.field(), Field::WhiteNumber);
    assert_eq!(
      err.to_string(),
      "WhiteNumber must be between 0 and 1000. Provided: -1"
    );

    assert!(WhiteNumber::create(1001).is_err());
  }

  #[test]
  pub fn equality() {
    assert_eq!(WhiteNumber::create(250).unwrap(), WhiteNumber::create(250).unwrap());
    assert_ne!(WhiteNumber::create(250).unwrap(), WhiteNumber::create(251).unwrap());
  }
}
