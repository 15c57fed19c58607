use std::hash::{Hash, Hasher};

use crate::model::error::{Field, ValidationError, ValidationResult};

/// Song playback speed multiplier, independent of the Hi-Speed setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f32);

impl PlaybackRate {
  pub const MIN: f32 = 0.5;
  pub const MAX: f32 = 1.5;

  pub fn create(value: f32) -> ValidationResult<PlaybackRate> {
    // NaN is never contained, infinities fall outside the range
    if (Self::MIN..=Self::MAX).contains(&value) {
      Ok(PlaybackRate(value))
    } else {
      Err(ValidationError::out_of_range(
        Field::PlaybackRate,
        Self::MIN,
        Self::MAX,
        value,
      ))
    }
  }

  pub fn value(&self) -> f32 {
    self.0
  }

  #[cfg(test)]
  pub(crate) fn unchecked(value: f32) -> PlaybackRate {
    PlaybackRate(value)
  }
}

// Construction excludes NaN and both bounds are positive, so bit equality
// matches float equality.
impl Eq for PlaybackRate {}

impl Hash for PlaybackRate {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.0.to_bits().hash(state);
  }
}

impl From<PlaybackRate> for f64 {
  fn from(item: PlaybackRate) -> Self {
    f64::from(item.0)
  }
}

impl From<PlaybackRate> for f32 {
  fn from(item: PlaybackRate) -> Self {
    item.0
  }
}
