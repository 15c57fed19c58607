pub mod base_bpm;
pub mod error;
pub mod hi_speed;
pub mod playback_rate;
pub mod target_green_number;
pub mod white_number;

pub use self::base_bpm::BaseBpm;
pub use self::error::{Field, ValidationError, ValidationResult};
pub use self::hi_speed::HiSpeed;
pub use self::playback_rate::PlaybackRate;
pub use self::target_green_number::TargetGreenNumber;
pub use self::white_number::WhiteNumber;
