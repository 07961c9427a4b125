use crate::error::ValidationError;

pub type Channel    = u8;
pub type Program    = u8;
pub type Note       = u8;
pub type Velocity   = u8;
pub type Millis     = u32;
pub type DeviceIndex = usize;

/// Largest value of a 4-bit field (the channel nibble).
pub const MAX_NIBBLE: u32 = 0b1111;
/// Largest value of a 7-bit data field.
pub const MAX_DATA: u32 = 0b0111_1111;

/// The system's default MIDI output.
pub const DEFAULT_DEVICE: DeviceIndex = 0;

/// Check `value` against an inclusive `max`, narrowing it to a byte.
pub fn verify_limit(value: u32, max: u32, field: &'static str)
    -> Result<u8, ValidationError>
{
  if value > max || value > u8::MAX as u32 {
    return Err(ValidationError { field, value, max });
  }
  Ok(value as u8)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn limit_is_inclusive() {
    assert_eq!(verify_limit(15, MAX_NIBBLE, "Channel"), Ok(15));
    assert_eq!(verify_limit(127, MAX_DATA, "Pitch"), Ok(127));
  }

  #[test]
  fn over_limit_names_field_value_and_max() {
    let error = verify_limit(16, MAX_NIBBLE, "Channel").unwrap_err();
    assert_eq!(error, ValidationError { field: "Channel", value: 16, max: 15 });
    assert_eq!(error.to_string(), "Channel, Current: 16, Max: 15");
  }

  #[test]
  fn never_truncates() {
    assert!(verify_limit(256, MAX_DATA, "Velocity").is_err());
    assert!(verify_limit(128 + 0x100, MAX_DATA, "Velocity").is_err());
  }
}
