use std::fmt;
use crate::types::*;

/// Everything needed to play one note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteRequest {
  pub channel   : Channel,
  pub instrument: Program,
  pub pitch     : Note,
  pub velocity  : Velocity,
  /// How long the note sounds, in milliseconds.
  pub length    : Millis,
}

/// Grand piano, middle C, fairly loud, three seconds.
pub const DEFAULTS: NoteRequest = NoteRequest {
  channel   : 0,
  instrument: 0,
  pitch     : 60,
  velocity  : 90,
  length    : 3000,
};

impl fmt::Display for NoteRequest {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Channel: {}, Instrument: {}, Pitch: {}, Velocity: {}, Length: {}",
           self.channel, self.instrument, self.pitch, self.velocity, self.length)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults() {
    let request = DEFAULTS;
    assert_eq!((request.channel, request.instrument, request.pitch, request.velocity),
               (0, 0, 60, 90));
    assert_eq!(request.length, 3000);
  }

  #[test]
  fn status_line() {
    let request = NoteRequest { channel: 1, instrument: 24, pitch: 81, velocity: 120, length: 2000 };
    assert_eq!(request.to_string(),
               "Channel: 1, Instrument: 24, Pitch: 81, Velocity: 120, Length: 2000");
  }
}
