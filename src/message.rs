//! Packing of channel voice messages into the MIDI short-message word.
//!
//! A short message is a status byte followed by up to two 7-bit data bytes,
//! carried in a 32-bit word whose least significant byte is the status byte:
//!
//! ```text
//! [0] status : 0bSSSS_CCCC   message signature, channel
//! [1] data 1 : 0b0DDD_DDDD
//! [2] data 2 : 0b0DDD_DDDD   (0 if the message has one data byte)
//! [3] unused : 0b0000_0000
//! ```

use std::fmt;
use crate::error::ValidationError;
use crate::types::*;

const PROGRAM_CHANGE: u8 = 0b1100;
const NOTE_ON       : u8 = 0b1001;

/// One encoded short message.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MidiMessage([u8; 4]);

impl MidiMessage {
  /// Unpack a word received from, or destined for, a short-message API.
  pub fn from_word(word: u32) -> Self {
    MidiMessage(word.to_le_bytes())
  }

  pub fn bytes(&self) -> [u8; 4] {
    self.0
  }

  /// The message as handed to a short-message API.
  pub fn word(&self) -> u32 {
    u32::from_le_bytes(self.0)
  }

  pub fn status(&self) -> u8 {
    self.0[0]
  }

  pub fn channel(&self) -> Channel {
    self.0[0] & 0x0F
  }

  /// The bytes that actually go on the wire, without padding.
  pub fn wire_bytes(&self) -> &[u8] {
    match self.status() >> 4 {
      // program change carries one data byte
      PROGRAM_CHANGE => &self.0[..2],
      _              => &self.0[..3],
    }
  }
}

impl fmt::Debug for MidiMessage {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "[{:#04X}, {:#04X}, {:#04X}, {:#04X}]",
           self.0[0], self.0[1], self.0[2], self.0[3])
  }
}

fn status(signature: u8, channel: Channel) -> u8 {
  (signature << 4) | channel
}

/// Select the instrument a channel plays with.
pub fn program_change(channel: Channel, instrument: Program)
    -> Result<MidiMessage, ValidationError>
{
  let channel    = verify_limit(channel.into(), MAX_NIBBLE, "Channel")?;
  let instrument = verify_limit(instrument.into(), MAX_DATA, "Instrument")?;
  Ok(MidiMessage([status(PROGRAM_CHANGE, channel), instrument, 0, 0]))
}

/// Start a note; a velocity of 0 stops it.
pub fn note_event(channel: Channel, pitch: Note, velocity: Velocity)
    -> Result<MidiMessage, ValidationError>
{
  let channel  = verify_limit(channel.into(), MAX_NIBBLE, "Channel")?;
  let pitch    = verify_limit(pitch.into(), MAX_DATA, "Pitch")?;
  let velocity = verify_limit(velocity.into(), MAX_DATA, "Velocity")?;
  Ok(MidiMessage([status(NOTE_ON, channel), pitch, velocity, 0]))
}

/// Release a note. This is a note-on with zero velocity, not a 0x8n message.
pub fn note_off(channel: Channel, pitch: Note)
    -> Result<MidiMessage, ValidationError>
{
  note_event(channel, pitch, 0)
}
