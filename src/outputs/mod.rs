use tracing::{debug, warn};
use crate::error::DeviceError;
use crate::message::MidiMessage;
use crate::types::*;

pub mod alsa;

#[cfg(test)] pub mod dummy;

pub use self::alsa::AlsaDriver;

/// Something that can open MIDI output devices by index.
pub trait Driver
{
  type Output: Output;

  fn open(&mut self, device: DeviceIndex)
      -> Result<Self::Output, DeviceError>;
}

/// An open MIDI output device.
pub trait Output
{
  fn send(&mut self, message: MidiMessage)
      -> Result<(), DeviceError>;

  fn close(&mut self)
      -> Result<(), DeviceError>;
}

/// Exclusive ownership of an open output.
///
/// The output is closed by [`Session::close`], or, if the session is dropped
/// before that (an earlier step failed), closed on drop with the error logged.
pub struct Session<O: Output> {
  output: O,
  closed: bool,
}

impl<O: Output> Session<O> {
  pub fn open<D>(driver: &mut D, device: DeviceIndex)
      -> Result<Session<O>, DeviceError>
    where D: Driver<Output = O>
  {
    let output = driver.open(device)?;
    debug!(device, "opened MIDI output");
    Ok(Session { output, closed: false })
  }

  pub fn send(&mut self, message: MidiMessage)
      -> Result<(), DeviceError>
  {
    debug!(?message, channel = message.channel(),
           word = format_args!("{:#010X}", message.word()), "sending");
    self.output.send(message)
  }

  pub fn close(mut self)
      -> Result<(), DeviceError>
  {
    debug!("closing MIDI output");
    self.closed = true;
    self.output.close()
  }
}

impl<O: Output> Drop for Session<O> {
  fn drop(&mut self) {
    if self.closed {
      return;
    }
    if let Err(error) = self.output.close() {
      warn!(%error, "failed to release MIDI output");
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use super::dummy::{Call, Recorder};
  use crate::message;

  #[test]
  fn dropped_session_is_closed() {
    let mut driver = Recorder::default();
    {
      let mut session = Session::open(&mut driver, DEFAULT_DEVICE).unwrap();
      session.send(message::note_off(0, 60).unwrap()).unwrap();
    }
    assert_eq!(driver.calls(), vec![
      Call::Open(0),
      Call::Send([0x90, 0x3C, 0x00, 0x00]),
      Call::Close,
    ]);
  }

  #[test]
  fn closed_session_is_not_closed_again() {
    let mut driver = Recorder::default();
    let session = Session::open(&mut driver, DEFAULT_DEVICE).unwrap();
    session.close().unwrap();
    assert_eq!(driver.calls(), vec![Call::Open(0), Call::Close]);
  }

  #[test]
  fn failed_close_is_not_retried_on_drop() {
    let mut driver = Recorder { fail_close: true, ..Recorder::default() };
    let session = Session::open(&mut driver, DEFAULT_DEVICE).unwrap();
    assert!(session.close().is_err());
    assert_eq!(driver.calls(), vec![Call::Open(0), Call::Close]);
  }

  #[test]
  fn drop_swallows_close_failure() {
    let mut driver = Recorder { fail_close: true, ..Recorder::default() };
    drop(Session::open(&mut driver, DEFAULT_DEVICE).unwrap());
    assert_eq!(driver.calls(), vec![Call::Open(0), Call::Close]);
  }
}
