use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::debug;
use crate::error::Error;
use crate::message;
use crate::outputs::{Driver, Session};
use crate::request::NoteRequest;
use crate::types::DEFAULT_DEVICE;

/// Play `request` on the default device, blocking for the note's length.
pub fn play<D: Driver>(driver: &mut D, request: &NoteRequest)
    -> Result<(), Error>
{
  play_with(driver, request, &mut io::stdout(), thread::sleep)
}

/// Play `request`, letting `hold` wait out the note between on and off.
///
/// The status line goes to `status` before the device is touched. The device
/// is then opened, the instrument selected, the note started, held and
/// released, and the device closed, in that order. The first failure aborts
/// the sequence; the device is still closed if it was opened.
pub fn play_with<D, W, H>(driver: &mut D, request: &NoteRequest, status: &mut W, mut hold: H)
    -> Result<(), Error>
  where D: Driver,
        W: Write,
        H: FnMut(Duration)
{
  writeln!(status, "Playing {}", request)?;
  status.flush()?;

  let mut session = Session::open(driver, DEFAULT_DEVICE)?;

  session.send(message::program_change(request.channel, request.instrument)?)?;

  session.send(message::note_event(request.channel, request.pitch, request.velocity)?)?;
  let length = Duration::from_millis(request.length.into());
  debug!(?length, "holding note");
  hold(length);
  session.send(message::note_off(request.channel, request.pitch)?)?;

  session.close()?;
  Ok(())
}
