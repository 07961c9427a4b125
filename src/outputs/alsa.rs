use std::ffi::CString;
use ::alsa::Direction;
use ::alsa::seq::{Addr, ClientIter, MidiEvent, PortCap, PortIter, PortSubscribe, PortType, Seq};
use nix::errno::Errno;
use tracing::debug;
use crate::error::{DeviceError, Operation};
use crate::message::MidiMessage;
use crate::outputs::{Driver, Output};
use crate::types::*;

/// Opens outputs on the ALSA sequencer.
pub struct AlsaDriver {
  pub name: String,
}

impl AlsaDriver {
  pub fn new<N: Into<String>>(name: N) -> Self {
    AlsaDriver { name: name.into() }
  }
}

impl Default for AlsaDriver {
  fn default() -> Self {
    AlsaDriver::new(env!("CARGO_PKG_NAME"))
  }
}

/// An output backed by an ALSA port subscribed to one destination.
pub struct AlsaOutput {
  port: i32,
  sequencer: Seq,
  coder: MidiEvent,
}

/// find the `index`-th port of another client that accepts MIDI
fn destination(sequencer: &Seq, index: DeviceIndex) -> Option<Addr> {
  let own = sequencer.client_id().ok()?;
  ClientIter::new(sequencer)
    .map(|client| client.get_client())
    .filter(|&client| client != own)
    .flat_map(|client| PortIter::new(sequencer, client))
    .filter(|port| {
      let caps = port.get_capability();
      caps.contains(PortCap::WRITE | PortCap::SUBS_WRITE)
        && !caps.contains(PortCap::NO_EXPORT)
        && port.get_type().contains(PortType::MIDI_GENERIC)
    })
    .map(|port| Addr { client: port.get_client(), port: port.get_port() })
    .nth(index)
}

impl Driver for AlsaDriver
{
  type Output = AlsaOutput;

  fn open(&mut self, device: DeviceIndex)
      -> Result<AlsaOutput, DeviceError>
  {
    let open = |error: ::alsa::Error| DeviceError::from((Operation::Open, error));
    let name = CString::new(self.name.as_str())
      .map_err(|_| DeviceError::new(Operation::Open, Errno::EINVAL as i32))?;

    let sequencer = Seq::open(None, Some(Direction::Playback), false).map_err(open)?;
    sequencer.set_client_name(&name).map_err(open)?;

    let destination = destination(&sequencer, device)
      .ok_or_else(|| DeviceError::new(Operation::Open, Errno::ENODEV as i32))?;

    let port =
      sequencer.create_simple_port(
          &name,
          PortCap::READ | PortCap::SUBS_READ,
          PortType::MIDI_GENERIC | PortType::APPLICATION).map_err(open)?;

    let subscription = PortSubscribe::empty().map_err(open)?;
    subscription.set_sender(Addr { client: sequencer.client_id().map_err(open)?, port });
    subscription.set_dest(destination);
    sequencer.subscribe_port(&subscription).map_err(open)?;

    // one short message at a time; never rely on running status
    let coder = MidiEvent::new(16).map_err(open)?;
    coder.enable_running_status(false);

    debug!(client = destination.client, port = destination.port, "subscribed to destination");
    Ok(AlsaOutput { port, sequencer, coder })
  }
}

impl Output for AlsaOutput
{
  fn send(&mut self, message: MidiMessage)
      -> Result<(), DeviceError>
  {
    let send = |error: ::alsa::Error| DeviceError::from((Operation::Send, error));
    let mut event =
      match self.coder.encode(message.wire_bytes()).map_err(send)? {
        (_, Some(event)) => event,
        (_, None) => return Err(DeviceError::new(Operation::Send, Errno::EINVAL as i32)),
      };
    event.set_source(self.port);
    event.set_subs();
    event.set_direct();
    self.sequencer.event_output_direct(&mut event).map_err(send)?;
    Ok(())
  }

  fn close(&mut self)
      -> Result<(), DeviceError>
  {
    self.sequencer.delete_port(self.port)
      .map_err(|error| DeviceError::from((Operation::Close, error)))
  }
}
