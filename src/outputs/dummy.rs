use std::cell::RefCell;
use std::rc::Rc;
use nix::errno::Errno;
use crate::error::{DeviceError, Operation};
use crate::message::MidiMessage;
use crate::outputs::{Driver, Output};
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
  Open(DeviceIndex),
  Send([u8; 4]),
  Close,
}

/// Records every device call; optionally fails one of them.
#[derive(Default)]
pub struct Recorder {
  pub calls: Rc<RefCell<Vec<Call>>>,
  pub fail_open: bool,
  /// zero-based index of the send that fails
  pub fail_send: Option<usize>,
  pub fail_close: bool,
}

pub struct RecordedOutput {
  calls: Rc<RefCell<Vec<Call>>>,
  sent: usize,
  fail_send: Option<usize>,
  fail_close: bool,
}

impl Recorder {
  pub fn calls(&self) -> Vec<Call> {
    self.calls.borrow().clone()
  }

  pub fn sent(&self) -> Vec<[u8; 4]> {
    self.calls.borrow().iter()
      .filter_map(|call| match call {
        Call::Send(bytes) => Some(*bytes),
        _ => None,
      })
      .collect()
  }
}

impl Driver for Recorder
{
  type Output = RecordedOutput;

  fn open(&mut self, device: DeviceIndex)
      -> Result<RecordedOutput, DeviceError>
  {
    self.calls.borrow_mut().push(Call::Open(device));
    if self.fail_open {
      return Err(DeviceError::new(Operation::Open, Errno::ENODEV as i32));
    }
    Ok(RecordedOutput {
      calls: self.calls.clone(),
      sent: 0,
      fail_send: self.fail_send,
      fail_close: self.fail_close,
    })
  }
}

impl Output for RecordedOutput
{
  fn send(&mut self, message: MidiMessage)
      -> Result<(), DeviceError>
  {
    let attempt = self.sent;
    self.sent += 1;
    if self.fail_send == Some(attempt) {
      return Err(DeviceError::new(Operation::Send, Errno::EIO as i32));
    }
    self.calls.borrow_mut().push(Call::Send(message.bytes()));
    Ok(())
  }

  fn close(&mut self)
      -> Result<(), DeviceError>
  {
    self.calls.borrow_mut().push(Call::Close);
    if self.fail_close {
      return Err(DeviceError::new(Operation::Close, Errno::EIO as i32));
    }
    Ok(())
  }
}
