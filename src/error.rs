use std::fmt;
use std::io;
use nix::errno::Errno;
use thiserror::Error;

/// A numeric field does not fit its protocol bit width.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{field}, Current: {value}, Max: {max}")]
pub struct ValidationError {
  pub field: &'static str,
  pub value: u32,
  pub max  : u32,
}

/// The device call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Open,
  Send,
  Close,
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(match self {
      Operation::Open  => "open",
      Operation::Send  => "send",
      Operation::Close => "close",
    })
  }
}

/// The MIDI subsystem reported a non-success result code.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Midi Error: {code} ({}) during {operation}", describe(.code))]
pub struct DeviceError {
  pub operation: Operation,
  pub code     : i32,
}

fn describe(code: &i32) -> &'static str {
  Errno::from_raw(*code).desc()
}

impl DeviceError {
  pub fn new(operation: Operation, code: i32) -> Self {
    DeviceError { operation, code }
  }
}

impl From<(Operation, alsa::Error)> for DeviceError {
  fn from((operation, error): (Operation, alsa::Error)) -> Self {
    DeviceError::new(operation, error.errno())
  }
}

#[derive(Error, Debug)]
pub enum Error {
  /// The command line could not be parsed at all.
  #[error("Flag Error: {0}")]
  Flag(String),

  #[error("Flag Limit Error: {0}")]
  Validation(#[from] ValidationError),

  #[error("{0}")]
  Device(#[from] DeviceError),

  #[error("{0}")]
  Io(#[from] io::Error),
}
