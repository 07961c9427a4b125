use std::ffi::OsString;
use std::path::Path;
use clap::{AppSettings, ErrorKind};
use structopt::StructOpt;
use crate::error::Error;
use crate::request::{NoteRequest, DEFAULTS};
use crate::types::*;

#[derive(StructOpt, Debug)]
#[structopt(name = "onenote", about = "Plays the requested Midi Note",
            global_settings = &[AppSettings::DisableVersion, AppSettings::ColorNever])]
struct Options {
  /// Channel
  #[structopt(short = "c")]
  channel: Option<u32>,
  /// Instrument
  #[structopt(short = "i")]
  instrument: Option<u32>,
  /// Pitch (Note)
  #[structopt(short = "p")]
  pitch: Option<u32>,
  /// Velocity (Volume)
  #[structopt(short = "v")]
  velocity: Option<u32>,
  /// Note Length, in milliseconds
  #[structopt(short = "l")]
  length: Option<u32>,
  /// Prints usage
  #[structopt(short = "?")]
  usage: bool,
}

impl Options {
  /// Fill unset flags from the defaults, then check every limit.
  fn into_request(self) -> Result<NoteRequest, Error> {
    let or = |value: Option<u32>, default: u8| value.unwrap_or(default.into());
    Ok(NoteRequest {
      channel   : verify_limit(or(self.channel, DEFAULTS.channel), MAX_NIBBLE, "-c")?,
      instrument: verify_limit(or(self.instrument, DEFAULTS.instrument), MAX_DATA, "-i")?,
      pitch     : verify_limit(or(self.pitch, DEFAULTS.pitch), MAX_DATA, "-p")?,
      velocity  : verify_limit(or(self.velocity, DEFAULTS.velocity), MAX_DATA, "-v")?,
      length    : self.length.unwrap_or(DEFAULTS.length),
    })
  }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
  Play(NoteRequest),
  Usage,
}

/// Interpret the command line, `args[0]` being the program name.
pub fn parse<I, T>(args: I) -> Result<Command, Error>
  where I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone
{
  let options =
    match Options::from_iter_safe(args) {
      Ok(options) => options,
      Err(ref error) if error.kind == ErrorKind::HelpDisplayed => return Ok(Command::Usage),
      Err(error) => {
        let reason = error.message.lines().next().unwrap_or_default()
          .trim_start_matches("error: ").to_string();
        return Err(Error::Flag(reason));
      }
    };
  if options.usage {
    return Ok(Command::Usage);
  }
  options.into_request().map(Command::Play)
}

/// The executable's file name, for the usage text.
pub fn app_name(argv0: Option<OsString>) -> String {
  argv0.as_ref()
    .and_then(|path| Path::new(path).file_name())
    .map(|name| name.to_string_lossy().into_owned())
    .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

pub fn usage(app_name: &str) -> String {
  let loudness = f64::from(DEFAULTS.velocity) / 127.0 * 100.0;
  let mut text = String::new();
  text += "Plays one note through Midi\n";
  text += "\n";
  text += &format!("Usage: {} [FLAGS]\n", app_name);
  text += &format!("  -c [0-15]           Channel. Default: {}\n", DEFAULTS.channel);
  text += &format!("  -i [0-127]          Instrument. Default: {} (Grand Piano)\n", DEFAULTS.instrument);
  text += &format!("  -p [0-127]          Pitch (Note). Default: {} (Middle C Note)\n", DEFAULTS.pitch);
  text += &format!("  -v [0-127]          Velocity (Volume). Default: {} ({:.0}% Loud)\n",
                   DEFAULTS.velocity, loudness);
  text += &format!("  -l [milliseconds]   Length (Note Length), in Milliseconds. Default: {} milliseconds\n",
                   DEFAULTS.length);
  text += "  -?                  Prints this help\n";
  text += "\n";
  text += "Examples:\n";
  text += "\n";
  text += &format!("{} -i 24 -p 80\n", app_name);
  text += "Play Guitar Note\n";
  text += "\n";
  text += &format!("{} -c 1 -i 24 -p 81 -v 120 -l 2000\n", app_name);
  text += "Sets Channel 1 to Guitar, Plays A Note, at Volume 120, for 2 seconds\n";
  text
}
