//! Plays a single MIDI note: selects an instrument on a channel, sounds the
//! note for a while, then releases it.

mod cli;
mod error;
mod message;
mod outputs;
mod player;
mod request;
mod types;

use std::env;
use std::process;
use tracing_subscriber::EnvFilter;
use cli::Command;
use error::Error;
use outputs::AlsaDriver;

fn run(app_name: &str) -> Result<(), Error> {
  match cli::parse(env::args_os())? {
    Command::Usage => print!("{}", cli::usage(app_name)),
    Command::Play(request) => player::play(&mut AlsaDriver::default(), &request)?,
  }
  Ok(())
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let app_name = cli::app_name(env::args_os().next());

  // run and, if necessary, print error message to stderr
  if let Err(error) = run(&app_name) {
    match error {
      Error::Flag(_) | Error::Validation(_) => {
        eprintln!("{}", error);
        eprint!("{}", cli::usage(&app_name));
      }
      Error::Device(_) | Error::Io(_) => eprintln!("Error: {}", error),
    }
    process::exit(1);
  }
}
