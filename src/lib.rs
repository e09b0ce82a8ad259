#![deny(
  clippy::cast_lossless,
  clippy::cast_possible_truncation,
  clippy::cast_possible_wrap,
  clippy::cast_sign_loss
)]

use {
  self::{
    arguments::Arguments,
    deserialize_from_str::DeserializeFromStr,
    subcommand::{Subcommand, SubcommandResult},
  },
  anyhow::{anyhow, bail, ensure, Context, Error},
  bitcoin::{opcodes, script, ScriptBuf},
  clap::Parser,
  serde::{Deserialize, Deserializer, Serialize, Serializer},
  std::{
    env,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
    str::FromStr,
  },
};

pub use self::{
  options::Options,
  runes::{varint, Edict, Etching, Rune, RuneId, Runestone, Terms},
};

pub mod arguments;
mod deserialize_from_str;
pub mod options;
pub mod runes;
pub mod subcommand;

type Result<T = (), E = Error> = std::result::Result<T, E>;

#[cfg(test)]
fn default<T: Default>() -> T {
  Default::default()
}

pub fn main() {
  env_logger::init();

  let args = Arguments::parse();

  let minify = args.options.minify;

  match args.run() {
    Err(err) => {
      eprintln!("error: {err}");
      err
        .chain()
        .skip(1)
        .for_each(|cause| eprintln!("because: {cause}"));
      if env::var_os("RUST_BACKTRACE")
        .map(|val| val == "1")
        .unwrap_or_default()
      {
        eprintln!("{}", err.backtrace());
      }

      process::exit(1);
    }
    Ok(output) => {
      if let Some(output) = output {
        output.print_json(minify);
      }
    }
  }
}
