use super::*;

pub mod encipher;
pub mod varint;

#[derive(Debug, Parser)]
pub enum Subcommand {
  #[command(about = "Encipher a runestone read as JSON into an OP_RETURN script")]
  Encipher(encipher::Encipher),
  #[command(about = "Encode integers as varints, or decode a varint sequence")]
  Varint(varint::Varint),
}

impl Subcommand {
  pub(crate) fn run(self) -> SubcommandResult {
    match self {
      Self::Encipher(encipher) => encipher.run(),
      Self::Varint(varint) => varint.run(),
    }
  }
}

pub type SubcommandResult = Result<Option<Box<dyn Output>>>;

pub trait Output: Send {
  fn print_json(&self, minify: bool);
}

impl<T> Output for T
where
  T: Serialize + Send,
{
  fn print_json(&self, minify: bool) {
    if minify {
      serde_json::to_writer(io::stdout(), self).ok();
    } else {
      serde_json::to_writer_pretty(io::stdout(), self).ok();
    }

    println!();
  }
}
