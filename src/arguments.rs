use super::*;

#[derive(Debug, Parser)]
#[command(version)]
pub struct Arguments {
  #[command(flatten)]
  pub options: Options,
  #[command(subcommand)]
  pub subcommand: Subcommand,
}

impl Arguments {
  pub fn run(self) -> SubcommandResult {
    log::debug!("running {:?}", self.subcommand);
    self.subcommand.run()
  }
}
