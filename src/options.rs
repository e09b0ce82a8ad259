use super::*;

#[derive(Clone, Default, Debug, Parser)]
pub struct Options {
  #[arg(
    long,
    global = true,
    env = "RUNESTONE_MINIFY",
    help = "Print JSON output on a single line."
  )]
  pub minify: bool,
}
