use super::*;

#[derive(Debug, Parser)]
pub struct Encipher {
  #[arg(
    long,
    help = "Read runestone JSON from <FILE>. Reads from stdin if omitted."
  )]
  file: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub payload: String,
  pub script_pubkey: String,
  pub asm: String,
}

impl Encipher {
  pub(crate) fn run(self) -> SubcommandResult {
    let json = match &self.file {
      Some(path) => fs::read_to_string(path)
        .with_context(|| format!("failed to read runestone from `{}`", path.display()))?,
      None => {
        let mut json = String::new();
        io::stdin()
          .read_to_string(&mut json)
          .context("failed to read runestone from stdin")?;
        json
      }
    };

    let runestone =
      serde_json::from_str::<Runestone>(&json).context("failed to parse runestone JSON")?;

    let payload = runestone.payload();

    let script_pubkey = Runestone::wrap(&payload);

    log::info!(
      "enciphered {} edicts into {} byte script",
      runestone.edicts.len(),
      script_pubkey.len()
    );

    Ok(Some(Box::new(Output {
      payload: hex::encode(&payload),
      script_pubkey: hex::encode(script_pubkey.as_bytes()),
      asm: script_pubkey.to_asm_string(),
    })))
  }
}
