use super::*;

#[derive(Debug, Parser)]
pub struct Varint {
  #[arg(
    long,
    conflicts_with = "integers",
    help = "Decode a sequence of concatenated varints from <HEX>."
  )]
  decode: Option<String>,
  #[arg(required_unless_present = "decode", help = "Encode <INTEGERS> as varints.")]
  integers: Vec<u128>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Output {
  pub varints: Vec<Entry>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
  pub integer: u128,
  pub hex: String,
}

impl Varint {
  pub(crate) fn run(self) -> SubcommandResult {
    let varints = match self.decode {
      Some(input) => decode(&input)?,
      None => self
        .integers
        .into_iter()
        .map(|integer| Entry {
          integer,
          hex: hex::encode(runes::varint::encode(integer)),
        })
        .collect(),
    };

    Ok(Some(Box::new(Output { varints })))
  }
}

fn decode(input: &str) -> Result<Vec<Entry>> {
  let buffer = hex::decode(input).with_context(|| format!("invalid hex: {input}"))?;

  ensure!(!buffer.is_empty(), "nothing to decode");

  let mut entries = Vec::new();
  let mut i = 0;

  while i < buffer.len() {
    let (integer, length) = runes::varint::decode(&buffer[i..])
      .with_context(|| format!("invalid varint at byte {i}"))?;

    entries.push(Entry {
      integer,
      hex: hex::encode(&buffer[i..i + length]),
    });

    i += length;
  }

  Ok(entries)
}
