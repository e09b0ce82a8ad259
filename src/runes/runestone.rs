use super::*;

#[derive(Default, Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Runestone {
  pub edicts: Vec<Edict>,
  pub etching: Option<Etching>,
  pub mint: Option<RuneId>,
  pub pointer: Option<u32>,
}

impl Runestone {
  pub const MAGIC_NUMBER: opcodes::All = opcodes::all::OP_PUSHNUM_13;
  pub const COMMIT_CONFIRMATIONS: u16 = 6;

  pub fn encipher(&self) -> ScriptBuf {
    Self::wrap(&self.payload())
  }

  /// Tag stream for this runestone, without the script template. Edicts are
  /// written in ascending `id` order; edicts with equal ids keep the order
  /// they were given in.
  pub fn payload(&self) -> Vec<u8> {
    let mut payload = Vec::new();

    if let Some(etching) = self.etching {
      let mut flags = 0;
      Flag::Etching.set(&mut flags);

      if etching.terms.is_some() {
        Flag::Terms.set(&mut flags);
      }

      Tag::Flags.encode([flags, 0], &mut payload);

      Tag::Rune.encode_option(etching.rune, &mut payload);
      Tag::Divisibility.encode_option(etching.divisibility, &mut payload);
      Tag::Spacers.encode_option(etching.spacers, &mut payload);
      Tag::Symbol.encode_option(etching.symbol, &mut payload);
      Tag::Premine.encode_option(etching.premine, &mut payload);

      if let Some(terms) = etching.terms {
        Tag::Amount.encode_option(terms.amount, &mut payload);
        Tag::Cap.encode_option(terms.cap, &mut payload);
        Tag::HeightStart.encode_option(terms.height.0, &mut payload);
        Tag::HeightEnd.encode_option(terms.height.1, &mut payload);
        Tag::OffsetStart.encode_option(terms.offset.0, &mut payload);
        Tag::OffsetEnd.encode_option(terms.offset.1, &mut payload);
      }
    }

    if let Some(RuneId { block, tx }) = self.mint {
      Tag::Mint.encode([block.into(), tx.into()], &mut payload);
    }

    Tag::Pointer.encode_option(self.pointer, &mut payload);

    if !self.edicts.is_empty() {
      varint::encode_to_vec(Tag::Body.into(), &mut payload);

      let mut edicts = self.edicts.clone();
      edicts.sort_by_key(|edict| edict.id);

      for edict in edicts {
        varint::encode_to_vec(edict.id.block.into(), &mut payload);
        varint::encode_to_vec(edict.id.tx.into(), &mut payload);
        varint::encode_to_vec(edict.amount, &mut payload);
        varint::encode_to_vec(edict.output.into(), &mut payload);
      }
    }

    log::trace!(
      "enciphered runestone with {} edicts into {} payload bytes",
      self.edicts.len(),
      payload.len()
    );

    payload
  }

  /// Wraps a payload in `OP_RETURN OP_PUSHNUM_13`, pushing every payload byte
  /// as a minimally encoded script number.
  pub fn wrap(payload: &[u8]) -> ScriptBuf {
    payload
      .iter()
      .fold(
        script::Builder::new()
          .push_opcode(opcodes::all::OP_RETURN)
          .push_opcode(Runestone::MAGIC_NUMBER),
        |builder, byte| builder.push_int(i64::from(*byte)),
      )
      .into_script()
  }
}
