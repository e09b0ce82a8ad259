use super::*;

#[derive(Copy, Clone, Debug)]
pub(super) enum Tag {
  Body = 0,
  Flags = 2,
  Rune = 4,
  Premine = 6,
  Cap = 8,
  Amount = 10,
  HeightStart = 12,
  HeightEnd = 14,
  OffsetStart = 16,
  OffsetEnd = 18,
  Mint = 20,
  Pointer = 22,
  #[allow(unused)]
  Cenotaph = 126,

  Divisibility = 1,
  Spacers = 3,
  Symbol = 5,
  #[allow(unused)]
  Nop = 127,
}

impl Tag {
  pub(super) fn encode<const N: usize>(self, values: [u128; N], payload: &mut Vec<u8>) {
    for value in values {
      varint::encode_to_vec(self.into(), payload);
      varint::encode_to_vec(value, payload);
    }
  }

  pub(super) fn encode_option<T: Into<u128>>(self, value: Option<T>, payload: &mut Vec<u8>) {
    if let Some(value) = value {
      self.encode([value.into()], payload)
    }
  }
}

impl From<Tag> for u128 {
  fn from(tag: Tag) -> Self {
    tag as u128
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn even_tags_are_typed_fields_and_odd_tags_are_informational() {
    for tag in [
      Tag::Body,
      Tag::Flags,
      Tag::Rune,
      Tag::Premine,
      Tag::Cap,
      Tag::Amount,
      Tag::HeightStart,
      Tag::HeightEnd,
      Tag::OffsetStart,
      Tag::OffsetEnd,
      Tag::Mint,
      Tag::Pointer,
      Tag::Cenotaph,
    ] {
      assert_eq!(u128::from(tag) % 2, 0, "{tag:?}");
    }

    for tag in [Tag::Divisibility, Tag::Spacers, Tag::Symbol, Tag::Nop] {
      assert_eq!(u128::from(tag) % 2, 1, "{tag:?}");
    }
  }

  #[test]
  fn encode_writes_tag_before_each_value() {
    let mut payload = Vec::new();
    Tag::Mint.encode([840000, 3], &mut payload);
    assert_eq!(payload, [20, 0xC0, 0xA2, 0x33, 20, 3]);
  }

  #[test]
  fn encode_appends_to_existing_payload() {
    let mut payload = vec![0xFF];
    Tag::Pointer.encode([1], &mut payload);
    assert_eq!(payload, [0xFF, 22, 1]);
  }

  #[test]
  fn encode_option_skips_none() {
    let mut payload = Vec::new();
    Tag::Premine.encode_option(None::<u128>, &mut payload);
    assert!(payload.is_empty());
  }

  #[test]
  fn encode_option_writes_zero() {
    let mut payload = Vec::new();
    Tag::Divisibility.encode_option(Some(0u8), &mut payload);
    assert_eq!(payload, [1, 0]);
  }

  #[test]
  fn encode_option_accepts_chars() {
    let mut payload = Vec::new();
    Tag::Symbol.encode_option(Some('$'), &mut payload);
    assert_eq!(payload, [5, 0x24]);
  }
}
