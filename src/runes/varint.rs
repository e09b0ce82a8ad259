use super::*;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
  #[error("varint longer than 19 bytes")]
  Overlong,
  #[error("varint overflows u128")]
  Overflow,
  #[error("varint ends with continuation bit set")]
  Unterminated,
}

pub fn encode(n: u128) -> Vec<u8> {
  let mut v = Vec::new();
  encode_to_vec(n, &mut v);
  v
}

pub fn encode_to_vec(mut n: u128, v: &mut Vec<u8>) {
  while n >> 7 > 0 {
    v.push(n.to_le_bytes()[0] | 0b1000_0000);
    n >>= 7;
  }

  v.push(n.to_le_bytes()[0]);
}

pub fn decode(buffer: &[u8]) -> Result<(u128, usize), Error> {
  let mut n = 0u128;

  for (i, &byte) in buffer.iter().enumerate() {
    if i > 18 {
      return Err(Error::Overlong);
    }

    let value = u128::from(byte) & 0b0111_1111;

    if i == 18 && value & 0b0111_1100 != 0 {
      return Err(Error::Overflow);
    }

    n |= value << (7 * i);

    if byte & 0b1000_0000 == 0 {
      return Ok((n, i + 1));
    }
  }

  Err(Error::Unterminated)
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn zero_is_a_single_byte() {
    assert_eq!(encode(0), [0x00]);
  }

  #[test]
  fn continuation_bit_starts_at_128() {
    assert_eq!(encode(127), [0x7F]);
    assert_eq!(encode(128), [0x80, 0x01]);
    assert_eq!(encode(300), [0xAC, 0x02]);
    assert_eq!(encode(16384), [0x80, 0x80, 0x01]);
  }

  #[test]
  fn max_value_uses_nineteen_bytes() {
    let encoded = encode(u128::MAX);
    assert_eq!(encoded.len(), 19);
    assert!(encoded[..18].iter().all(|byte| *byte == 0xFF));
    assert_eq!(encoded[18], 0x03);
    assert_eq!(decode(&encoded), Ok((u128::MAX, 19)));
  }

  #[test]
  fn round_trip_powers_of_two() {
    for i in 0..128 {
      let n = 1u128 << i;
      for n in [n - 1, n, n + 1] {
        let encoded = encode(n);
        assert_eq!(decode(&encoded), Ok((n, encoded.len())), "{n}");
      }
    }
  }

  #[test]
  fn encodings_are_canonical() {
    for n in 1..1u128 << 14 {
      let encoded = encode(n);
      assert_ne!(encoded.last(), Some(&0), "{n} has a redundant high group");
    }
  }

  #[test]
  fn encode_to_vec_appends() {
    let mut v = vec![0xAA];
    encode_to_vec(128, &mut v);
    encode_to_vec(1, &mut v);
    assert_eq!(v, [0xAA, 0x80, 0x01, 0x01]);
  }

  #[test]
  fn decode_reads_only_the_first_varint() {
    assert_eq!(decode(&[0x80, 0x01, 0x05]), Ok((128, 2)));
  }

  #[test]
  fn decode_errors() {
    assert_eq!(decode(&[]), Err(Error::Unterminated));
    assert_eq!(decode(&[0x80]), Err(Error::Unterminated));
    assert_eq!(decode(&[0x80; 20]), Err(Error::Overlong));

    let mut overflow = vec![0xFF; 18];
    overflow.push(0x04);
    assert_eq!(decode(&overflow), Err(Error::Overflow));
  }
}
