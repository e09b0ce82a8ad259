use super::*;

#[derive(Default, Serialize, Deserialize, Debug, PartialEq, Eq, Copy, Clone)]
#[serde(deny_unknown_fields)]
pub struct Edict {
  pub id: RuneId,
  pub amount: u128,
  pub output: u32,
}
