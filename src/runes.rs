use {
  self::{flag::Flag, tag::Tag},
  super::*,
};

pub use {
  edict::Edict, etching::Etching, rune::Rune, rune_id::RuneId, runestone::Runestone, terms::Terms,
};

mod edict;
mod etching;
mod flag;
mod rune;
mod rune_id;
mod runestone;
mod tag;
mod terms;
pub mod varint;

type Result<T, E = Error> = std::result::Result<T, E>;
