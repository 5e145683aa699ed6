use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while building or scanning with an
/// automaton. None of these are transient; retrying the same call with the
/// same input fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("symbol {symbol:?} is outside the alphabet of {size} symbols starting at {first:?}")]
  InvalidSymbol { symbol: char, first: char, size: usize },

  #[error("patterns cannot be empty")]
  InvalidPattern,

  #[error("automaton must be built before it can match")]
  NotBuilt,

  #[error("patterns cannot be added after the automaton is built")]
  AlreadyBuilt,

  #[error("context at state {state}, position {position} was not advanced by this automaton")]
  InvalidContext { state: u32, position: usize },

  #[error("alphabet of {size} symbols starting at {first:?} is not a usable range")]
  InvalidAlphabet { first: char, size: usize },

  // states are u32 indexes; the sentinel takes the last one.
  #[error("total states, {states}, exceeds {}", u32::MAX - 1)]
  CapacityExceeded { states: u64 },
}
