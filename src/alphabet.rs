//! Mapping from input symbols to dense child-table indexes.

use crate::error::{Error, Result};

/// A contiguous range of code points, `first..first + size`.
///
/// Every state of the automaton carries a child table with one slot per
/// symbol in the alphabet, so the size directly trades memory for the range
/// of symbols that patterns and text may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
  first: char,
  size: usize,
}

impl Alphabet {
  pub fn new(first: char, size: usize) -> Result<Self> {
    // every code point in the range has to be a char, otherwise symbol()
    // would have holes (surrogates) or run past char::MAX.
    let end = (first as u64).checked_add(size as u64);
    let usable = match end {
      Some(end) => size > 0 && end <= char::MAX as u64 + 1 && !((first as u32) < 0xD800 && end > 0xD800),
      None => false,
    };
    if !usable {
      return Err(Error::InvalidAlphabet { first, size });
    }
    Ok(Alphabet { first, size })
  }

  /// `a` through `z`.
  pub fn lowercase() -> Self {
    Alphabet { first: 'a', size: 26 }
  }

  /// The 7-bit ASCII range, `\0` through `\x7f`.
  pub fn ascii() -> Self {
    Alphabet { first: '\0', size: 128 }
  }

  pub fn first(&self) -> char {
    self.first
  }

  pub fn size(&self) -> usize {
    self.size
  }

  /// The child-table slot for `symbol`.
  pub fn index(&self, symbol: char) -> Result<usize> {
    let offset = (symbol as u32).wrapping_sub(self.first as u32) as usize;
    if (symbol as u32) < (self.first as u32) || offset >= self.size {
      return Err(Error::InvalidSymbol { symbol, first: self.first, size: self.size });
    }
    Ok(offset)
  }

  /// The symbol stored in child-table slot `index`, if there is one.
  pub fn symbol(&self, index: usize) -> Option<char> {
    if index >= self.size {
      return None;
    }
    char::from_u32(self.first as u32 + index as u32)
  }
}

impl Default for Alphabet {
  fn default() -> Self {
    Alphabet::lowercase()
  }
}

#[cfg(test)]
#[path = "alphabet_tests.rs"]
mod tests;
