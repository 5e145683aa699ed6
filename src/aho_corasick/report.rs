use std::ops::Range;

use super::trie::PatternId;

/// One occurrence of a pattern. Offsets count symbols, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
  pub pattern: PatternId,
  pub start: usize,
  pub len: usize,
}

impl Match {
  pub fn new(pattern: PatternId, start: usize, len: usize) -> Self {
    Match { pattern, start, len }
  }

  /// One past the last symbol of the match.
  pub fn end(&self) -> usize {
    self.start + self.len
  }

  pub fn range(&self) -> Range<usize> {
    self.start..self.end()
  }
}

/// Receives matches as a scan finds them.
pub trait MatchSink {
  fn report(&mut self, found: Match);
}

impl<F> MatchSink for F
where
  F: FnMut(Match),
{
  fn report(&mut self, found: Match) {
    self(found)
  }
}

impl MatchSink for Vec<Match> {
  fn report(&mut self, found: Match) {
    self.push(found)
  }
}

impl MatchSink for &mut Vec<Match> {
  fn report(&mut self, found: Match) {
    self.push(found)
  }
}
