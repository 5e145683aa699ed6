use super::trie::{StateId, ROOT, UNDEFINED};

/// Traversal state for one scan. The automaton itself never changes while
/// matching; everything that moves lives here, so any number of scans can
/// share one automaton.
///
/// A context can be fed text in several pieces, matches that straddle two
/// pieces are still found and positions keep counting from the first one.
#[derive(Debug, Clone)]
pub struct Context {
  // the current state, so this can be called on streaming data
  pub(crate) state: StateId,
  // symbols consumed so far
  pub(crate) position: usize,
  pub return_on_first_match: bool,
  // next terminal state still to be reported for the current position
  pub(crate) pending: StateId,
}

impl Context {
  pub fn new(return_on_first_match: bool) -> Self {
    Context {
      state: ROOT,
      position: 0,
      return_on_first_match,
      pending: UNDEFINED,
    }
  }

  pub fn state(&self) -> StateId {
    self.state
  }

  /// Symbols consumed since the context was created or last reset.
  pub fn position(&self) -> usize {
    self.position
  }

  pub fn reset(&mut self) {
    self.state = ROOT;
    self.position = 0;
    self.pending = UNDEFINED;
  }
}

impl Default for Context {
  fn default() -> Self {
    Context::new(false)
  }
}
