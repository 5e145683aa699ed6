use tracing::trace;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

/// Index of a state in the node arena.
pub type StateId = u32;
/// Index of a pattern, in the order patterns were first inserted.
pub type PatternId = usize;

pub const ROOT: StateId = 0;
pub const UNDEFINED: StateId = StateId::MAX;

// the root's symbol never takes part in matching.
const ROOT_SYMBOL: char = '/';

#[derive(Debug, Clone)]
pub struct Node {
  pub symbol: char,
  // symbols from the root; the pattern length when the node is terminal.
  pub depth: usize,
  pub children: Box<[StateId]>,
  // set only on terminal nodes
  pub pattern: Option<PatternId>,
  // longest proper suffix that is also a prefix in the trie. UNDEFINED on
  // the root and on every node until the failure links are built.
  pub fail: StateId,
  // nearest terminal node further down the fail chain, if any.
  pub dict: StateId,
}

impl Node {
  fn new(symbol: char, depth: usize, alphabet_size: usize) -> Self {
    Node {
      symbol,
      depth,
      children: vec![UNDEFINED; alphabet_size].into_boxed_slice(),
      pattern: None,
      fail: UNDEFINED,
      dict: UNDEFINED,
    }
  }

  pub fn is_terminal(&self) -> bool {
    self.pattern.is_some()
  }
}

/// Prefix tree over the pattern set, stored as an arena of nodes. Edges are
/// indexes into the arena, so the failure links added later can point
/// anywhere without owning anything.
#[derive(Debug, Clone)]
pub struct Trie {
  alphabet: Alphabet,
  nodes: Vec<Node>,
  patterns: Vec<String>,
}

impl Trie {
  pub fn new(alphabet: Alphabet) -> Self {
    Trie {
      alphabet,
      nodes: vec![Node::new(ROOT_SYMBOL, 0, alphabet.size())],
      patterns: Vec::new(),
    }
  }

  /// Adds `pattern`, returning its id. Inserting a pattern that is already
  /// present returns the id it was first given and changes nothing.
  ///
  /// The pattern is checked against the alphabet before any node is
  /// created, so a failed insert leaves the trie as it was.
  pub fn insert(&mut self, pattern: &str) -> Result<PatternId> {
    if pattern.is_empty() {
      return Err(Error::InvalidPattern);
    }
    let symbols = pattern
      .chars()
      .map(|c| self.alphabet.index(c).map(|index| (c, index)))
      .collect::<Result<Vec<(char, usize)>>>()?;

    // walk the part of the pattern that already exists
    let mut state = ROOT;
    let mut matched = 0;
    for &(_, index) in symbols.iter() {
      match self.child(state, index) {
        Some(next) => state = next,
        None => break,
      }
      matched += 1;
    }

    let states = (self.nodes.len() + symbols.len() - matched) as u64;
    if states > UNDEFINED as u64 {
      return Err(Error::CapacityExceeded { states });
    }

    for (depth, &(symbol, index)) in symbols.iter().enumerate().skip(matched) {
      let next = self.nodes.len() as StateId;
      self.nodes.push(Node::new(symbol, depth + 1, self.alphabet.size()));
      self.nodes[state as usize].children[index] = next;
      state = next;
    }

    let node = &mut self.nodes[state as usize];
    if let Some(id) = node.pattern {
      return Ok(id);
    }
    let id = self.patterns.len();
    node.pattern = Some(id);
    self.patterns.push(pattern.to_string());
    trace!(pattern = id, len = symbols.len(), states = self.nodes.len(), "inserted pattern");
    Ok(id)
  }

  /// The id of `pattern` if it was inserted as a whole pattern. Prefixes of
  /// longer patterns are not found. Symbols outside the alphabet can't be
  /// in the trie, so they simply don't match.
  pub fn find(&self, pattern: &str) -> Option<PatternId> {
    let mut state = ROOT;
    for c in pattern.chars() {
      let index = self.alphabet.index(c).ok()?;
      state = self.child(state, index)?;
    }
    self.node(state).pattern
  }

  pub fn child(&self, state: StateId, index: usize) -> Option<StateId> {
    match self.nodes[state as usize].children[index] {
      UNDEFINED => None,
      next => Some(next),
    }
  }

  pub fn node(&self, state: StateId) -> &Node {
    &self.nodes[state as usize]
  }

  pub(crate) fn node_mut(&mut self, state: StateId) -> &mut Node {
    &mut self.nodes[state as usize]
  }

  pub fn alphabet(&self) -> &Alphabet {
    &self.alphabet
  }

  pub fn state_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn pattern_count(&self) -> usize {
    self.patterns.len()
  }

  pub fn pattern(&self, id: PatternId) -> Option<&str> {
    self.patterns.get(id).map(String::as_str)
  }

  pub fn patterns(&self) -> &[String] {
    &self.patterns
  }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
