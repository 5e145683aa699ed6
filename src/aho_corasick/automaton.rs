use std::collections::BTreeSet;
use std::iter::FusedIterator;
use std::str::Chars;

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::{Error, Result};

use super::context::Context;
use super::failure::build_links;
use super::report::{Match, MatchSink};
use super::trie::{PatternId, Trie, ROOT, UNDEFINED};

/// An Aho-Corasick automaton over a fixed alphabet.
///
/// Patterns are added with [`insert`](Automaton::insert), then
/// [`build`](Automaton::build) computes the failure links once. After that
/// the automaton is read-only: every scan keeps its position in its own
/// [`Context`], so a built automaton can be shared across threads.
#[derive(Debug, Clone)]
pub struct Automaton {
  trie: Trie,
  built: bool,
}

impl Automaton {
  /// An empty automaton over `alphabet_size` symbols starting at `a`.
  pub fn new(alphabet_size: usize) -> Result<Self> {
    Ok(Automaton::with_alphabet(Alphabet::new('a', alphabet_size)?))
  }

  pub fn with_alphabet(alphabet: Alphabet) -> Self {
    Automaton {
      trie: Trie::new(alphabet),
      built: false,
    }
  }

  /// Inserts every pattern and builds the failure links.
  pub fn from_patterns<I, P>(alphabet: Alphabet, patterns: I) -> Result<Self>
  where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
  {
    let mut automaton = Automaton::with_alphabet(alphabet);
    for pattern in patterns {
      automaton.insert(pattern.as_ref())?;
    }
    automaton.build();
    Ok(automaton)
  }

  pub fn insert(&mut self, pattern: &str) -> Result<PatternId> {
    if self.built {
      return Err(Error::AlreadyBuilt);
    }
    self.trie.insert(pattern)
  }

  /// Computes the failure links. Calling it again once built does nothing.
  pub fn build(&mut self) {
    if self.built {
      debug!("failure links already built, ignoring");
      return;
    }
    build_links(&mut self.trie);
    self.built = true;
  }

  pub fn is_built(&self) -> bool {
    self.built
  }

  /// Lazily yields every match in `text`, in the order their last symbol
  /// is reached; matches ending on the same symbol come longest first.
  ///
  /// A symbol outside the alphabet yields one error and ends the
  /// iteration.
  pub fn find_iter<'a, 't>(&'a self, text: &'t str) -> Result<Matches<'a, Chars<'t>>> {
    self.find_symbols(text.chars())
  }

  /// Same as [`find_iter`](Automaton::find_iter) over any symbol sequence.
  pub fn find_symbols<I>(&self, symbols: I) -> Result<Matches<'_, I::IntoIter>>
  where
    I: IntoIterator<Item = char>,
  {
    self.ensure_built()?;
    Ok(Matches {
      automaton: self,
      symbols: symbols.into_iter(),
      ctx: Context::default(),
      done: false,
    })
  }

  pub fn find_all(&self, text: &str) -> Result<Vec<Match>> {
    self.find_iter(text)?.collect()
  }

  /// Streams matches into `sink`, returning how many were reported. On
  /// error the matches found before the bad symbol have been delivered.
  pub fn for_each_match<S: MatchSink>(&self, text: &str, mut sink: S) -> Result<usize> {
    let mut count = 0;
    for found in self.find_iter(text)? {
      sink.report(found?);
      count += 1;
    }
    Ok(count)
  }

  /// Feeds `text` through `ctx` and returns the ids of the patterns seen.
  /// The context keeps its state between calls, so text can arrive in
  /// pieces; with `return_on_first_match` set this stops after the first
  /// symbol that completes any pattern.
  ///
  /// A context that this automaton did not advance is rejected with
  /// `InvalidContext`. On `InvalidSymbol` the context is left just before
  /// the bad symbol, so the caller can resume after it, but the ids seen
  /// earlier in the same piece are not returned.
  pub fn execute(&self, ctx: &mut Context, text: &str) -> Result<BTreeSet<PatternId>> {
    self.execute_symbols(ctx, text.chars())
  }

  pub fn execute_symbols<I>(&self, ctx: &mut Context, symbols: I) -> Result<BTreeSet<PatternId>>
  where
    I: IntoIterator<Item = char>,
  {
    self.ensure_built()?;
    self.check_context(ctx)?;

    let mut found = BTreeSet::new();

    for symbol in symbols {
      self.advance(ctx, symbol)?;
      while let Some(next) = self.next_pending(ctx) {
        found.insert(next.pattern);
      }
      if ctx.return_on_first_match && !found.is_empty() {
        return Ok(found);
      }
    }

    Ok(found)
  }

  pub fn is_match(&self, text: &str) -> Result<bool> {
    let found = self.execute(&mut Context::new(true), text)?;
    Ok(!found.is_empty())
  }

  pub fn matched_patterns(&self, text: &str) -> Result<BTreeSet<PatternId>> {
    self.execute(&mut Context::default(), text)
  }

  /// Whether `pattern` was inserted as a whole pattern.
  pub fn contains(&self, pattern: &str) -> bool {
    self.trie.find(pattern).is_some()
  }

  pub fn pattern_id(&self, pattern: &str) -> Option<PatternId> {
    self.trie.find(pattern)
  }

  pub fn pattern(&self, id: PatternId) -> Option<&str> {
    self.trie.pattern(id)
  }

  pub fn pattern_count(&self) -> usize {
    self.trie.pattern_count()
  }

  pub fn state_count(&self) -> usize {
    self.trie.state_count()
  }

  pub fn alphabet(&self) -> &Alphabet {
    self.trie.alphabet()
  }

  pub fn trie(&self) -> &Trie {
    &self.trie
  }

  fn ensure_built(&self) -> Result<()> {
    if !self.built {
      return Err(Error::NotBuilt);
    }
    Ok(())
  }

  /// States and pending outputs must be in this trie, and the current state
  /// can't be deeper than the symbols consumed.
  fn check_context(&self, ctx: &Context) -> Result<()> {
    let states = self.trie.state_count();
    let valid = (ctx.state as usize) < states
      && (ctx.pending == UNDEFINED || (ctx.pending as usize) < states)
      && self.trie.node(ctx.state).depth <= ctx.position
      && (ctx.pending == UNDEFINED || self.trie.node(ctx.pending).depth <= ctx.position);
    if !valid {
      return Err(Error::InvalidContext { state: ctx.state, position: ctx.position });
    }
    Ok(())
  }

  /// Moves `ctx` over one symbol and queues the terminal states to report.
  fn advance(&self, ctx: &mut Context, symbol: char) -> Result<()> {
    let index = self.trie.alphabet().index(symbol)?;

    // find the deepest state that can take this symbol
    let mut state = ctx.state;
    let next = loop {
      if let Some(next) = self.trie.child(state, index) {
        break next;
      }
      if state == ROOT {
        break ROOT;
      }
      state = self.trie.node(state).fail;
    };

    let node = self.trie.node(next);
    ctx.state = next;
    ctx.position += 1;
    ctx.pending = if node.is_terminal() { next } else { node.dict };
    Ok(())
  }

  /// Pops the next queued terminal state as a match ending at the current
  /// position.
  fn next_pending(&self, ctx: &mut Context) -> Option<Match> {
    if ctx.pending == UNDEFINED {
      return None;
    }
    let node = self.trie.node(ctx.pending);
    ctx.pending = node.dict;
    node.pattern.map(|pattern| Match::new(pattern, ctx.position - node.depth, node.depth))
  }
}

/// Iterator over the matches of one scan, see [`Automaton::find_iter`].
#[derive(Debug, Clone)]
pub struct Matches<'a, I> {
  automaton: &'a Automaton,
  symbols: I,
  ctx: Context,
  done: bool,
}

impl<'a, I> Matches<'a, I> {
  /// Symbols consumed so far.
  pub fn position(&self) -> usize {
    self.ctx.position
  }
}

impl<'a, I> Iterator for Matches<'a, I>
where
  I: Iterator<Item = char>,
{
  type Item = Result<Match>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(found) = self.automaton.next_pending(&mut self.ctx) {
        return Some(Ok(found));
      }
      if self.done {
        return None;
      }
      match self.symbols.next() {
        Some(symbol) => {
          if let Err(e) = self.automaton.advance(&mut self.ctx, symbol) {
            self.done = true;
            return Some(Err(e));
          }
        }
        None => {
          self.done = true;
          return None;
        }
      }
    }
  }
}

impl<'a, I> FusedIterator for Matches<'a, I> where I: Iterator<Item = char> {}

#[cfg(test)]
#[path = "automaton_tests.rs"]
mod tests;
