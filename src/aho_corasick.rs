//! The automaton: a trie over the patterns, failure links computed once
//! breadth first, and a matcher that walks both.

pub mod automaton;
pub mod context;
mod failure;
pub mod report;
pub mod trie;

pub use automaton::{Automaton, Matches};
pub use context::Context;
pub use report::{Match, MatchSink};
pub use trie::{Node, PatternId, StateId, Trie, ROOT, UNDEFINED};
