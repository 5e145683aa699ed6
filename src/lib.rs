#![deny(clippy::all)]

//! Multi-pattern string matching with an Aho-Corasick automaton.
//!
//! ```
//! use ac_automaton::{Alphabet, Automaton};
//!
//! let ac = Automaton::from_patterns(Alphabet::lowercase(), ["he", "she", "hers"])?;
//! let found: Vec<_> = ac.find_all("ushers")?.iter().map(|m| (m.start, m.len)).collect();
//! assert_eq!(found, vec![(1, 3), (2, 2), (2, 4)]);
//! # Ok::<(), ac_automaton::Error>(())
//! ```

pub mod aho_corasick;
pub mod alphabet;
pub mod error;

#[cfg(any(feature = "node", test))]
mod buffer;
#[cfg(feature = "node")]
mod node;

pub use aho_corasick::{Automaton, Context, Match, MatchSink, Matches, PatternId};
pub use alphabet::Alphabet;
pub use error::{Error, Result};
