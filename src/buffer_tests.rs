#![allow(clippy::unwrap_used, clippy::expect_used)]

use yare::parameterized;

use super::*;
use crate::aho_corasick::{Automaton, Match};
use crate::alphabet::Alphabet;

#[parameterized(
  single = { b"he", &["he"] },
  trailing_nul = { b"he\0she\0", &["he", "she"] },
  repeated_nuls = { b"\0\0he\0\0she\0\0", &["he", "she"] },
  only_nuls = { b"\0\0\0", &[] },
  empty = { b"", &[] },
)]
fn split_patterns_on_nul(bytes: &[u8], expected: &[&str]) {
  assert_eq!(split_patterns(bytes), expected);
}

#[test]
fn ascii_bytes_map_to_same_symbols() {
  let mapped: String = symbols(b"<script>\x7f").collect();
  assert_eq!(mapped, "<script>\x7f");
}

#[test]
fn non_ascii_bytes_map_to_nul() {
  let mapped: Vec<char> = symbols(&[b'a', 0x80, 0xff, b'b']).collect();
  assert_eq!(mapped, vec!['a', '\0', '\0', 'b']);
}

#[test]
fn non_ascii_byte_breaks_a_partial_match() {
  let automaton = Automaton::from_patterns(Alphabet::ascii(), split_patterns(b"ab\0b\0")).unwrap();
  let found = automaton.find_symbols(symbols(&[b'a', 0xc3, b'b'])).unwrap().collect::<crate::error::Result<Vec<Match>>>().unwrap();
  assert_eq!(found, vec![Match::new(1, 2, 1)]);
}
