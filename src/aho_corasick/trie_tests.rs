#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

fn trie_with(patterns: &[&str]) -> Trie {
  let mut trie = Trie::new(Alphabet::lowercase());
  for pattern in patterns {
    trie.insert(pattern).unwrap();
  }
  trie
}

/// follows `path` from the root, panicking if any edge is missing
fn walk(trie: &Trie, path: &str) -> StateId {
  let mut state = ROOT;
  for c in path.chars() {
    let index = trie.alphabet().index(c).unwrap();
    state = trie.child(state, index).unwrap_or_else(|| panic!("no edge for {:?} in {:?}", c, path));
  }
  state
}

#[test]
fn new_trie_has_only_the_root() {
  let trie = Trie::new(Alphabet::lowercase());
  assert_eq!(trie.state_count(), 1);
  assert_eq!(trie.pattern_count(), 0);
  let root = trie.node(ROOT);
  assert_eq!(root.symbol, '/');
  assert_eq!(root.depth, 0);
  assert!(!root.is_terminal());
  assert_eq!(root.children.len(), 26);
}

#[test]
fn insert_creates_one_node_per_distinct_prefix() {
  // he, hers, his, she share h, he, s, sh
  let trie = trie_with(&["he", "she", "his", "hers"]);
  // h e r s i s s h e
  assert_eq!(trie.state_count(), 1 + 9);
}

#[test]
fn terminal_depth_is_pattern_length() {
  let trie = trie_with(&["hers", "he", "h"]);
  for pattern in ["h", "he", "hers"] {
    let node = trie.node(walk(&trie, pattern));
    assert!(node.is_terminal());
    assert_eq!(node.depth, pattern.len());
  }
  assert!(!trie.node(walk(&trie, "her")).is_terminal());
}

#[test]
fn nodes_remember_their_edge_symbol() {
  let trie = trie_with(&["abc"]);
  assert_eq!(trie.node(walk(&trie, "a")).symbol, 'a');
  assert_eq!(trie.node(walk(&trie, "ab")).symbol, 'b');
  assert_eq!(trie.node(walk(&trie, "abc")).symbol, 'c');
}

#[test]
fn reinsert_returns_first_id_and_changes_nothing() {
  let mut trie = trie_with(&["abc", "xy"]);
  let states = trie.state_count();
  assert_eq!(trie.insert("abc").unwrap(), 0);
  assert_eq!(trie.insert("xy").unwrap(), 1);
  assert_eq!(trie.state_count(), states);
  assert_eq!(trie.pattern_count(), 2);
}

#[test]
fn prefix_of_existing_pattern_becomes_terminal_without_new_nodes() {
  let mut trie = trie_with(&["abc"]);
  let states = trie.state_count();
  assert_eq!(trie.insert("ab").unwrap(), 1);
  assert_eq!(trie.state_count(), states);
  assert_eq!(trie.find("ab"), Some(1));
}

#[test]
fn insertion_order_does_not_change_structure() {
  let forward = trie_with(&["a", "ab", "bab", "bc"]);
  let backward = trie_with(&["bc", "bab", "ab", "a"]);
  assert_eq!(forward.state_count(), backward.state_count());
  for path in ["a", "ab", "b", "ba", "bab", "bc"] {
    let f = forward.node(walk(&forward, path));
    let b = backward.node(walk(&backward, path));
    assert_eq!(f.depth, b.depth);
    assert_eq!(f.is_terminal(), b.is_terminal());
  }
}

#[test]
fn empty_pattern_is_rejected() {
  let mut trie = Trie::new(Alphabet::lowercase());
  assert_eq!(trie.insert("").unwrap_err(), Error::InvalidPattern);
}

#[test]
fn invalid_symbol_leaves_trie_untouched() {
  let mut trie = trie_with(&["ab"]);
  let err = trie.insert("abXc").unwrap_err();
  assert_eq!(err, Error::InvalidSymbol { symbol: 'X', first: 'a', size: 26 });
  assert_eq!(trie.state_count(), 3);
  assert_eq!(trie.pattern_count(), 1);
}

#[test]
fn find_reports_whole_patterns_only() {
  let trie = trie_with(&["hello", "hel"]);
  assert_eq!(trie.find("hello"), Some(0));
  assert_eq!(trie.find("hel"), Some(1));
  assert_eq!(trie.find("hell"), None);
  assert_eq!(trie.find("help"), None);
  assert_eq!(trie.find("HELLO"), None);
  assert_eq!(trie.find(""), None);
}

#[test]
fn patterns_are_kept_in_insertion_order() {
  let trie = trie_with(&["she", "he", "she"]);
  assert_eq!(trie.patterns(), ["she".to_string(), "he".to_string()]);
  assert_eq!(trie.pattern(1), Some("he"));
  assert_eq!(trie.pattern(2), None);
}
