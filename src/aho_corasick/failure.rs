use std::collections::VecDeque;

use tracing::debug;

use super::trie::{StateId, Trie, ROOT, UNDEFINED};

/// Computes the failure and dictionary links for every node of `trie`.
///
/// Nodes are visited breadth first, so by the time a node is reached its
/// parent's failure link, and the failure links of every shallower node,
/// are already final. Runs once; the links are not updated incrementally.
pub(crate) fn build_links(trie: &mut Trie) {
  let alphabet_size = trie.alphabet().size();
  let mut queue: VecDeque<StateId> = VecDeque::new();
  let mut max_depth = 0;

  queue.push_back(ROOT);

  while let Some(state) = queue.pop_front() {
    for index in 0..alphabet_size {
      let child = match trie.child(state, index) {
        Some(child) => child,
        None => continue,
      };

      let fail = if state == ROOT {
        // a single symbol has no proper suffix but the empty string
        ROOT
      } else {
        longest_suffix_state(trie, trie.node(state).fail, index)
      };

      // the nearest terminal on the fail chain is either the fail state
      // itself or the one it already points at.
      let fail_node = trie.node(fail);
      let dict = if fail_node.is_terminal() { fail } else { fail_node.dict };

      let node = trie.node_mut(child);
      node.fail = fail;
      node.dict = dict;
      max_depth = max_depth.max(node.depth);

      queue.push_back(child);
    }
  }

  debug!(
    states = trie.state_count(),
    patterns = trie.pattern_count(),
    max_depth,
    "built failure links"
  );
}

/// Walks the fail chain from `state` until some state has a child on
/// `index`, returning that child, or the root when none does.
fn longest_suffix_state(trie: &Trie, mut state: StateId, index: usize) -> StateId {
  loop {
    if let Some(next) = trie.child(state, index) {
      return next;
    }
    if state == ROOT {
      return ROOT;
    }
    state = trie.node(state).fail;
    debug_assert_ne!(state, UNDEFINED, "fail chain left the trie before reaching the root");
  }
}

#[cfg(test)]
#[path = "failure_tests.rs"]
mod tests;
