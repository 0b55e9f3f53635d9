//! Arena-backed trie over right-to-left domain labels.
//!
//! Nodes live in a single `Vec` and refer to each other by index, so lookups
//! only read shared slices and never allocate.

use std::collections::HashMap;

use crate::types::CategoryMask;

/// Label matching any single hostname label
pub(crate) const WILDCARD: &str = "*";

/// Index of a node in the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

const ROOT: NodeId = NodeId(0);

#[derive(Debug, Default)]
struct Node {
    children: HashMap<Box<str>, NodeId>,
    wildcard: Option<NodeId>,
    /// Union of categories of the rules ending here; empty if none do
    terminal: CategoryMask,
}

/// Best match found by a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    /// Index of the first hostname label covered by the matched rule
    pub start: usize,
    /// Categories of the terminal node that were accepted
    pub mask: CategoryMask,
}

impl Candidate {
    /// ICANN unless PRIVATE was the only accepted category.
    pub fn is_private(&self) -> bool {
        self.mask == CategoryMask::PRIVATE
    }

    pub fn is_icann(&self) -> bool {
        !self.is_private()
    }
}

/// Pick the candidate covering more labels. A missing candidate always
/// loses; on a tie the first one is kept.
fn longer(a: Option<Candidate>, b: Option<Candidate>) -> Option<Candidate> {
    match (a, b) {
        (None, other) | (other, None) => other,
        (Some(a), Some(b)) => Some(if b.start < a.start { b } else { a }),
    }
}

#[derive(Debug)]
pub(crate) struct LabelTrie {
    nodes: Vec<Node>,
    rules: usize,
}

impl Default for LabelTrie {
    fn default() -> Self {
        Self {
            nodes: vec![Node::default()],
            rules: 0,
        }
    }
}

impl LabelTrie {
    /// Insert a rule given as right-to-left labels, OR-ing `category` into
    /// the terminal mask of the final node.
    pub fn insert(&mut self, parts: &[String], category: CategoryMask) {
        let mut node = ROOT;
        for part in parts {
            node = self.child_or_insert(node, part);
        }
        self.nodes[node.0].terminal = self.nodes[node.0].terminal | category;
        self.rules += 1;
    }

    fn child_or_insert(&mut self, parent: NodeId, label: &str) -> NodeId {
        let existing = if label == WILDCARD {
            self.nodes[parent.0].wildcard
        } else {
            self.nodes[parent.0].children.get(label).copied()
        };
        if let Some(id) = existing {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        let node = &mut self.nodes[parent.0];
        if label == WILDCARD {
            node.wildcard = Some(id);
        } else {
            node.children.insert(label.into(), id);
        }
        id
    }

    /// Number of rules inserted (duplicates included)
    pub fn rule_count(&self) -> usize {
        self.rules
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True if `label` is an exact child of the root.
    pub fn has_root_label(&self, label: &str) -> bool {
        self.nodes[ROOT.0].children.contains_key(label)
    }

    /// Longest rule matching a suffix of `labels` whose terminal categories
    /// intersect `allowed`.
    pub fn longest_match<S: AsRef<str>>(
        &self,
        labels: &[S],
        allowed: CategoryMask,
    ) -> Option<Candidate> {
        self.search(labels, ROOT, labels.len(), allowed)
    }

    /// `remaining` is the number of labels not yet consumed; recursion depth
    /// is bounded by the depth of the trie, not the hostname.
    fn search<S: AsRef<str>>(
        &self,
        labels: &[S],
        id: NodeId,
        remaining: usize,
        allowed: CategoryMask,
    ) -> Option<Candidate> {
        let node = &self.nodes[id.0];

        let accepted = node.terminal & allowed;
        let mut best = if accepted.is_empty() {
            None
        } else {
            Some(Candidate {
                start: remaining,
                mask: accepted,
            })
        };

        if remaining == 0 {
            return best;
        }

        let label = labels[remaining - 1].as_ref();
        if let Some(&child) = node.children.get(label) {
            best = longer(best, self.search(labels, child, remaining - 1, allowed));
        }
        if let Some(child) = node.wildcard {
            best = longer(best, self.search(labels, child, remaining - 1, allowed));
        }

        best
    }
}
