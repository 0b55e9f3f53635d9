use std::path::Path;

use super::label_trie::LabelTrie;
use crate::error::Result;
use crate::normalize::split_labels;
use crate::parser::{parse_rules, parse_rules_from_file};
use crate::types::{CategoryMask, LookupOptions, PublicSuffix, Rule, SuffixMatch};

/// Public suffix rule set organized as two label tries.
///
/// Built once, then read-only: lookups take `&self` and share nothing
/// mutable, so a `SuffixTrie` can sit behind an `Arc` and serve any number
/// of threads.
#[derive(Debug, Default)]
pub struct SuffixTrie {
    /// Ordinary rules
    rules: LabelTrie,
    /// Exception rules (`!city.kawasaki.jp`)
    exceptions: LabelTrie,
}

impl SuffixTrie {
    /// Build the tries from parsed rules.
    pub fn new(rules: &[Rule]) -> Self {
        let mut trie = Self::default();
        for rule in rules {
            let target = if rule.is_exception() {
                &mut trie.exceptions
            } else {
                &mut trie.rules
            };
            target.insert(rule.parts(), CategoryMask::from(rule.category()));
        }

        tracing::debug!(
            rules = trie.rules.rule_count(),
            exceptions = trie.exceptions.rule_count(),
            nodes = trie.rules.node_count() + trie.exceptions.node_count(),
            "built public suffix trie"
        );

        trie
    }

    /// Parse a suffix list and build the tries from it.
    pub fn from_list(text: &str) -> Result<Self> {
        Ok(Self::new(&parse_rules(text)?))
    }

    /// Read and parse a suffix list file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(&parse_rules_from_file(path)?))
    }

    pub fn rule_count(&self) -> usize {
        self.rules.rule_count()
    }

    pub fn exception_count(&self) -> usize {
        self.exceptions.rule_count()
    }

    /// Check if `value` is a top-level rule label (e.g. `"com"`).
    /// Keys are stored decoded, so `value` must be in Unicode form (`"рф"`,
    /// not `"xn--p1ai"`).
    pub fn has_tld(&self, value: &str) -> bool {
        self.rules.has_root_label(value)
    }

    /// Find how many trailing labels of `hostname` form its public suffix.
    ///
    /// Returns `None` when no rule allowed by `options` matches.
    pub fn find_match(&self, hostname: &str, options: &LookupOptions) -> Option<SuffixMatch> {
        // An empty hostname has no suffix, even against a bare `*` rule.
        if hostname.is_empty() {
            return None;
        }

        let labels = split_labels(hostname);
        let allowed = options.allowed_mask();

        let matched = self.rules.longest_match(&labels, allowed)?;

        let result = match self.exceptions.longest_match(&labels, allowed) {
            // An exception rule names the first label that is NOT part of
            // the suffix.
            Some(exception) => SuffixMatch {
                suffix_length: labels.len() - (exception.start + 1),
                is_icann: exception.is_icann(),
                is_private: exception.is_private(),
            },
            None => SuffixMatch {
                suffix_length: labels.len() - matched.start,
                is_icann: matched.is_icann(),
                is_private: matched.is_private(),
            },
        };

        Some(result)
    }

    /// Find the public suffix of `hostname`.
    ///
    /// The returned suffix keeps the hostname's original label text, so a
    /// punycode label stays in its `xn--` form.
    pub fn lookup(&self, hostname: &str, options: &LookupOptions) -> Option<PublicSuffix> {
        let found = self.find_match(hostname, options);
        tracing::trace!(hostname, ?found, "public suffix lookup");

        let found = found?;
        Some(PublicSuffix {
            public_suffix: trailing_labels(hostname, found.suffix_length).to_string(),
            is_icann: found.is_icann,
            is_private: found.is_private,
        })
    }
}

/// Last `count` dot-separated labels of `hostname`, as a slice of it.
fn trailing_labels(hostname: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }
    let mut seen = 0;
    for (pos, _) in hostname.rmatch_indices('.') {
        seen += 1;
        if seen == count {
            return &hostname[pos + 1..];
        }
    }
    hostname
}
