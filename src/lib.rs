//! Public Suffix Engine - fast public suffix lookups for Rust
//!
//! This library finds the public suffix of a hostname (`co.uk`, `com`,
//! `github.io`) by matching it against a public suffix rule set:
//! - Exact, wildcard (`*.ck`) and exception (`!www.ck`) rules
//! - Longest-match semantics over reversed label tries
//! - ICANN / PRIVATE category filtering
//! - Punycode (`xn--`) label decoding
//! - Optional LRU caching of lookups
//!
//! # Example
//!
//! ```rust
//! use public_suffix_r::{LookupOptions, SuffixTrie};
//!
//! let list = "
//! // ===BEGIN ICANN DOMAINS===
//! uk
//! co.uk
//! *.kawasaki.jp
//! !city.kawasaki.jp
//! // ===BEGIN PRIVATE DOMAINS===
//! github.io
//! ";
//!
//! let trie = SuffixTrie::from_list(list).unwrap();
//!
//! let found = trie.lookup("www.example.co.uk", &LookupOptions::default()).unwrap();
//! assert_eq!(found.public_suffix, "co.uk");
//! assert!(found.is_icann);
//!
//! // Private rules are opt-in
//! assert!(trie.lookup("me.github.io", &LookupOptions::default()).is_none());
//! let found = trie.lookup("me.github.io", &LookupOptions::all()).unwrap();
//! assert_eq!(found.public_suffix, "github.io");
//! assert!(found.is_private);
//! ```
//!
//! # Rule Syntax
//!
//! | Rule | Example | Description |
//! |------|---------|-------------|
//! | Exact | `co.uk` | Suffix is exactly these labels |
//! | Wildcard | `*.kawasaki.jp` | `*` matches any single label |
//! | Exception | `!city.kawasaki.jp` | Suffix is the rule minus its first label |

pub mod cache;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use cache::{CachedSuffixTrie, DEFAULT_CACHE_SIZE};
pub use error::{Result, SuffixError};
pub use parser::{parse_rules, parse_rules_from_file};
pub use trie::SuffixTrie;
pub use types::{
    Category, CategoryMask, LookupOptions, PublicSuffix, Rule, SuffixMatch, MAX_LABELS,
};
