//! Public suffix matching over reversed label tries.
//!
//! Rules are inserted right-to-left (`co.uk` becomes `uk -> co`), and a lookup
//! walks the hostname from its rightmost label inward:
//! - exact labels and `*` wildcards are both tried at every level
//! - the rule covering the most labels wins
//! - a matching exception rule (`!city.kawasaki.jp`) overrides the result
//!
//! ## Example
//!
//! ```
//! use public_suffix_r::trie::SuffixTrie;
//! use public_suffix_r::{Category, LookupOptions, Rule};
//!
//! let rules = vec![
//!     Rule::from_domain("uk", false, Category::Icann).unwrap(),
//!     Rule::from_domain("co.uk", false, Category::Icann).unwrap(),
//! ];
//! let trie = SuffixTrie::new(&rules);
//!
//! let found = trie.lookup("www.example.co.uk", &LookupOptions::default()).unwrap();
//! assert_eq!(found.public_suffix, "co.uk");
//! assert!(trie.has_tld("uk"));
//! ```

mod label_trie;
mod suffix_trie;

pub use suffix_trie::SuffixTrie;
