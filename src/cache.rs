use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::trie::SuffixTrie;
use crate::types::{CategoryMask, LookupOptions, PublicSuffix};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cache key: hostname plus the categories the lookup accepted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    hostname: String,
    allowed: CategoryMask,
}

/// Suffix trie with an LRU cache of recent lookups.
///
/// The trie itself stays shared and lock-free; only the cache sits behind a
/// mutex.
pub struct CachedSuffixTrie {
    trie: Arc<SuffixTrie>,
    cache: Mutex<LruCache<CacheKey, Option<PublicSuffix>>>,
}

impl CachedSuffixTrie {
    /// Wrap `trie` with a cache holding up to `cache_size` entries (at least 1).
    pub fn new(trie: Arc<SuffixTrie>, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            trie,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// The underlying trie
    pub fn trie(&self) -> &Arc<SuffixTrie> {
        &self.trie
    }

    /// Same as [`SuffixTrie::lookup`], memoized.
    pub fn lookup(&self, hostname: &str, options: &LookupOptions) -> Option<PublicSuffix> {
        let key = CacheKey {
            hostname: hostname.to_string(),
            allowed: options.allowed_mask(),
        };

        let mut cache = self.cache.lock();

        if let Some(cached) = cache.get(&key) {
            return cached.clone();
        }

        // Computed under the lock; lookups are CPU-only and short.
        let result = self.trie.lookup(hostname, options);
        cache.put(key, result.clone());

        result
    }

    /// Number of cached lookups
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}
