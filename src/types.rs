use std::ops::{BitAnd, BitOr};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SuffixError};

/// Maximum number of labels in a rule (DNS names top out at 127 labels).
pub const MAX_LABELS: usize = 127;

/// Origin of a public suffix rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// ICANN root zone database
    Icann,
    /// Privately submitted suffix (e.g. `github.io`)
    Private,
}

/// Set of rule categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategoryMask(u8);

impl CategoryMask {
    pub const NONE: Self = Self(0);
    pub const ICANN: Self = Self(1);
    pub const PRIVATE: Self = Self(2);

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every category in `other` is also in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl From<Category> for CategoryMask {
    fn from(category: Category) -> Self {
        match category {
            Category::Icann => Self::ICANN,
            Category::Private => Self::PRIVATE,
        }
    }
}

impl BitOr for CategoryMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for CategoryMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

/// A single public suffix rule, already split into labels.
///
/// `parts` are stored right-to-left: the rule `co.uk` is `["uk", "co"]`.
/// A label of `*` matches any single hostname label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    parts: Vec<String>,
    exception: bool,
    category: Category,
    source: String,
}

impl Rule {
    /// Create a rule from right-to-left labels.
    ///
    /// Fails if `parts` is empty, contains an empty label, or is longer than
    /// [`MAX_LABELS`].
    pub fn new(
        parts: Vec<String>,
        exception: bool,
        category: Category,
        source: impl Into<String>,
    ) -> Result<Self> {
        let source = source.into();
        let invalid = |message: &str| SuffixError::InvalidRule {
            source_text: source.clone(),
            message: message.to_string(),
        };

        if parts.is_empty() {
            return Err(invalid("rule has no labels"));
        }
        if parts.len() > MAX_LABELS {
            return Err(invalid("rule has too many labels"));
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid("rule contains an empty label"));
        }

        Ok(Self {
            parts,
            exception,
            category,
            source,
        })
    }

    /// Create a rule from its dotted form, e.g. `"*.kawasaki.jp"`.
    /// Labels are taken as-is (no case folding or punycode decoding).
    pub fn from_domain(
        domain: &str,
        exception: bool,
        category: Category,
    ) -> Result<Self> {
        let parts = domain.split('.').rev().map(str::to_string).collect();
        Self::new(parts, exception, category, domain)
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn is_exception(&self) -> bool {
        self.exception
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Original textual form, for diagnostics.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Raw outcome of a suffix lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Number of trailing hostname labels in the public suffix
    pub suffix_length: usize,
    pub is_icann: bool,
    pub is_private: bool,
}

/// Public suffix found for a hostname
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicSuffix {
    /// Suffix in the hostname's original label text
    pub public_suffix: String,
    pub is_icann: bool,
    pub is_private: bool,
}

/// Which rule categories a lookup may match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LookupOptions {
    /// Accept rules from the ICANN section
    pub allow_icann_domains: bool,
    /// Accept rules from the PRIVATE section
    pub allow_private_domains: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            allow_icann_domains: true,
            allow_private_domains: false,
        }
    }
}

impl LookupOptions {
    /// Create default options (ICANN only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options accepting both ICANN and PRIVATE rules.
    pub fn all() -> Self {
        Self {
            allow_icann_domains: true,
            allow_private_domains: true,
        }
    }

    pub fn with_icann_domains(mut self, allow: bool) -> Self {
        self.allow_icann_domains = allow;
        self
    }

    pub fn with_private_domains(mut self, allow: bool) -> Self {
        self.allow_private_domains = allow;
        self
    }

    /// Parse options from JSON, e.g. `{"allowPrivateDomains": true}`.
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Categories a terminal node must carry to count as a match.
    pub fn allowed_mask(&self) -> CategoryMask {
        let mut mask = CategoryMask::NONE;
        if self.allow_private_domains {
            mask = mask | CategoryMask::PRIVATE;
        }
        if self.allow_icann_domains {
            mask = mask | CategoryMask::ICANN;
        }
        mask
    }
}
