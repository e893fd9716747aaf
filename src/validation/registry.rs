//! URL deduplication and white-list routing
//!
//! Builds the registry of distinct URLs and splits it into the URLs that
//! must be checked, the URLs that repeat, and the white-listed ones.

use memchr::memmem;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Distinct URLs with their occurrence counts, in first-occurrence order.
///
/// The registry is immutable once built; its order is the dispatch order
/// used for result slots.
#[derive(Debug, Clone, Default)]
pub struct UrlRegistry {
    order: Vec<String>,
    counts: FxHashMap<String, usize>,
}

impl UrlRegistry {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = Vec::new();
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();

        for url in urls {
            let url = url.into();
            match counts.get_mut(&url) {
                Some(count) => *count += 1,
                None => {
                    order.push(url.clone());
                    counts.insert(url, 1);
                }
            }
        }

        Self { order, counts }
    }

    /// Number of distinct URLs
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of candidate URLs the registry was built from
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, url: &str) -> usize {
        self.counts.get(url).copied().unwrap_or(0)
    }

    /// Distinct URLs with their counts, in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|url| (url.as_str(), self.count(url)))
    }
}

/// Substring patterns excluding URLs from live checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhiteList {
    patterns: Vec<String>,
}

impl WhiteList {
    /// Build a white list; entries are trimmed and blank ones dropped.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| pattern.as_ref().trim().to_string())
            .filter(|pattern| !pattern.is_empty())
            .collect();

        Self { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| memmem::find(url.as_bytes(), pattern.as_bytes()).is_some())
    }
}

/// A URL that occurs more than once in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub url: String,
    pub count: usize,
}

/// Output of [`classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// URLs to check, in dispatch order
    pub unique: Vec<String>,
    /// URLs seen more than once, white-listed or not
    pub duplicates: Vec<Duplicate>,
    /// URLs excluded from checking
    pub white_listed: Vec<String>,
}

/// Split the registry into URLs to check, duplicates and white-listed URLs.
pub fn classify(registry: &UrlRegistry, white_list: &WhiteList) -> Classification {
    let mut classification = Classification {
        unique: Vec::with_capacity(registry.len()),
        ..Default::default()
    };

    for (url, count) in registry.iter() {
        if count > 1 {
            classification.duplicates.push(Duplicate {
                url: url.to_string(),
                count,
            });
        }
        if white_list.contains(url) {
            classification.white_listed.push(url.to_string());
            continue;
        }
        classification.unique.push(url.to_string());
    }

    classification
}
