//! Immutable hyperlink corpus with interned page identifiers.
//!
//! Pages are interned to dense `u32` ids in lexicographic name order, which
//! makes iteration deterministic and lets the report walk ids directly.
//! Outgoing links are stored as sorted, deduplicated id slices.

pub mod loader;

use rustc_hash::{FxHashMap, FxHashSet};

/// A closed set of pages and their outgoing links.
///
/// Invariants, guaranteed by construction:
/// - every link target is a page of the corpus (no dangling references),
/// - no page links to itself,
/// - ids `0..len()` enumerate pages in lexicographic name order.
///
/// A page with no outgoing links is a *sink*; the estimators treat it as
/// linking to every page in the corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Page names, lexicographically sorted; index is the page id.
    names: Vec<String>,
    /// Maps page name -> page id.
    name_to_id: FxHashMap<String, u32>,
    /// Outgoing link ids per page, sorted and deduplicated.
    links: Vec<Vec<u32>>,
}

impl Corpus {
    /// Build a corpus from pages and their raw link targets.
    ///
    /// Targets that name a page outside the corpus, and self-links, are
    /// dropped. Duplicate page entries are merged, keeping the union of
    /// their targets.
    pub fn from_pages<I, T>(pages: I) -> Self
    where
        I: IntoIterator<Item = (String, T)>,
        T: IntoIterator<Item = String>,
    {
        let mut raw: FxHashMap<String, FxHashSet<String>> = FxHashMap::default();
        for (name, targets) in pages {
            raw.entry(name).or_default().extend(targets);
        }

        let mut names: Vec<String> = raw.keys().cloned().collect();
        names.sort();

        let name_to_id: FxHashMap<String, u32> = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id as u32))
            .collect();

        // Only keep links to other pages in the corpus.
        let links = names
            .iter()
            .map(|name| {
                let id = name_to_id[name];
                let mut targets: Vec<u32> = raw[name]
                    .iter()
                    .filter_map(|t| name_to_id.get(t).copied())
                    .filter(|&t| t != id)
                    .collect();
                targets.sort_unstable();
                targets.dedup();
                targets
            })
            .collect();

        Self {
            names,
            name_to_id,
            links,
        }
    }

    /// Number of pages in the corpus.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the corpus has no pages.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Get a page id by name.
    pub fn page_id(&self, name: &str) -> Option<u32> {
        self.name_to_id.get(name).copied()
    }

    /// Get the name for a page id.
    pub fn page_name(&self, id: u32) -> &str {
        &self.names[id as usize]
    }

    /// Outgoing link ids of a page, sorted.
    pub fn out_links(&self, id: u32) -> &[u32] {
        &self.links[id as usize]
    }

    /// Out-degree of a page. Zero for sinks.
    pub fn out_degree(&self, id: u32) -> usize {
        self.links[id as usize].len()
    }

    /// Iterate over pages in id (lexicographic) order.
    pub fn pages(&self) -> impl Iterator<Item = (u32, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(id, name)| (id as u32, name.as_str()))
    }

    /// Find sink pages (pages with no outgoing links).
    pub fn sinks(&self) -> Vec<u32> {
        (0..self.len() as u32)
            .filter(|&id| self.links[id as usize].is_empty())
            .collect()
    }

    /// Total number of links across all pages.
    pub fn num_links(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }
}
