//! Directory loader for HTML link corpora.
//!
//! Each `.html` file in the directory becomes a page, identified by its
//! filename. Link targets are extracted with a literal pattern match on
//! anchor `href` attributes; this is deliberately not a markup parser.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::{RankError, Result};

/// Matches `href="..."` inside an anchor tag, tolerating arbitrary
/// attributes before `href`.
static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+[^>]*?href="([^"]*)""#).expect("valid href pattern"));

/// Load a corpus from a directory of HTML pages.
///
/// Files without an `.html` extension are silently excluded. Self-links and
/// links to files outside the corpus are dropped during [`Corpus`]
/// construction. I/O failures propagate with the offending path attached.
pub fn load_corpus(dir: &Path) -> Result<Corpus> {
    let entries = fs::read_dir(dir).map_err(|source| RankError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut pages = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| RankError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }

        let contents = fs::read_to_string(&path).map_err(|source| RankError::ReadPage {
            path: path.clone(),
            source,
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        let targets: Vec<String> = HREF_RE
            .captures_iter(&contents)
            .map(|cap| cap[1].to_string())
            .collect();

        debug!(page = %name, raw_links = targets.len(), "loaded page");
        pages.push((name, targets));
    }

    Ok(Corpus::from_pages(pages))
}

/// Extract raw `href` targets from HTML contents.
///
/// Exposed for tests; [`load_corpus`] applies this per file.
pub fn extract_links(contents: &str) -> Vec<String> {
    HREF_RE
        .captures_iter(contents)
        .map(|cap| cap[1].to_string())
        .collect()
}
