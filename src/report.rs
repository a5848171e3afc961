//! Formatted rank output.
//!
//! Two labeled sections, one per estimator, listing every page in
//! lexicographic order with its rank to 4 decimal places.

use std::io::{self, Write};

use crate::corpus::Corpus;
use crate::pagerank::RankTable;

/// Write one labeled section of ranks.
///
/// Page ids already enumerate the corpus lexicographically, so this is a
/// plain id scan.
pub fn write_section<W: Write>(
    out: &mut W,
    label: &str,
    corpus: &Corpus,
    ranks: &RankTable,
) -> io::Result<()> {
    writeln!(out, "{label}")?;
    for (id, name) in corpus.pages() {
        writeln!(out, "  {name}: {:.4}", ranks.score(id))?;
    }
    Ok(())
}

/// Write the full report: sampling results (labeled with the sample count)
/// followed by iterative results.
pub fn write_report<W: Write>(
    out: &mut W,
    corpus: &Corpus,
    sampled: &RankTable,
    samples: usize,
    iterated: &RankTable,
) -> io::Result<()> {
    write_section(
        out,
        &format!("PageRank Results from Sampling (n = {samples})"),
        corpus,
        sampled,
    )?;
    write_section(out, "PageRank Results from Iteration", corpus, iterated)
}
