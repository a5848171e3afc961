//! Random-surfer transition model.
//!
//! Given a current page, produces the probability distribution over which
//! page a random surfer visits next: with probability `damping` follow one
//! of the page's links uniformly, otherwise jump to any corpus page
//! uniformly. A sink page is treated as linking to every page, so its
//! distribution is uniform regardless of damping.

use crate::corpus::Corpus;

/// Probability distribution over the next page, indexed by page id.
///
/// Pure function of its inputs; the result sums to 1.0.
///
/// `page` must be a valid id of `corpus` and `damping` must lie in [0, 1];
/// callers (the estimators) validate both before driving the model.
pub fn transition_model(corpus: &Corpus, page: u32, damping: f64) -> Vec<f64> {
    let n = corpus.len();
    let links = corpus.out_links(page);

    // Sink page: behave as if it links to every page, including itself.
    if links.is_empty() {
        return vec![1.0 / n as f64; n];
    }

    let base = (1.0 - damping) / n as f64;
    let link_share = damping / links.len() as f64;

    let mut dist = vec![base; n];
    for &target in links {
        dist[target as usize] += link_share;
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(name: &str, targets: &[&str]) -> (String, Vec<String>) {
        (
            name.to_string(),
            targets.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn three_page_corpus() -> Corpus {
        Corpus::from_pages([
            page("1.html", &["2.html"]),
            page("2.html", &["1.html", "3.html"]),
            page("3.html", &["2.html"]),
        ])
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let corpus = three_page_corpus();
        for damping in [0.0, 0.15, 0.5, 0.85, 1.0] {
            for id in 0..corpus.len() as u32 {
                let dist = transition_model(&corpus, id, damping);
                let sum: f64 = dist.iter().sum();
                assert!(
                    (sum - 1.0).abs() < 1e-9,
                    "sum {sum} for page {id}, damping {damping}"
                );
            }
        }
    }

    #[test]
    fn test_linked_pages_get_link_share() {
        let corpus = three_page_corpus();
        let p1 = corpus.page_id("1.html").unwrap();
        let p2 = corpus.page_id("2.html").unwrap();
        let p3 = corpus.page_id("3.html").unwrap();

        // Page 1 links only to page 2.
        let dist = transition_model(&corpus, p1, 0.85);
        let base = 0.15 / 3.0;
        assert!((dist[p1 as usize] - base).abs() < 1e-12);
        assert!((dist[p2 as usize] - (0.85 + base)).abs() < 1e-12);
        assert!((dist[p3 as usize] - base).abs() < 1e-12);
    }

    #[test]
    fn test_link_share_split_across_targets() {
        let corpus = three_page_corpus();
        let p2 = corpus.page_id("2.html").unwrap();

        // Page 2 links to pages 1 and 3.
        let dist = transition_model(&corpus, p2, 0.85);
        let expected = 0.85 / 2.0 + 0.15 / 3.0;
        let p1 = corpus.page_id("1.html").unwrap();
        let p3 = corpus.page_id("3.html").unwrap();
        assert!((dist[p1 as usize] - expected).abs() < 1e-12);
        assert!((dist[p3 as usize] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sink_page_is_uniform() {
        let corpus = Corpus::from_pages([
            page("a.html", &["b.html"]),
            page("b.html", &[]),
            page("c.html", &["a.html"]),
        ]);
        let sink = corpus.page_id("b.html").unwrap();

        let dist = transition_model(&corpus, sink, 0.85);
        for &p in &dist {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_damping_is_uniform() {
        let corpus = three_page_corpus();
        let p1 = corpus.page_id("1.html").unwrap();

        let dist = transition_model(&corpus, p1, 0.0);
        for &p in &dist {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_single_page_corpus() {
        // One page, necessarily a sink (self-links are dropped).
        let corpus = Corpus::from_pages([page("only.html", &["only.html"])]);
        let dist = transition_model(&corpus, 0, 0.85);
        assert_eq!(dist, vec![1.0]);
    }
}
