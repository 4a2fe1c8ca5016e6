use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use crate::config::DEFAULT_MAX_QUERY_LENGTH;

use super::normalize::{normalize, sanitize_query, Signature};

/// Counters gathered while building the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Raw entries handed to `build`
    pub lines_read: usize,
    /// Entries with no letters left after normalization
    pub discarded: usize,
    /// Distinct normalized words stored
    pub words: usize,
}

/// Dictionary words grouped by letter signature.
///
/// Immutable once built, so a single instance can be shared by any number of
/// readers without locking.
#[derive(Debug, Clone)]
pub struct AnagramIndex {
    groups: HashMap<Signature, BTreeSet<String>>,
    max_query_len: usize,
    stats: IndexStats,
}

impl AnagramIndex {
    /// Build the index from raw dictionary entries.
    ///
    /// Entries are normalized to `a`-`z`, empty results are dropped and
    /// repeated words are stored once.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let started = Instant::now();
        let mut groups: HashMap<Signature, BTreeSet<String>> = HashMap::new();
        let mut stats = IndexStats::default();

        for raw in words {
            stats.lines_read += 1;
            let Some(word) = normalize(raw.as_ref()) else {
                stats.discarded += 1;
                continue;
            };

            if groups.entry(Signature::of(&word)).or_default().insert(word) {
                stats.words += 1;
            }
        }

        tracing::info!(
            "Indexed {} words under {} signatures ({} lines read, {} discarded) in {:?}",
            stats.words,
            groups.len(),
            stats.lines_read,
            stats.discarded,
            started.elapsed()
        );

        Self {
            groups,
            max_query_len: DEFAULT_MAX_QUERY_LENGTH,
            stats,
        }
    }

    /// Use a different cap on the number of query letters considered
    pub fn with_max_query_len(mut self, max_query_len: usize) -> Self {
        self.max_query_len = max_query_len;
        self
    }

    /// All dictionary words made of exactly the letters of `query`, in
    /// lexical order.
    ///
    /// Any input is accepted. Anything that isn't a letter is ignored, only
    /// the first `max_query_len` letters count, and an input with no letters
    /// matches nothing. The query itself is part of the result when it is a
    /// dictionary word.
    pub fn solve(&self, query: &str) -> Vec<String> {
        let query = sanitize_query(query, self.max_query_len);
        self.matches(&query)
            .map(|words| words.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Group for an already sanitized query
    fn matches(&self, sanitized: &str) -> Option<&BTreeSet<String>> {
        if sanitized.is_empty() {
            return None;
        }
        let signature = Signature::of(sanitized);
        let group = self.groups.get(&signature);
        if group.is_none() {
            tracing::trace!("No words for signature {}", signature);
        }
        group
    }

    pub fn max_query_len(&self) -> usize {
        self.max_query_len
    }

    pub fn word_count(&self) -> usize {
        self.stats.words
    }

    pub fn signature_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> AnagramIndex {
        AnagramIndex::build(["listen", "silent", "enlist", "tinsel", "banana"])
    }

    fn sorted_letters(word: &str) -> Vec<char> {
        let mut letters: Vec<char> = word.chars().collect();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn test_solve_finds_all_anagrams() {
        let index = sample_index();
        assert_eq!(
            index.solve("enlist"),
            vec!["enlist", "listen", "silent", "tinsel"]
        );
        assert_eq!(index.solve("ananab"), vec!["banana"]);
    }

    #[test]
    fn test_solve_no_match_is_empty() {
        let index = sample_index();
        assert!(index.solve("tasbeve").is_empty());
        assert!(index.solve("listens").is_empty());
        assert!(index.solve("liste").is_empty());
    }

    #[test]
    fn test_solve_includes_query_word() {
        let index = sample_index();
        assert!(index.solve("enlist").contains(&"enlist".to_string()));
        assert!(index.solve("banana").contains(&"banana".to_string()));
    }

    #[test]
    fn test_solve_ignores_case_and_symbols() {
        let index = sample_index();
        let expected = index.solve("listen");
        assert_eq!(index.solve("Listen"), expected);
        assert_eq!(index.solve("LISTEN"), expected);
        assert_eq!(index.solve(" l-i-s-t-e-n! "), expected);
    }

    #[test]
    fn test_solve_is_repeatable() {
        let index = sample_index();
        assert_eq!(index.solve("tinsel"), index.solve("tinsel"));
    }

    #[test]
    fn test_solve_empty_and_letterless_queries() {
        let index = AnagramIndex::build(["", "123", "listen"]);
        assert!(index.solve("").is_empty());
        assert!(index.solve("42!").is_empty());
        assert!(index.matches("").is_none());
    }

    #[test]
    fn test_solve_caps_query_length() {
        let long_word = "z".repeat(32);
        let index = AnagramIndex::build([long_word.clone(), "z".repeat(33)]);

        // Only the first 32 letters of the query are looked up
        assert_eq!(index.solve(&"z".repeat(40)), vec![long_word.clone()]);
        assert_eq!(index.solve(&"Z".repeat(33)), vec![long_word]);
    }

    #[test]
    fn test_custom_query_cap() {
        let index = AnagramIndex::build(["ab", "abc"]).with_max_query_len(2);
        assert_eq!(index.max_query_len(), 2);
        assert_eq!(index.solve("bac"), vec!["ab"]);
    }

    #[test]
    fn test_build_deduplicates_words() {
        let index = AnagramIndex::build(["listen", "listen", "Listen", "silent"]);
        assert_eq!(index.solve("silent"), vec!["listen", "silent"]);
        assert_eq!(index.word_count(), 2);
        assert_eq!(index.signature_count(), 1);
    }

    #[test]
    fn test_build_normalizes_dictionary_words() {
        let index = AnagramIndex::build(["Don't", "  TONS ", "2nd"]);
        assert_eq!(index.solve("dont"), vec!["dont"]);
        assert_eq!(index.solve("snot"), vec!["tons"]);
        assert_eq!(index.solve("nd"), vec!["nd"]);
    }

    #[test]
    fn test_build_stats() {
        let index = AnagramIndex::build(["listen", "", "--", "silent", "listen"]);
        assert_eq!(
            index.stats(),
            IndexStats {
                lines_read: 5,
                discarded: 2,
                words: 2,
            }
        );
    }

    #[test]
    fn test_empty_index() {
        let index = AnagramIndex::build(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.word_count(), 0);
        assert!(index.solve("anything").is_empty());
    }

    #[test]
    fn test_words_group_only_with_anagrams() {
        let words = ["listen", "silent", "enlist", "tinsel", "banana", "stone", "notes", "onset"];
        let index = AnagramIndex::build(words);

        for w1 in words {
            let result = index.solve(w1);
            for w2 in words {
                let same_letters = sorted_letters(w1) == sorted_letters(w2);
                assert_eq!(
                    result.contains(&w2.to_string()),
                    same_letters,
                    "'{}' in results for '{}' should be {}",
                    w2,
                    w1,
                    same_letters
                );
            }
        }
    }

    #[test]
    fn test_no_false_positives() {
        let index = AnagramIndex::build(["Stone", "notes", "tones", "onset", "toes", "nest"]);
        for query in ["SETON", "e.n.o.t.s", "toes!", "xyz"] {
            let expected = sorted_letters(&sanitize_query(query, 32));
            for word in index.solve(query) {
                assert_eq!(sorted_letters(&word), expected);
            }
        }
    }

    #[test]
    fn test_index_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnagramIndex>();
    }
}
