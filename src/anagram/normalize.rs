use std::fmt;

/// Lowercased `a`-`z` letters of `raw`, everything else skipped.
///
/// Both dictionary words and queries go through this, so the index and the
/// lookups always agree on what a letter is.
fn letters(raw: &str) -> impl Iterator<Item = char> + '_ {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
}

/// Normalize a dictionary word. `None` when no letters survive.
pub fn normalize(raw: &str) -> Option<String> {
    let word: String = letters(raw).collect();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Normalize untrusted query input, keeping at most `max_len` letters.
///
/// Scanning stops once `max_len` letters have been accepted.
pub fn sanitize_query(raw: &str, max_len: usize) -> String {
    letters(raw).take(max_len).collect()
}

/// Canonical key for a letter multiset: the letters in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    /// Signature of an already normalized word
    pub fn of(normalized: &str) -> Self {
        let mut bytes = normalized.as_bytes().to_vec();
        bytes.sort_unstable();
        // Sorting ASCII bytes keeps them valid UTF-8
        Self(bytes.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
