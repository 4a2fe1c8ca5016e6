// Anagram engine: word normalization, signatures and the signature index

pub mod index;
pub mod normalize;

pub use index::AnagramIndex;
pub use normalize::sanitize_query;

use crate::dictionary::{self, DictionarySource, SourceUnavailable};

/// Load the word list and build the index. Nothing can be served until this
/// returns `Ok`.
pub async fn initialize(
    source: &DictionarySource,
    http_client: &reqwest::Client,
) -> Result<AnagramIndex, SourceUnavailable> {
    let words = dictionary::load(source, http_client).await?;
    Ok(AnagramIndex::build(words))
}
