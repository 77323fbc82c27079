//! # Vocabulary Merging

use crate::errors::PSResult;
use crate::training::{CountType, SymbolType};
use crate::types::Pair;
use crate::vocab::Vocabulary;

/// The symbol a merged pair becomes: ``left + right``.
pub fn merged_symbol<S: SymbolType>(pair: &Pair<S>) -> S {
    let (a, b) = (pair.0.as_ref(), pair.1.as_ref());
    let mut buf = String::with_capacity(a.len() + b.len());
    buf.push_str(a);
    buf.push_str(b);
    S::from(buf.as_str())
}

/// Rewrite every word of `vocab`, merging `pair` into a single symbol.
///
/// Words are rewritten with [`crate::vocab::SymbolWord::merge_pair`];
/// words which become identical have their frequencies summed.
/// The input is unchanged; the result is built in full before it is returned.
///
/// ## Errors
/// [`crate::PairsmithError::InvalidVocabulary`] if a collision sum overflows `C`;
/// this cannot happen for a vocabulary which passes [`Vocabulary::validate`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip(vocab)))]
pub fn merge_vocabulary<S: SymbolType, C: CountType>(
    pair: &Pair<S>,
    vocab: &Vocabulary<S, C>,
) -> PSResult<Vocabulary<S, C>> {
    let replacement = merged_symbol(pair);

    let mut merged = Vocabulary::with_capacity(vocab.len());
    for (word, count) in vocab.iter() {
        let mut word = word.clone();
        word.merge_pair(pair, &replacement);
        merged.insert(word, count)?;
    }
    Ok(merged)
}
