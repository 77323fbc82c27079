//! # Weighted Vocabulary

use crate::errors::{PSResult, PairsmithError};
use crate::training::{CountType, SymbolType, checked_count_add};
use crate::types::{CommonHashMap, CommonHashSet, hash_map_with_capacity};
use crate::vocab::SymbolWord;

/// A ``{SymbolWord -> frequency}`` map which remembers insertion order.
///
/// Keys are unique; inserting a word which is already present adds
/// its frequency to the existing entry, which keeps its original position.
///
/// The insertion order is the counting order used for deterministic
/// pair selection.
#[derive(Debug, Clone)]
pub struct Vocabulary<S: SymbolType, C: CountType> {
    entries: Vec<(SymbolWord<S>, C)>,
    index: CommonHashMap<SymbolWord<S>, usize>,
}

impl<S: SymbolType, C: CountType> Default for Vocabulary<S, C> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<S: SymbolType, C: CountType> PartialEq for Vocabulary<S, C> {
    /// Vocabularies are equal when they hold the same entries in the same order.
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.entries == other.entries
    }
}

impl<S: SymbolType, C: CountType> Eq for Vocabulary<S, C> {}

impl<S: SymbolType, C: CountType> Vocabulary<S, C> {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty vocabulary with room for `capacity` words.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: hash_map_with_capacity(capacity),
        }
    }

    /// Build a vocabulary from ``(word, count)`` entries.
    ///
    /// ## Errors
    /// [`PairsmithError::InvalidVocabulary`] if summing duplicate words overflows `C`.
    pub fn from_entries<I>(items: I) -> PSResult<Self>
    where
        I: IntoIterator<Item = (SymbolWord<S>, C)>,
    {
        let mut vocab = Self::new();
        for (word, count) in items {
            vocab.insert(word, count)?;
        }
        Ok(vocab)
    }

    /// Build a vocabulary from ``(representation, count)`` pairs.
    ///
    /// Each representation is split on whitespace; see [`SymbolWord::parse`].
    ///
    /// ## Errors
    /// [`PairsmithError::InvalidVocabulary`] if summing duplicate words overflows `C`.
    pub fn from_representations<I, R>(items: I) -> PSResult<Self>
    where
        I: IntoIterator<Item = (R, C)>,
        R: AsRef<str>,
    {
        Self::from_entries(
            items
                .into_iter()
                .map(|(repr, count)| (SymbolWord::parse(repr.as_ref()), count)),
        )
    }

    /// Build a vocabulary from ``(word, count)`` pairs of surface words.
    ///
    /// Each word is split into characters, plus `end_marker` when present.
    ///
    /// ## Errors
    /// [`PairsmithError::InvalidVocabulary`] if summing duplicate words overflows `C`.
    pub fn from_word_counts<I, R>(
        items: I,
        end_marker: Option<&str>,
    ) -> PSResult<Self>
    where
        I: IntoIterator<Item = (R, C)>,
        R: AsRef<str>,
    {
        Self::from_entries(items.into_iter().map(|(word, count)| {
            (SymbolWord::from_word_chars(word.as_ref(), end_marker), count)
        }))
    }

    /// Add `count` to the frequency of `word`.
    ///
    /// # Returns
    /// The entry's frequency after the insert.
    ///
    /// ## Errors
    /// [`PairsmithError::InvalidVocabulary`] if the sum overflows `C`;
    /// the vocabulary is unchanged.
    pub fn insert(
        &mut self,
        word: SymbolWord<S>,
        count: C,
    ) -> PSResult<C> {
        match self.index.get(&word) {
            Some(&idx) => {
                let entry = &mut self.entries[idx].1;
                *entry = checked_count_add(*entry, count, "word")?;
                Ok(*entry)
            }
            None => {
                self.index.insert(word.clone(), self.entries.len());
                self.entries.push((word, count));
                Ok(count)
            }
        }
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is this vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// View the ``(word, count)`` entries in insertion order.
    pub fn entries(&self) -> &[(SymbolWord<S>, C)] {
        &self.entries
    }

    /// Iterate over the ``(word, count)`` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SymbolWord<S>, C)> + '_ {
        self.entries.iter().map(|(w, c)| (w, *c))
    }

    /// Look up the frequency of `word`.
    pub fn get(
        &self,
        word: &SymbolWord<S>,
    ) -> Option<C> {
        self.index.get(word).map(|&idx| self.entries[idx].1)
    }

    /// Look up the frequency of a space-delimited representation.
    pub fn get_representation(
        &self,
        representation: &str,
    ) -> Option<C> {
        self.get(&SymbolWord::parse(representation))
    }

    /// The rendered word representations, in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(w, _)| w.to_string()).collect()
    }

    /// The sum of all frequencies, saturating at ``C::max_value()``.
    ///
    /// [`Self::validate`] rejects vocabularies whose total does not fit.
    pub fn total_frequency(&self) -> C {
        self.entries
            .iter()
            .fold(C::zero(), |acc, &(_, count)| acc.saturating_add(count))
    }

    /// The set of distinct symbols used across all words.
    pub fn symbol_set(&self) -> CommonHashSet<&S> {
        self.entries
            .iter()
            .flat_map(|(w, _)| w.symbols().iter())
            .collect()
    }

    /// Does any word have at least two symbols?
    pub fn has_pairs(&self) -> bool {
        self.entries.iter().any(|(w, _)| w.len() >= 2)
    }

    /// Check that this vocabulary can be trained on.
    ///
    /// Besides the entry checks, the total frequency and the total pair
    /// weight ``sum(freq * (len - 1))`` must fit in `C`. Merges conserve the
    /// first and never grow the second, and the second bounds every pair
    /// count; so no training round on a valid vocabulary can overflow.
    ///
    /// ## Errors
    /// [`PairsmithError::InvalidVocabulary`] if the vocabulary is empty,
    /// a word has no symbols, a frequency is not positive, or a total
    /// overflows `C`.
    pub fn validate(&self) -> PSResult<()> {
        if self.entries.is_empty() {
            return Err(PairsmithError::InvalidVocabulary(
                "vocabulary is empty".to_string(),
            ));
        }
        let mut total = C::zero();
        let mut pair_weight = C::zero();
        for (idx, (word, count)) in self.entries.iter().enumerate() {
            if word.is_empty() {
                return Err(PairsmithError::InvalidVocabulary(format!(
                    "entry {idx} has no symbols"
                )));
            }
            if *count <= C::zero() {
                return Err(PairsmithError::InvalidVocabulary(format!(
                    "entry {idx} ({word:?}) has non-positive frequency {count}",
                    word = word.to_string(),
                )));
            }
            total = checked_count_add(total, *count, "total")?;

            let weight = C::from_usize(word.len() - 1)
                .and_then(|pairs| count.checked_mul(&pairs))
                .ok_or_else(|| {
                    PairsmithError::InvalidVocabulary(format!(
                        "entry {idx} pair frequency overflow: {count} * {} exceeds {}",
                        word.len() - 1,
                        C::max_value()
                    ))
                })?;
            pair_weight = checked_count_add(pair_weight, weight, "pair")?;
        }
        Ok(())
    }
}

impl<S: SymbolType, C: CountType> IntoIterator for Vocabulary<S, C> {
    type Item = (SymbolWord<S>, C);
    type IntoIter = std::vec::IntoIter<(SymbolWord<S>, C)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use compact_str::CompactString;

    use super::*;
    use crate::vocab::END_OF_WORD;

    type V = Vocabulary<CompactString, u32>;

    fn demo() -> V {
        V::from_representations([
            ("h u g </w>", 1),
            ("p u g </w>", 1),
            ("p u n </w>", 1),
            ("b u n </w>", 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_insertion_order() {
        let vocab = demo();
        assert_eq!(vocab.len(), 4);
        assert_eq!(
            vocab.keys(),
            vec!["h u g </w>", "p u g </w>", "p u n </w>", "b u n </w>"]
        );
        assert_eq!(vocab.get_representation("p u n </w>"), Some(1));
        assert_eq!(vocab.get_representation("p u n"), None);
    }

    #[test]
    fn test_duplicate_keys_sum() {
        let mut vocab = V::from_representations([("a b", 1), ("c", 4)]).unwrap();
        assert_eq!(vocab.insert(SymbolWord::parse("a  b"), 2).unwrap(), 3);

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.keys(), vec!["a b", "c"]);
        assert_eq!(vocab.get_representation("a b"), Some(3));
        assert_eq!(vocab.total_frequency(), 7);
    }

    #[test]
    fn test_insert_overflow() {
        let mut vocab = Vocabulary::<CompactString, u8>::from_representations([("a b", 200)])
            .unwrap();

        let err = vocab.insert(SymbolWord::parse("a b"), 100).unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));
        assert_eq!(vocab.get_representation("a b"), Some(200));

        let res = Vocabulary::<CompactString, u8>::from_word_counts(
            [("hug", 128), ("hug", 128)],
            Some(END_OF_WORD),
        );
        assert!(matches!(res, Err(PairsmithError::InvalidVocabulary(_))));
    }

    #[test]
    fn test_from_word_counts() {
        let vocab =
            V::from_word_counts([("hug", 10), ("pug", 5), ("hug", 2)], Some(END_OF_WORD)).unwrap();
        assert_eq!(vocab.keys(), vec!["h u g </w>", "p u g </w>"]);
        assert_eq!(vocab.get_representation("h u g </w>"), Some(12));
    }

    #[test]
    fn test_from_entries_sums() {
        let vocab = V::from_entries([
            (SymbolWord::parse("a b"), 1),
            (SymbolWord::parse("ab"), 2),
            (SymbolWord::parse("a b"), 3),
        ])
        .unwrap();
        assert_eq!(vocab.keys(), vec!["a b", "ab"]);
        assert_eq!(vocab.get_representation("a b"), Some(4));
    }

    #[test]
    fn test_symbol_set() {
        let vocab = demo();
        let mut symbols: Vec<&str> = vocab.symbol_set().into_iter().map(|s| s.as_str()).collect();
        symbols.sort();
        assert_eq!(symbols, vec!["</w>", "b", "g", "h", "n", "p", "u"]);
    }

    #[test]
    fn test_has_pairs() {
        assert!(demo().has_pairs());
        let vocab = V::from_representations([("hug</w>", 1), ("a", 2)]).unwrap();
        assert!(!vocab.has_pairs());
    }

    #[test]
    fn test_validate() {
        assert!(demo().validate().is_ok());

        let err = V::new().validate().unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));

        let vocab = V::from_representations([("a b", 1), ("   ", 1)]).unwrap();
        let err = vocab.validate().unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));

        let vocab = V::from_representations([("a b", 0)]).unwrap();
        let err = vocab.validate().unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));

        let vocab = Vocabulary::<String, i32>::from_representations([("a b", -2)]).unwrap();
        let err = vocab.validate().unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));
    }

    #[test]
    fn test_validate_totals_fit() {
        type Narrow = Vocabulary<CompactString, u8>;

        // Pair weight 200 * 1 + 27 * 2 fits.
        let vocab = Narrow::from_representations([("a b", 200), ("a b c", 27)]).unwrap();
        assert!(vocab.validate().is_ok());

        // Shared pair (a, b) would count 200 + 100.
        let vocab = Narrow::from_representations([("a b", 200), ("a b c", 100)]).unwrap();
        let err = vocab.validate().unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));

        // One word repeating a pair: 100 * 3.
        let vocab = Narrow::from_representations([("a b a b", 100)]).unwrap();
        let err = vocab.validate().unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));

        // Total frequency overflows, though no pair does.
        let vocab = Narrow::from_representations([("a", 200), ("b", 100)]).unwrap();
        assert_eq!(vocab.total_frequency(), 255);
        let err = vocab.validate().unwrap_err();
        assert!(matches!(err, PairsmithError::InvalidVocabulary(_)));
    }

    #[test]
    fn test_eq_is_ordered() {
        let a = V::from_representations([("a", 1), ("b", 1)]).unwrap();
        let b = V::from_representations([("b", 1), ("a", 1)]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
