//! # Pair Frequency Counting

use crate::errors::PSResult;
use crate::training::{CountType, SymbolType, checked_count_add};
use crate::types::{CommonHashMap, Pair, hash_map_with_capacity};
use crate::vocab::{SymbolWord, Vocabulary};

/// Where a pair was first encountered in counting order.
///
/// Ordered by vocabulary entry, then by offset within the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairPosition {
    /// The vocabulary entry index.
    pub entry: usize,

    /// The left symbol's offset within the word.
    pub offset: usize,
}

/// Aggregate statistics for one [`Pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairStat<C: CountType> {
    /// ``sum(freq(word) * occurrences(pair, word))`` over the vocabulary.
    pub count: C,

    /// The first occurrence in counting order.
    pub first_seen: PairPosition,
}

/// A ``{Pair -> PairStat}`` table for one training round.
///
/// Pairs which never occur are absent.
#[derive(Debug, Clone)]
pub struct PairCountTable<S: SymbolType, C: CountType> {
    stats: CommonHashMap<Pair<S>, PairStat<C>>,
}

impl<S: SymbolType, C: CountType> Default for PairCountTable<S, C> {
    fn default() -> Self {
        Self {
            stats: hash_map_with_capacity(0),
        }
    }
}

impl<S: SymbolType, C: CountType> PairCountTable<S, C> {
    /// Count the adjacent pairs of every word in `vocab`.
    ///
    /// ## Errors
    /// [`crate::PairsmithError::InvalidVocabulary`] if a pair count overflows `C`;
    /// this cannot happen for a vocabulary which passes [`Vocabulary::validate`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(vocab)))]
    pub fn from_vocab(vocab: &Vocabulary<S, C>) -> PSResult<Self> {
        let mut table = Self {
            stats: hash_map_with_capacity(vocab.len()),
        };
        for (entry, (word, count)) in vocab.entries().iter().enumerate() {
            table.add_word(entry, word, *count)?;
        }
        Ok(table)
    }

    /// Count the adjacent pairs of every word in `vocab`, on the ``rayon`` pool.
    ///
    /// Entries are counted into per-task partial tables, which are
    /// reduced after the join; the result is identical to [`Self::from_vocab`].
    ///
    /// ## Errors
    /// As [`Self::from_vocab`].
    #[cfg(feature = "rayon")]
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(vocab)))]
    pub fn from_vocab_parallel(vocab: &Vocabulary<S, C>) -> PSResult<Self> {
        use rayon::prelude::*;

        vocab
            .entries()
            .par_iter()
            .enumerate()
            .try_fold(
                Self::default,
                |mut table, (entry, (word, count))| -> PSResult<Self> {
                    table.add_word(entry, word, *count)?;
                    Ok(table)
                },
            )
            .try_reduce(Self::default, Self::merged)
    }

    /// Accumulate `count` for each adjacent pair in `word`.
    ///
    /// # Arguments
    /// * `entry` - the word's position in counting order.
    /// * `word` - the word.
    /// * `count` - the word's frequency.
    ///
    /// ## Errors
    /// [`crate::PairsmithError::InvalidVocabulary`] if a pair count overflows `C`.
    pub fn add_word(
        &mut self,
        entry: usize,
        word: &SymbolWord<S>,
        count: C,
    ) -> PSResult<()> {
        for (offset, (a, b)) in word.pairs().enumerate() {
            let position = PairPosition { entry, offset };
            match self.stats.get_mut(&(a.clone(), b.clone())) {
                Some(stat) => {
                    stat.count = checked_count_add(stat.count, count, "pair")?;
                    if position < stat.first_seen {
                        stat.first_seen = position;
                    }
                }
                None => {
                    self.stats.insert(
                        (a.clone(), b.clone()),
                        PairStat {
                            count,
                            first_seen: position,
                        },
                    );
                }
            }
        }
        Ok(())
    }

    /// Combine two partial tables.
    ///
    /// Counts are summed and the earliest first-seen position is kept.
    ///
    /// ## Errors
    /// [`crate::PairsmithError::InvalidVocabulary`] if a summed count overflows `C`.
    pub fn merged(
        self,
        other: Self,
    ) -> PSResult<Self> {
        let (mut big, small) = if self.stats.len() >= other.stats.len() {
            (self, other)
        } else {
            (other, self)
        };
        for (pair, stat) in small.stats {
            match big.stats.get_mut(&pair) {
                Some(s) => {
                    s.count = checked_count_add(s.count, stat.count, "pair")?;
                    s.first_seen = s.first_seen.min(stat.first_seen);
                }
                None => {
                    big.stats.insert(pair, stat);
                }
            }
        }
        Ok(big)
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Is the table empty?
    ///
    /// An empty table means no word has two or more symbols.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Look up a pair's aggregate count.
    pub fn count(
        &self,
        pair: &Pair<S>,
    ) -> Option<C> {
        self.stats.get(pair).map(|stat| stat.count)
    }

    /// Look up a pair's statistics.
    pub fn stat(
        &self,
        pair: &Pair<S>,
    ) -> Option<&PairStat<C>> {
        self.stats.get(pair)
    }

    /// Iterate over the table, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Pair<S>, &PairStat<C>)> + '_ {
        self.stats.iter()
    }

    /// The ``{Pair -> count}`` map.
    pub fn to_counts(&self) -> CommonHashMap<Pair<S>, C> {
        self.stats
            .iter()
            .map(|(pair, stat)| (pair.clone(), stat.count))
            .collect()
    }
}

/// Count pair frequencies over a vocabulary.
///
/// See [`PairCountTable::from_vocab`].
pub fn count_pair_frequencies<S: SymbolType, C: CountType>(
    vocab: &Vocabulary<S, C>
) -> PSResult<PairCountTable<S, C>> {
    PairCountTable::from_vocab(vocab)
}

/// Count pair frequencies over a vocabulary, on the ``rayon`` pool.
///
/// See [`PairCountTable::from_vocab_parallel`].
#[cfg(feature = "rayon")]
pub fn count_pair_frequencies_parallel<S: SymbolType, C: CountType>(
    vocab: &Vocabulary<S, C>
) -> PSResult<PairCountTable<S, C>> {
    PairCountTable::from_vocab_parallel(vocab)
}
