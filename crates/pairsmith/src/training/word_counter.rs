//! # Word Counter

use regex::Regex;

use crate::errors::PSResult;
use crate::training::{CountType, SymbolType, checked_count_add};
use crate::types::{CommonHashMap, hash_map_with_capacity};
use crate::vocab::{END_OF_WORD, Vocabulary};

/// The default word split pattern: runs of non-whitespace.
pub const DEFAULT_WORD_PATTERN: &str = r"\S+";

/// Options for [`WordCounter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCounterOptions {
    /// The regex pattern matching words.
    pub pattern: String,

    /// The end-of-word marker appended to each word; ``None`` disables it.
    pub end_marker: Option<String>,
}

impl Default for WordCounterOptions {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_WORD_PATTERN.to_string(),
            end_marker: Some(END_OF_WORD.to_string()),
        }
    }
}

impl WordCounterOptions {
    /// Sets the word pattern.
    pub fn with_pattern<P: Into<String>>(
        self,
        pattern: P,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }

    /// Sets the end-of-word marker.
    pub fn with_end_marker(
        self,
        end_marker: Option<String>,
    ) -> Self {
        Self { end_marker, ..self }
    }

    /// Initializes a [`WordCounter`] from these options.
    ///
    /// ## Errors
    /// [`crate::PairsmithError::Pattern`] if the pattern does not compile.
    pub fn init<K, C>(self) -> PSResult<WordCounter<K, C>>
    where
        K: SymbolType,
        C: CountType,
    {
        WordCounter::new(self)
    }
}

/// Counts the words of raw text samples.
///
/// Words are remembered in order of first appearance, which becomes
/// the insertion order of the vocabulary built from them.
pub struct WordCounter<K, C>
where
    K: SymbolType,
    C: CountType,
{
    options: WordCounterOptions,
    regex: Regex,
    order: Vec<K>,
    word_counts: CommonHashMap<K, C>,
}

impl<K, C> WordCounter<K, C>
where
    K: SymbolType,
    C: CountType,
{
    /// Create a new word counter.
    pub fn new(options: WordCounterOptions) -> PSResult<Self> {
        let regex = Regex::new(&options.pattern)?;
        Ok(Self {
            options,
            regex,
            order: Vec::new(),
            word_counts: hash_map_with_capacity(1024),
        })
    }

    /// The number of distinct words seen.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Has nothing been counted?
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up a word's count.
    pub fn count(
        &self,
        word: &str,
    ) -> Option<C> {
        self.word_counts.get(&K::from(word)).copied()
    }

    /// Update word counts inplace from text.
    ///
    /// ## Errors
    /// [`crate::PairsmithError::InvalidVocabulary`] if a word count overflows `C`.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) -> PSResult<()> {
        for mat in self.regex.find_iter(text.as_ref()) {
            let k: K = mat.as_str().into();
            match self.word_counts.get_mut(&k) {
                Some(count) => *count = checked_count_add(*count, C::one(), "word")?,
                None => {
                    self.order.push(k.clone());
                    self.word_counts.insert(k, C::one());
                }
            }
        }
        Ok(())
    }

    /// Update word counts inplace from a sample iterator.
    ///
    /// ## Errors
    /// As [`Self::update_from_text`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, samples)))]
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) -> PSResult<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample)?;
        }
        Ok(())
    }

    /// Convert the counts to a training vocabulary.
    ///
    /// Each word becomes its characters, plus the end marker when configured.
    ///
    /// ## Errors
    /// [`crate::PairsmithError::InvalidVocabulary`] if words which split to the
    /// same symbols sum past `C`.
    pub fn to_vocabulary<S: SymbolType>(&self) -> PSResult<Vocabulary<S, C>> {
        let end_marker = self.options.end_marker.as_deref();
        Vocabulary::from_word_counts(
            self.order
                .iter()
                .map(|k| (k.as_ref(), self.word_counts.get(k).copied().unwrap_or_default())),
            end_marker,
        )
    }
}
