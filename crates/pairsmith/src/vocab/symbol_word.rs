//! # Symbol Word

use core::fmt;

use crate::training::SymbolType;
use crate::types::Pair;

/// The reserved symbol appended to every word before training.
pub const END_OF_WORD: &str = "</w>";

/// An ordered sequence of symbols (a word representation).
///
/// Rendered as space-joined symbols, e.g. ``"h u g </w>"``.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolWord<S: SymbolType> {
    symbols: Vec<S>,
}

impl<S: SymbolType> SymbolWord<S> {
    /// Create a word from a symbol sequence.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<S>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a space-delimited word representation.
    ///
    /// Any run of whitespace separates symbols; leading and trailing
    /// whitespace is ignored. A blank representation yields an empty word.
    pub fn parse(representation: &str) -> Self {
        Self {
            symbols: representation.split_whitespace().map(S::from).collect(),
        }
    }

    /// Split a surface word into its characters, plus an optional end marker.
    ///
    /// # Arguments
    /// * `word` - the surface form.
    /// * `end_marker` - appended as a final symbol when present; see [`END_OF_WORD`].
    pub fn from_word_chars(
        word: &str,
        end_marker: Option<&str>,
    ) -> Self {
        let mut buf = [0u8; 4];
        let mut symbols: Vec<S> = word
            .chars()
            .map(|c| S::from(&*c.encode_utf8(&mut buf)))
            .collect();
        if let Some(marker) = end_marker {
            symbols.push(S::from(marker));
        }
        Self { symbols }
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Get the number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this word empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get an iterator over the adjacent ``(left, right)`` windows of this word.
    pub fn pairs(&self) -> impl Iterator<Item = (&S, &S)> + '_ {
        self.symbols.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Does this word contain `pair` as adjacent whole symbols?
    pub fn contains_pair(
        &self,
        pair: &Pair<S>,
    ) -> bool {
        self.pairs().any(|(a, b)| *a == pair.0 && *b == pair.1)
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`.
    ///
    /// Occurrences are matched left to right over whole symbols;
    /// a symbol which merely ends (or starts) with one side of the
    /// pair never matches.
    ///
    /// # Returns
    /// The number of occurrences replaced.
    pub fn merge_pair(
        &mut self,
        pair: &Pair<S>,
        replacement: &S,
    ) -> usize {
        let n = self.symbols.len();
        if n < 2 {
            return 0;
        }

        let mut merged = 0;
        let mut new_symbols: Vec<S> = Vec::with_capacity(n);
        let mut old = core::mem::take(&mut self.symbols).into_iter().peekable();

        while let Some(current) = old.next() {
            if current == pair.0
                && let Some(next) = old.peek()
                && *next == pair.1
            {
                old.next();
                new_symbols.push(replacement.clone());
                merged += 1;
            } else {
                new_symbols.push(current);
            }
        }

        self.symbols = new_symbols;
        merged
    }
}

impl<S: SymbolType> fmt::Display for SymbolWord<S> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for (idx, symbol) in self.symbols.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            f.write_str(symbol.as_ref())?;
        }
        Ok(())
    }
}
