//! # Vocabulary
//!
//! A vocabulary maps word representations ([`SymbolWord`]s) to frequencies.
//!
//! Training rewrites a [`Vocabulary`] toward coarser symbols, one merge at a time.

pub mod io;

mod symbol_word;
mod vocabulary;

#[doc(inline)]
pub use symbol_word::{END_OF_WORD, SymbolWord};
#[doc(inline)]
pub use vocabulary::Vocabulary;
