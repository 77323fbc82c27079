//! # Merge Training
//!
//! Greedy BPE merge training over a [`crate::vocab::Vocabulary`].
//!
//! Each round:
//! 1. counts the adjacent symbol pairs of every word, weighted by
//!    word frequency ([`count_pair_frequencies`]);
//! 2. stops if no pair exists;
//! 3. selects the most frequent pair ([`select_best_pair`]);
//! 4. rewrites every word, merging the pair into one symbol ([`merge_vocabulary`]);
//! 5. records a [`MergeEvent`].
//!
//! Ties on the maximum count are broken by a [`TieBreak`] policy;
//! the default, [`TieBreak::FirstSeen`], picks the pair encountered first
//! when scanning the vocabulary in insertion order.
//!
//! ## Training Example
//!
//! ```rust
//! use compact_str::CompactString;
//! use pairsmith::{
//!     training::{MergeTrainerOptions, train},
//!     vocab::Vocabulary,
//! };
//!
//! let vocab: Vocabulary<CompactString, u32> = Vocabulary::from_representations([
//!     ("h u g </w>", 1),
//!     ("p u g </w>", 1),
//!     ("p u n </w>", 1),
//!     ("b u n </w>", 1),
//! ])
//! .unwrap();
//!
//! let results = train(vocab, MergeTrainerOptions::new(4)).unwrap();
//!
//! assert_eq!(results.history.len(), 4);
//! assert_eq!(results.history[0].merged, "ug");
//! assert_eq!(
//!     results.vocab.keys(),
//!     vec!["h ug</w>", "p ug</w>", "p un</w>", "b un</w>"]
//! );
//! ```
//!
//! Raw text can be turned into a training vocabulary with a [`WordCounter`].

mod merge_events;
mod merge_trainer;
mod pair_counter;
mod pair_selection;
mod training_types;
mod vocab_merger;
mod word_counter;

#[doc(inline)]
pub use merge_events::{HaltReason, MergeEvent, TrainerState};
#[doc(inline)]
pub use merge_trainer::{MergeTrainer, MergeTrainerOptions, TrainResults, train};
#[doc(inline)]
pub use pair_counter::{PairCountTable, PairPosition, PairStat, count_pair_frequencies};
#[cfg(feature = "rayon")]
#[doc(inline)]
pub use pair_counter::count_pair_frequencies_parallel;
#[doc(inline)]
pub use pair_selection::{TieBreak, ranked_pairs, select_best_pair};
#[doc(inline)]
pub use training_types::{CountType, SymbolType};
pub(crate) use training_types::checked_count_add;
#[doc(inline)]
pub use vocab_merger::{merge_vocabulary, merged_symbol};
#[doc(inline)]
pub use word_counter::{DEFAULT_WORD_PATTERN, WordCounter, WordCounterOptions};
