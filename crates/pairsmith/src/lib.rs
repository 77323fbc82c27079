//! # `pairsmith` BPE Merge Training
//!
//! Greedy byte-pair-encoding merge training over weighted vocabularies
//! of space-delimited symbol sequences.
//!
//! See:
//! * [`vocab`] for the [`vocab::Vocabulary`] and [`vocab::SymbolWord`] model, and vocab io.
//! * [`training`] to count pairs, select and merge them, and drive training rounds.
//! * [`report`] to present training results as text or JSON.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::CommonHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! As ``ahash``, but with ``foldhash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``rayon``
//!
//! This enables parallel pair counting using the ``rayon`` crate;
//! see [`training::MergeTrainerOptions::parallel`].
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use pairsmith::{
//!     report::{ReportFormat, write_report},
//!     training::{MergeTrainerOptions, WordCounterOptions},
//! };
//!
//! let mut counter = WordCounterOptions::default().init::<String, u64>()?;
//! counter.update_from_samples(["hug pug pun bun", "hug pun"])?;
//!
//! let vocab = counter.to_vocabulary::<String>()?;
//! let results = MergeTrainerOptions::new(4).init(vocab)?.into_results()?;
//!
//! let mut out = Vec::new();
//! write_report(&results, ReportFormat::Text, &mut out)?;
//! # Ok::<(), pairsmith::PairsmithError>(())
//! ```
#![warn(missing_docs, unused)]

mod errors;

pub mod report;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{PSResult, PairsmithError};
