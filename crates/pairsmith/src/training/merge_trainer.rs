//! # Merge Trainer

use crate::errors::{PSResult, PairsmithError};
use crate::training::merge_events::{HaltReason, MergeEvent, TrainerState};
use crate::training::pair_counter::PairCountTable;
use crate::training::pair_selection::{TieBreak, select_best_pair};
use crate::training::vocab_merger::{merge_vocabulary, merged_symbol};
use crate::training::{CountType, SymbolType};
use crate::vocab::Vocabulary;

/// Options for [`MergeTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeTrainerOptions {
    /// The maximum number of merge rounds.
    pub max_rounds: usize,

    /// How ties on the maximum pair count are broken.
    pub tie_break: TieBreak,

    /// Count pairs on the ``rayon`` pool.
    ///
    /// Ignored when the "rayon" feature is disabled.
    pub parallel: bool,

    /// Record a snapshot of the vocabulary keys in each [`MergeEvent`].
    pub record_snapshots: bool,
}

impl MergeTrainerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_rounds` - The maximum number of merge rounds.
    ///
    /// ## Returns
    /// A new `MergeTrainerOptions` instance, with the [`TieBreak::FirstSeen`]
    /// tie-break, serial counting, and snapshots enabled.
    pub fn new(max_rounds: usize) -> Self {
        Self {
            max_rounds,
            tie_break: TieBreak::default(),
            parallel: false,
            record_snapshots: true,
        }
    }

    /// Create new options from a signed round count.
    ///
    /// ## Errors
    /// [`PairsmithError::InvalidRoundBudget`] if `rounds` is negative.
    pub fn from_signed_rounds(rounds: i64) -> PSResult<Self> {
        let max_rounds =
            usize::try_from(rounds).map_err(|_| PairsmithError::InvalidRoundBudget { rounds })?;
        Ok(Self::new(max_rounds))
    }

    /// Sets the maximum number of merge rounds.
    pub fn with_max_rounds(
        self,
        max_rounds: usize,
    ) -> Self {
        Self { max_rounds, ..self }
    }

    /// Sets the tie-break policy.
    pub fn with_tie_break(
        self,
        tie_break: TieBreak,
    ) -> Self {
        Self { tie_break, ..self }
    }

    /// Enables or disables parallel pair counting.
    pub fn with_parallel(
        self,
        parallel: bool,
    ) -> Self {
        Self { parallel, ..self }
    }

    /// Enables or disables per-round vocabulary key snapshots.
    pub fn with_record_snapshots(
        self,
        record_snapshots: bool,
    ) -> Self {
        Self {
            record_snapshots,
            ..self
        }
    }

    /// Initializes a [`MergeTrainer`] over `vocab`.
    ///
    /// ## Errors
    /// [`PairsmithError::InvalidVocabulary`] if `vocab` cannot be trained on.
    pub fn init<S, C>(
        self,
        vocab: Vocabulary<S, C>,
    ) -> PSResult<MergeTrainer<S, C>>
    where
        S: SymbolType,
        C: CountType,
    {
        MergeTrainer::new(self, vocab)
    }
}

/// The results of a training run.
#[derive(Debug, Clone)]
pub struct TrainResults<S: SymbolType, C: CountType> {
    /// The final vocabulary.
    pub vocab: Vocabulary<S, C>,

    /// The merges performed, in order.
    pub history: Vec<MergeEvent<S, C>>,

    /// Why training stopped.
    pub halt_reason: HaltReason,
}

/// Greedy BPE merge trainer.
///
/// Each round counts the adjacent pairs of the working vocabulary,
/// selects the most frequent pair, and replaces the vocabulary with
/// one in which that pair is merged.
///
/// # Parameters
/// * `S` - the symbol type.
/// * `C` - the word frequency type.
#[derive(Debug, Clone)]
pub struct MergeTrainer<S: SymbolType, C: CountType> {
    options: MergeTrainerOptions,
    vocab: Vocabulary<S, C>,
    history: Vec<MergeEvent<S, C>>,
    state: TrainerState,
}

impl<S: SymbolType, C: CountType> MergeTrainer<S, C> {
    /// Initializes a [`MergeTrainer`].
    ///
    /// ## Arguments
    /// * `options` - The trainer options.
    /// * `vocab` - The initial vocabulary.
    ///
    /// ## Errors
    /// [`PairsmithError::InvalidVocabulary`] if `vocab` cannot be trained on.
    pub fn new(
        options: MergeTrainerOptions,
        vocab: Vocabulary<S, C>,
    ) -> PSResult<Self> {
        vocab.validate()?;

        let state = if options.max_rounds == 0 {
            TrainerState::Halted(HaltReason::RoundBudgetExhausted)
        } else if !vocab.has_pairs() {
            TrainerState::Halted(HaltReason::NoPairsRemain)
        } else {
            TrainerState::Running { next_round: 1 }
        };

        Ok(Self {
            history: Vec::new(),
            options,
            vocab,
            state,
        })
    }

    /// The trainer options.
    pub fn options(&self) -> &MergeTrainerOptions {
        &self.options
    }

    /// The current state.
    pub fn state(&self) -> TrainerState {
        self.state
    }

    /// The working vocabulary.
    pub fn vocab(&self) -> &Vocabulary<S, C> {
        &self.vocab
    }

    /// The merges performed so far.
    pub fn history(&self) -> &[MergeEvent<S, C>] {
        &self.history
    }

    fn count_pairs(&self) -> PSResult<PairCountTable<S, C>> {
        #[cfg(feature = "rayon")]
        if self.options.parallel {
            return PairCountTable::from_vocab_parallel(&self.vocab);
        }
        PairCountTable::from_vocab(&self.vocab)
    }

    /// Run one round.
    ///
    /// ## Returns
    /// The round's [`MergeEvent`], or ``None`` if training has halted
    /// (before or during this call).
    ///
    /// ## Errors
    /// [`crate::PairsmithError::InvalidVocabulary`] if a count overflows;
    /// the working vocabulary is unchanged. A vocabulary accepted by
    /// [`MergeTrainer::new`] never overflows.
    pub fn step(&mut self) -> PSResult<Option<&MergeEvent<S, C>>> {
        let TrainerState::Running { next_round: round } = self.state else {
            return Ok(None);
        };

        let table = self.count_pairs()?;
        let Some((pair, count)) = select_best_pair(&table, self.options.tie_break) else {
            log::debug!("round {round}: no pairs remain");
            self.state = TrainerState::Halted(HaltReason::NoPairsRemain);
            return Ok(None);
        };

        self.vocab = merge_vocabulary(&pair, &self.vocab)?;

        let merged = merged_symbol(&pair);
        log::debug!(
            "round {round}: {:?} -> {:?} (frequency: {count})",
            (pair.0.as_ref(), pair.1.as_ref()),
            merged.as_ref(),
        );

        let vocab_keys = self.options.record_snapshots.then(|| self.vocab.keys());
        self.history.push(MergeEvent {
            round,
            pair,
            merged,
            count,
            vocab_keys,
        });

        self.state = if round >= self.options.max_rounds {
            TrainerState::Halted(HaltReason::RoundBudgetExhausted)
        } else {
            TrainerState::Running {
                next_round: round + 1,
            }
        };

        Ok(self.history.last())
    }

    /// Run rounds until halted.
    ///
    /// ## Returns
    /// Why training stopped.
    ///
    /// ## Errors
    /// As [`MergeTrainer::step`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn run(&mut self) -> PSResult<HaltReason> {
        let max_rounds = self.options.max_rounds;
        if !self.state.is_halted() {
            log::info!(
                "Starting BPE merge training: up to {} rounds over {} words",
                max_rounds,
                self.vocab.len()
            );
        }

        let mut last_log_percent = 0;
        loop {
            if let TrainerState::Halted(reason) = self.state {
                log::info!(
                    "Finished training: {} merges completed ({reason})",
                    self.history.len()
                );
                return Ok(reason);
            }

            if let Some(event) = self.step()? {
                // Log progress every 1%
                let current_percent = (event.round * 100) / max_rounds;
                if current_percent > last_log_percent {
                    log::info!(
                        "Progress: {}% ({}/{} rounds) - Last merge: {:?} -> {:?} (frequency: {})",
                        current_percent,
                        event.round,
                        max_rounds,
                        (event.pair.0.as_ref(), event.pair.1.as_ref()),
                        event.merged.as_ref(),
                        event.count
                    );
                    last_log_percent = current_percent;
                }
            }
        }
    }

    /// Finish any remaining rounds, and release the trainer's results.
    ///
    /// ## Errors
    /// As [`MergeTrainer::step`].
    pub fn into_results(mut self) -> PSResult<TrainResults<S, C>> {
        let halt_reason = self.run()?;
        Ok(TrainResults {
            vocab: self.vocab,
            history: self.history,
            halt_reason,
        })
    }
}

/// Train `vocab` for up to `options.max_rounds` rounds.
///
/// ## Errors
/// [`PairsmithError::InvalidVocabulary`] if `vocab` cannot be trained on;
/// no rounds are run.
pub fn train<S: SymbolType, C: CountType>(
    vocab: Vocabulary<S, C>,
    options: MergeTrainerOptions,
) -> PSResult<TrainResults<S, C>> {
    options.init(vocab)?.into_results()
}
