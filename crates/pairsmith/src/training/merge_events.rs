//! # Merge Events

use crate::training::{CountType, SymbolType};
use crate::types::Pair;

/// One round of training: which pair was merged, and into what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeEvent<S: SymbolType, C: CountType> {
    /// The round number; rounds start at 1.
    pub round: usize,

    /// The merged ``(left, right)`` pair.
    pub pair: Pair<S>,

    /// The resulting symbol: ``left + right``.
    pub merged: S,

    /// The pair's aggregate count when it was selected.
    pub count: C,

    /// The vocabulary keys after the merge, when snapshots are enabled.
    pub vocab_keys: Option<Vec<String>>,
}

/// Why training stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaltReason {
    /// Every round in the budget was run.
    RoundBudgetExhausted,

    /// No word has two or more symbols left.
    NoPairsRemain,
}

impl HaltReason {
    /// A short, stable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HaltReason::RoundBudgetExhausted => "round_budget_exhausted",
            HaltReason::NoPairsRemain => "no_pairs_remain",
        }
    }
}

impl core::fmt::Display for HaltReason {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The training state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainerState {
    /// Rounds remain and pairs may exist.
    Running {
        /// The number of the next round to run.
        next_round: usize,
    },

    /// Training is over.
    Halted(HaltReason),
}

impl TrainerState {
    /// Has training halted?
    pub fn is_halted(&self) -> bool {
        matches!(self, TrainerState::Halted(_))
    }
}
