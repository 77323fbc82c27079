//! # Best Pair Selection

use core::cmp::{Ordering, Reverse};

use crate::training::pair_counter::{PairCountTable, PairStat};
use crate::training::{CountType, SymbolType};
use crate::types::Pair;

/// How to choose among pairs which tie on the maximum count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TieBreak {
    /// The pair first encountered in counting order:
    /// vocabulary insertion order, then left to right within the word.
    #[default]
    FirstSeen,

    /// The lexically smallest ``(left, right)`` pair.
    Lexical,
}

impl TieBreak {
    /// Order two candidates; the greater candidate wins.
    pub fn compare<S: SymbolType, C: CountType>(
        &self,
        a: (&Pair<S>, &PairStat<C>),
        b: (&Pair<S>, &PairStat<C>),
    ) -> Ordering {
        let by_count = a.1.count.cmp(&b.1.count);
        match self {
            TieBreak::FirstSeen => {
                by_count.then_with(|| Reverse(a.1.first_seen).cmp(&Reverse(b.1.first_seen)))
            }
            TieBreak::Lexical => by_count.then_with(|| Reverse(a.0).cmp(&Reverse(b.0))),
        }
    }
}

/// Select the pair with the maximum aggregate count.
///
/// ## Returns
/// ``None`` if the table is empty; otherwise the winning pair and its count.
pub fn select_best_pair<S: SymbolType, C: CountType>(
    table: &PairCountTable<S, C>,
    tie_break: TieBreak,
) -> Option<(Pair<S>, C)> {
    table
        .iter()
        .max_by(|&a, &b| tie_break.compare(a, b))
        .map(|(pair, stat)| (pair.clone(), stat.count))
}

/// Rank every pair in selection order, best first.
///
/// The first element is the pair [`select_best_pair`] would choose.
pub fn ranked_pairs<S: SymbolType, C: CountType>(
    table: &PairCountTable<S, C>,
    tie_break: TieBreak,
) -> Vec<(Pair<S>, C)> {
    let mut ranked: Vec<(&Pair<S>, &PairStat<C>)> = table.iter().collect();
    ranked.sort_by(|&a, &b| tie_break.compare(b, a));
    ranked
        .into_iter()
        .map(|(pair, stat)| (pair.clone(), stat.count))
        .collect()
}
