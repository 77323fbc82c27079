//! # Training Types
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::AddAssign,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive};

use crate::errors::{PSResult, PairsmithError};

/// A type that can be used as a symbol.
///
/// Symbols are built from string slices, and merged symbols
/// are built from the concatenation of two symbols.
pub trait SymbolType:
    for<'a> From<&'a str> + AsRef<str> + Debug + Clone + Send + Sync + Eq + Hash + Ord
{
}

impl<T> SymbolType for T where
    T: for<'a> From<&'a str> + AsRef<str> + Debug + Clone + Send + Sync + Eq + Hash + Ord
{
}

/// A type that can be used as a word frequency.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
{
}

/// Add two counts, failing on overflow of `C`.
///
/// ## Errors
/// [`PairsmithError::InvalidVocabulary`] if ``a + b`` exceeds ``C::max_value()``.
pub(crate) fn checked_count_add<C: CountType>(
    a: C,
    b: C,
    what: &str,
) -> PSResult<C> {
    a.checked_add(&b).ok_or_else(|| {
        PairsmithError::InvalidVocabulary(format!(
            "{what} frequency overflow: {a} + {b} exceeds {}",
            C::max_value()
        ))
    })
}
