//! Digit reduction.
//!
//! Collapses a non-negative integer to a single digit by repeatedly
//! summing its decimal digits. Three named behaviors share the same
//! arithmetic and differ only in which numbers they leave untouched:
//!
//! - [`Reducer::reduce`]: the general reducer. Members of the special
//!   number set are returned as-is; everything else is summed down to 0..=9.
//! - [`Reducer::reduce_personal`]: used for personal numbers (expression,
//!   intimate, ...). Master numbers are preserved before falling back to
//!   the general reducer.
//! - [`Reducer::reduce_realization`]: used for realization periods. Only
//!   the realization terminals survive; any other non-digit result is
//!   summed again with no exemptions.

use crate::reduction::ReductionTrace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sum of the base-10 digits of `n`.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::reducer::digit_sum;
///
/// assert_eq!(digit_sum(1985), 23);
/// assert_eq!(digit_sum(0), 0);
/// ```
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit with no exemptions.
fn plain_reduce(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Digit reducer parameterised by its exemption sets.
///
/// # Examples
///
/// ```rust
/// use numerology_engine::Reducer;
///
/// let reducer = Reducer::standard();
/// assert_eq!(reducer.reduce(1985), 5); // 1+9+8+5 = 23 -> 5
/// assert_eq!(reducer.reduce(22), 22); // special number
/// assert_eq!(reducer.reduce(0), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reducer {
    special_numbers: BTreeSet<u32>,
    master_numbers: BTreeSet<u32>,
    realization_terminals: BTreeSet<u32>,
}

impl Reducer {
    /// Create a reducer from explicit sets.
    pub fn new(
        special_numbers: impl IntoIterator<Item = u32>,
        master_numbers: impl IntoIterator<Item = u32>,
        realization_terminals: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            special_numbers: special_numbers.into_iter().collect(),
            master_numbers: master_numbers.into_iter().collect(),
            realization_terminals: realization_terminals.into_iter().collect(),
        }
    }

    /// Special numbers `{11, 22, 33}`.
    pub fn standard() -> Self {
        Self::new([11, 22, 33], [11, 22, 33], [11, 22])
    }

    /// The special number set exempt from [`Reducer::reduce`].
    pub fn special_numbers(&self) -> &BTreeSet<u32> {
        &self.special_numbers
    }

    /// The master number set preserved by [`Reducer::reduce_personal`].
    pub fn master_numbers(&self) -> &BTreeSet<u32> {
        &self.master_numbers
    }

    /// The terminal set of [`Reducer::reduce_realization`].
    pub fn realization_terminals(&self) -> &BTreeSet<u32> {
        &self.realization_terminals
    }

    /// Whether `n` is exempt from general reduction.
    pub fn is_special(&self, n: u32) -> bool {
        self.special_numbers.contains(&n)
    }

    /// General reduction.
    ///
    /// The special-number check happens once, on the input. Intermediate
    /// sums are never checked, so 29 reduces to 2 even though 2+9 = 11.
    pub fn reduce(&self, n: u32) -> u32 {
        if self.is_special(n) {
            return n;
        }
        plain_reduce(n)
    }

    /// Reduction for personal numbers: master numbers are kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerology_engine::Reducer;
    ///
    /// let reducer = Reducer::standard();
    /// assert_eq!(reducer.reduce_personal(33), 33);
    /// assert_eq!(reducer.reduce_personal(12), 3);
    /// ```
    pub fn reduce_personal(&self, n: u32) -> u32 {
        if self.master_numbers.contains(&n) {
            return n;
        }
        self.reduce(n)
    }

    /// Reduction for realization periods.
    ///
    /// Output is always a digit 1..=9 (0 for 0) or a realization terminal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerology_engine::Reducer;
    ///
    /// let reducer = Reducer::standard();
    /// assert_eq!(reducer.reduce_realization(22), 22);
    /// assert_eq!(reducer.reduce_realization(33), 6);
    /// assert_eq!(reducer.reduce_realization(49), 4);
    /// ```
    pub fn reduce_realization(&self, n: u32) -> u32 {
        if self.realization_terminals.contains(&n) {
            return n;
        }
        let reduced = self.reduce(n);
        if reduced <= 9 || self.realization_terminals.contains(&reduced) {
            reduced
        } else {
            plain_reduce(reduced)
        }
    }

    /// General reduction with every intermediate value recorded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerology_engine::Reducer;
    ///
    /// let trace = Reducer::standard().trace(1985);
    /// assert_eq!(trace.steps, vec![1985, 23, 5]);
    /// assert_eq!(trace.value, 5);
    /// assert!(!trace.preserved);
    /// ```
    pub fn trace(&self, n: u32) -> ReductionTrace {
        let mut trace = ReductionTrace::new(n);
        if self.is_special(n) {
            trace.preserve();
            return trace;
        }
        let mut current = n;
        while current > 9 {
            current = digit_sum(current);
            trace.push_step(current);
        }
        trace
    }

    /// Ordered vibration scale: each digit 1..=9 followed by the special
    /// numbers whose digit sum reduces to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numerology_engine::Reducer;
    ///
    /// assert_eq!(
    ///     Reducer::standard().vibration_scale(),
    ///     vec![1, 2, 11, 3, 4, 22, 5, 6, 33, 7, 8, 9]
    /// );
    /// ```
    pub fn vibration_scale(&self) -> Vec<u32> {
        let mut scale = Vec::with_capacity(9 + self.special_numbers.len());
        for digit in 1..=9 {
            scale.push(digit);
            scale.extend(
                self.special_numbers
                    .iter()
                    .copied()
                    .filter(|&special| plain_reduce(special) == digit),
            );
        }
        scale
    }
}

impl Default for Reducer {
    fn default() -> Self {
        Self::standard()
    }
}
