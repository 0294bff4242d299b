//! Mass functions: validation at construction and summation at query time.

use crate::error::{DistributionError, Result, SpaceError};
use std::collections::BTreeMap;

/// Tolerance for the sum-equals-one check on a mass function.
pub const EPSILON: f64 = 1e-9;

/// Checks that `mass` is a probability distribution.
///
/// Entries are inspected in key order; the first non-finite or negative mass is reported.
/// The empty mapping sums to 0 and is rejected as not normalized.
///
/// # Errors
/// Returns a [`DistributionError`] naming the first violated condition.
///
/// # Example
/// ```rust
/// use prob_space::mass::validate;
/// use std::collections::BTreeMap;
///
/// assert!(validate(&BTreeMap::from([(1, 0.25), (2, 0.75)])).is_ok());
/// assert!(validate(&BTreeMap::from([(1, -0.25), (2, 1.25)])).is_err());
/// ```
pub fn validate<O>(mass: &BTreeMap<O, f64>) -> std::result::Result<(), DistributionError> {
    let mut total = 0.0;

    for &p in mass.values() {
        if !p.is_finite() {
            return Err(DistributionError::non_finite(p));
        }
        if p < 0.0 {
            return Err(DistributionError::negative(p));
        }
        total += p;
    }

    if (total - 1.0).abs() > EPSILON {
        return Err(DistributionError::not_normalized(total));
    }
    Ok(())
}

/// Sums the mass of every outcome yielded by `outcomes`.
///
/// Outcomes missing from `mass` contribute nothing when `ignore_unknown` is set;
/// otherwise they make the whole sum fail with [`SpaceError::UnknownOutcome`].
pub(crate) fn aggregate<'a, O, I>(
    mass: &BTreeMap<O, f64>,
    outcomes: I,
    ignore_unknown: bool,
) -> Result<f64>
where
    O: Ord + 'a,
    I: IntoIterator<Item = &'a O>,
{
    let mut total = 0.0;
    let mut unknown = 0;

    for outcome in outcomes {
        match mass.get(outcome) {
            Some(p) => total += p,
            None if ignore_unknown => {}
            None => unknown += 1,
        }
    }

    if unknown > 0 {
        return Err(SpaceError::unknown_outcome(unknown));
    }
    Ok(total)
}
