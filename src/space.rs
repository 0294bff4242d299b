#![allow(clippy::float_cmp, clippy::cast_precision_loss)]

use crate::config::SpaceConfig;
use crate::error::{Result, SpaceError};
use crate::event::{Event, intersection_of, union_of};
use crate::mass;
use crate::traits::Outcome;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, trace};

/// A finite discrete probability space.
///
/// Built once from a mass function mapping each outcome to its probability. The
/// mass function is validated on construction and never changes afterwards; the
/// only mutable state is the unknown-handling mode, which decides whether events
/// naming outcomes outside the sample space are rejected (strict, the default) or
/// have those outcomes ignored (permissive).
///
/// # Example
/// ```rust
/// use prob_space::{Event, ProbabilitySpace};
///
/// let die = ProbabilitySpace::uniform(1..=6).unwrap();
/// let low = Event::from([1, 2]);
///
/// assert!((die.probability(&low).unwrap() - 1.0 / 3.0).abs() < 1e-9);
/// assert!((die.complement(&low).unwrap() - 2.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Clone)]
pub struct ProbabilitySpace<O> {
    mass: BTreeMap<O, f64>,
    ignore_unknown: bool,
}

impl<O: Outcome> ProbabilitySpace<O> {
    /// Builds a strict-mode space from a mass function.
    ///
    /// # Errors
    /// Returns [`SpaceError::InvalidDistribution`] if any mass is negative or
    /// non-finite, or if the masses do not sum to 1 within [`EPSILON`](crate::EPSILON).
    /// An empty mass function is always rejected.
    ///
    /// # Example
    /// ```rust
    /// use prob_space::{ProbabilitySpace, SpaceError};
    /// use std::collections::BTreeMap;
    ///
    /// let coin = ProbabilitySpace::new(BTreeMap::from([("heads", 0.5), ("tails", 0.5)]));
    /// assert!(coin.is_ok());
    ///
    /// let bent = ProbabilitySpace::new(BTreeMap::from([("heads", -0.1), ("tails", 1.1)]));
    /// assert!(matches!(bent, Err(SpaceError::InvalidDistribution(_))));
    /// ```
    pub fn new(mass: BTreeMap<O, f64>) -> Result<Self> {
        Self::with_config(mass, SpaceConfig::default())
    }

    /// Builds a space from a mass function, starting in the mode given by `config`.
    ///
    /// # Errors
    /// Same as [`ProbabilitySpace::new`].
    pub fn with_config(mass: BTreeMap<O, f64>, config: SpaceConfig) -> Result<Self> {
        mass::validate(&mass)?;
        debug!(
            outcomes = mass.len(),
            ignore_unknown = config.ignore_unknown,
            "constructed probability space"
        );
        Ok(Self {
            mass,
            ignore_unknown: config.ignore_unknown,
        })
    }

    /// Builds a strict-mode space giving every distinct outcome equal mass.
    ///
    /// # Errors
    /// Returns [`SpaceError::InvalidDistribution`] if `outcomes` is empty.
    ///
    /// # Example
    /// ```rust
    /// use prob_space::ProbabilitySpace;
    ///
    /// let coin = ProbabilitySpace::uniform(["heads", "tails"]).unwrap();
    /// assert_eq!(coin.mass_of(&"heads"), Some(0.5));
    /// ```
    pub fn uniform<I>(outcomes: I) -> Result<Self>
    where
        I: IntoIterator<Item = O>,
    {
        let mut mass: BTreeMap<O, f64> = outcomes.into_iter().map(|o| (o, 0.0)).collect();
        let share = 1.0 / mass.len() as f64;
        for p in mass.values_mut() {
            *p = share;
        }
        Self::new(mass)
    }

    /// Probability of `event`.
    ///
    /// # Errors
    /// Returns [`SpaceError::UnknownOutcome`] in strict mode if `event` names an
    /// outcome outside the sample space.
    pub fn probability(&self, event: &Event<O>) -> Result<f64> {
        self.check_subset(event)?;
        self.aggregate(event)
    }

    /// Probability of the complement of `event` relative to the sample space.
    ///
    /// In permissive mode foreign outcomes never carried mass, so they do not
    /// affect the result.
    ///
    /// # Errors
    /// Same as [`ProbabilitySpace::probability`].
    pub fn complement(&self, event: &Event<O>) -> Result<f64> {
        Ok(1.0 - self.probability(event)?)
    }

    /// Probability of the union of `a` and `b`.
    ///
    /// # Errors
    /// Returns [`SpaceError::UnknownOutcome`] in strict mode if either event
    /// names an outcome outside the sample space.
    ///
    /// # Example
    /// ```rust
    /// use prob_space::{Event, ProbabilitySpace};
    ///
    /// let die = ProbabilitySpace::uniform(1..=6).unwrap();
    /// let p = die.union(&Event::from([1, 2, 3]), &Event::from([2, 3, 4])).unwrap();
    /// assert!((p - 4.0 / 6.0).abs() < 1e-9);
    /// ```
    pub fn union(&self, a: &Event<O>, b: &Event<O>) -> Result<f64> {
        self.check_subsets(a, b)?;
        self.aggregate(union_of(a, b))
    }

    /// Probability of the intersection of `a` and `b`.
    ///
    /// # Errors
    /// Same as [`ProbabilitySpace::union`].
    pub fn intersection(&self, a: &Event<O>, b: &Event<O>) -> Result<f64> {
        self.check_subsets(a, b)?;
        self.aggregate(intersection_of(a, b))
    }

    /// Conditional probability P(`a` | `b`) = P(`a` ∩ `b`) / P(`b`).
    ///
    /// The zero test on P(`b`) is exact: a tiny but nonzero denominator is used as is.
    ///
    /// # Errors
    /// Returns [`SpaceError::UnknownOutcome`] in strict mode if either event
    /// names an outcome outside the sample space, and
    /// [`SpaceError::ConditionOnZero`] if P(`b`) is exactly 0.
    ///
    /// # Example
    /// ```rust
    /// use prob_space::{Event, ProbabilitySpace, SpaceError};
    ///
    /// let die = ProbabilitySpace::uniform(1..=6).unwrap();
    /// let p = die.conditional(&Event::from([4, 5]), &Event::from([4, 5, 6])).unwrap();
    /// assert!((p - 2.0 / 3.0).abs() < 1e-9);
    ///
    /// let undefined = die.conditional(&Event::from([3]), &Event::new());
    /// assert_eq!(undefined, Err(SpaceError::ConditionOnZero));
    /// ```
    pub fn conditional(&self, a: &Event<O>, b: &Event<O>) -> Result<f64> {
        self.check_subsets(a, b)?;
        let given = self.aggregate(b)?;
        if given == 0.0 {
            return Err(SpaceError::ConditionOnZero);
        }
        let joint = self.aggregate(intersection_of(a, b))?;
        Ok(joint / given)
    }

    /// Whether foreign outcomes in events are ignored (`true`) or rejected (`false`).
    #[must_use]
    pub fn mode(&self) -> bool {
        self.ignore_unknown
    }

    /// Switches between permissive (`true`) and strict (`false`) handling of
    /// foreign outcomes. The mass function is left untouched.
    pub fn set_mode(&mut self, ignore_unknown: bool) {
        trace!(from = self.ignore_unknown, to = ignore_unknown, "unknown-outcome mode changed");
        self.ignore_unknown = ignore_unknown;
    }

    /// Mass assigned to `outcome`, or `None` if it is outside the sample space.
    #[must_use]
    pub fn mass_of(&self, outcome: &O) -> Option<f64> {
        self.mass.get(outcome).copied()
    }

    /// Whether `outcome` belongs to the sample space.
    #[must_use]
    pub fn contains(&self, outcome: &O) -> bool {
        self.mass.contains_key(outcome)
    }

    /// Number of outcomes in the sample space. Never zero for a constructed space.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mass.len()
    }

    /// Always `false`: an empty mass function cannot sum to 1.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mass.is_empty()
    }

    /// The sample space, in ascending order.
    pub fn sample_space(&self) -> impl Iterator<Item = &O> {
        self.mass.keys()
    }

    /// The validated mass function.
    #[must_use]
    pub fn mass_function(&self) -> &BTreeMap<O, f64> {
        &self.mass
    }

    fn check_subset(&self, event: &Event<O>) -> Result<()> {
        if self.ignore_unknown {
            return Ok(());
        }
        match self.count_unknown(event.iter()) {
            0 => Ok(()),
            unknown => Err(SpaceError::unknown_outcome(unknown)),
        }
    }

    fn check_subsets(&self, a: &Event<O>, b: &Event<O>) -> Result<()> {
        if self.ignore_unknown {
            return Ok(());
        }
        // Foreign outcomes shared by both events count once.
        match self.count_unknown(union_of(a, b)) {
            0 => Ok(()),
            unknown => Err(SpaceError::unknown_outcome(unknown)),
        }
    }

    fn count_unknown<'a, I>(&self, outcomes: I) -> usize
    where
        O: 'a,
        I: Iterator<Item = &'a O>,
    {
        outcomes.filter(|o| !self.mass.contains_key(*o)).count()
    }

    fn aggregate<'a, I>(&'a self, outcomes: I) -> Result<f64>
    where
        I: IntoIterator<Item = &'a O>,
    {
        mass::aggregate(&self.mass, outcomes, self.ignore_unknown)
    }
}

impl<O: Outcome> TryFrom<BTreeMap<O, f64>> for ProbabilitySpace<O> {
    type Error = SpaceError;

    fn try_from(mass: BTreeMap<O, f64>) -> Result<Self> {
        Self::new(mass)
    }
}

impl<O: fmt::Debug> fmt::Debug for ProbabilitySpace<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbabilitySpace")
            .field("mass", &self.mass)
            .field("ignore_unknown", &self.ignore_unknown)
            .finish()
    }
}
