//! Property-based tests for the probability axioms and the unknown-outcome modes.
//!
//! Spaces have up to eight outcomes `0..n`; foreign outcomes are drawn from `100..200`
//! so they never collide with the sample space.

use proptest::prelude::*;
use std::collections::BTreeMap;

use prob_space::{DistributionError, EPSILON, Event, ProbabilitySpace, SpaceError};

const TOLERANCE: f64 = 1e-9;

fn mass_from_weights(weights: &[u32]) -> BTreeMap<u8, f64> {
    let total: u32 = weights.iter().sum();
    (0u8..)
        .zip(weights)
        .map(|(outcome, &w)| (outcome, f64::from(w) / f64::from(total)))
        .collect()
}

fn event_from_mask(mask: u8, n: usize) -> Event<u8> {
    (0..n as u8).filter(|i| mask & (1 << i) != 0).collect()
}

/// Weights for 1..=8 outcomes, at least one of them positive.
fn weights() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0u32..10, 1..=8).prop_filter("all weights zero", |w| {
        w.iter().any(|&x| x > 0)
    })
}

/// A space together with two events drawn from its sample space.
fn space_and_events() -> impl Strategy<Value = (ProbabilitySpace<u8>, Event<u8>, Event<u8>)> {
    weights().prop_flat_map(|w| {
        let n = w.len();
        (Just(w), any::<u8>(), any::<u8>()).prop_map(move |(w, a, b)| {
            let space = ProbabilitySpace::new(mass_from_weights(&w)).unwrap();
            (space, event_from_mask(a, n), event_from_mask(b, n))
        })
    })
}

fn foreign_outcomes() -> impl Strategy<Value = Event<u8>> {
    prop::collection::btree_set(100u8..200, 1..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn empty_and_full_events((space, _, _) in space_and_events()) {
        let all: Event<u8> = space.sample_space().copied().collect();
        prop_assert_eq!(space.probability(&Event::new()).unwrap(), 0.0);
        prop_assert!((space.probability(&all).unwrap() - 1.0).abs() <= TOLERANCE);
    }

    #[test]
    fn probability_is_bounded((space, a, _) in space_and_events()) {
        let p = space.probability(&a).unwrap();
        prop_assert!(p >= 0.0);
        prop_assert!(p <= 1.0 + TOLERANCE);
    }

    #[test]
    fn complement_sums_to_one((space, a, _) in space_and_events()) {
        let p = space.probability(&a).unwrap();
        let q = space.complement(&a).unwrap();
        prop_assert!((p + q - 1.0).abs() <= TOLERANCE);
    }

    #[test]
    fn inclusion_exclusion((space, a, b) in space_and_events()) {
        let union = space.union(&a, &b).unwrap();
        let intersection = space.intersection(&a, &b).unwrap();
        let p_a = space.probability(&a).unwrap();
        let p_b = space.probability(&b).unwrap();
        prop_assert!((union - (p_a + p_b - intersection)).abs() <= TOLERANCE);
    }

    #[test]
    fn conditional_properties((space, a, b) in space_and_events()) {
        let p_b = space.probability(&b).unwrap();
        prop_assume!(p_b > 0.0);

        let all: Event<u8> = space.sample_space().copied().collect();
        let given = space.conditional(&a, &b).unwrap();
        prop_assert!(given >= -TOLERANCE);
        prop_assert!(given <= 1.0 + TOLERANCE);
        prop_assert!((space.conditional(&all, &b).unwrap() - 1.0).abs() <= TOLERANCE);

        let joint = space.intersection(&a, &b).unwrap();
        prop_assert!((given * p_b - joint).abs() <= TOLERANCE);
    }

    #[test]
    fn conditional_on_zero_fails((space, a, b) in space_and_events()) {
        // Only zero-mass outcomes survive, possibly none at all.
        let null: Event<u8> = b
            .into_iter()
            .filter(|o| space.mass_of(o) == Some(0.0))
            .collect();
        prop_assert_eq!(space.conditional(&a, &null), Err(SpaceError::ConditionOnZero));
    }

    #[test]
    fn monotonicity((space, a, b) in space_and_events()) {
        let superset: Event<u8> = a.union(&b).copied().collect();
        let p_a = space.probability(&a).unwrap();
        let p_super = space.probability(&superset).unwrap();
        prop_assert!(p_a <= p_super + TOLERANCE);
    }

    #[test]
    fn mode_does_not_change_known_events((space, a, b) in space_and_events()) {
        let mut permissive = space.clone();
        permissive.set_mode(true);

        prop_assert_eq!(space.probability(&a), permissive.probability(&a));
        prop_assert_eq!(space.complement(&a), permissive.complement(&a));
        prop_assert_eq!(space.union(&a, &b), permissive.union(&a, &b));
        prop_assert_eq!(space.intersection(&a, &b), permissive.intersection(&a, &b));
        prop_assert_eq!(space.conditional(&a, &b), permissive.conditional(&a, &b));
    }

    #[test]
    fn permissive_ignores_foreign_outcomes(
        (space, a, _) in space_and_events(),
        foreign in foreign_outcomes(),
    ) {
        let mut space = space;
        let padded: Event<u8> = a.union(&foreign).copied().collect();

        prop_assert!(
            matches!(space.probability(&padded), Err(SpaceError::UnknownOutcome { .. })),
            "strict mode must reject foreign outcomes"
        );

        space.set_mode(true);
        let p = space.probability(&a).unwrap();
        let p_padded = space.probability(&padded).unwrap();
        prop_assert!((p - p_padded).abs() <= TOLERANCE);
        prop_assert!((space.complement(&padded).unwrap() - (1.0 - p)).abs() <= TOLERANCE);
    }

    #[test]
    fn negative_mass_is_rejected(w in weights(), index in any::<prop::sample::Index>()) {
        let mut mass = mass_from_weights(&w);
        let victim = index.index(mass.len()) as u8;
        mass.insert(victim, -0.25);
        let rejected = matches!(
            ProbabilitySpace::new(mass),
            Err(SpaceError::InvalidDistribution(DistributionError::NegativeMass { .. }))
        );
        prop_assert!(rejected);
    }

    #[test]
    fn unnormalized_mass_is_rejected(w in weights(), scale in 1.001f64..10.0) {
        let mass: BTreeMap<u8, f64> = mass_from_weights(&w)
            .into_iter()
            .map(|(o, p)| (o, p * scale))
            .collect();
        let rejected = matches!(
            ProbabilitySpace::new(mass),
            Err(SpaceError::InvalidDistribution(DistributionError::NotNormalized { .. }))
        );
        prop_assert!(rejected);
    }

    #[test]
    fn near_normalized_mass_is_accepted(w in weights(), drift in -0.5f64..0.5) {
        let mut mass = mass_from_weights(&w);
        // Keep the drift well inside the tolerance and on a positive entry.
        if let Some(p) = mass.values_mut().find(|p| **p > 0.0) {
            *p += drift * EPSILON;
        }
        prop_assert!(ProbabilitySpace::new(mass).is_ok());
    }
}
