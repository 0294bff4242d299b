//! # prob-space
//!
//! A small library for reasoning about finite discrete probability spaces.
//!
//! Build a [`ProbabilitySpace`] from a mass function mapping outcomes to
//! probabilities, then ask for probabilities of events (sets of outcomes), their
//! complements, unions, intersections, and conditional probabilities:
//!
//! ```rust
//! use prob_space::{Event, ProbabilitySpace, SpaceError};
//! use std::collections::BTreeMap;
//!
//! let mut coin = ProbabilitySpace::new(BTreeMap::from([("heads", 0.5), ("tails", 0.5)]))?;
//!
//! let heads = Event::from(["heads"]);
//! let tails = Event::from(["tails"]);
//! assert_eq!(coin.probability(&heads)?, 0.5);
//! assert_eq!(coin.union(&heads, &tails)?, 1.0);
//!
//! // Strict mode rejects outcomes outside the sample space...
//! let odd = Event::from(["heads", "moose"]);
//! assert!(matches!(coin.probability(&odd), Err(SpaceError::UnknownOutcome { .. })));
//!
//! // ...permissive mode gives them zero mass.
//! coin.set_mode(true);
//! assert_eq!(coin.complement(&odd)?, 0.5);
//! # Ok::<(), SpaceError>(())
//! ```
//!
//! ## Features
//!
//! - **Validated construction**: masses must be finite, nonnegative, and sum to 1 within [`EPSILON`]
//! - **Event algebra**: complement, union, intersection, conditional probability
//! - **Strict or permissive events**: foreign outcomes either fail the query or count as zero
//! - **Linear event merges**: events are ordered sets, so unions and intersections are single passes

pub mod config;
pub mod error;
pub mod event;
pub mod mass;
pub mod space;
pub mod traits;

pub use config::SpaceConfig;
pub use error::{DistributionError, Result, SpaceError};
pub use event::Event;
pub use mass::EPSILON;
pub use space::ProbabilitySpace;
pub use traits::Outcome;
