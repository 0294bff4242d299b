//! Construction-time configuration for [`ProbabilitySpace`](crate::ProbabilitySpace).

/// Settings applied when a space is built.
///
/// # Example
/// ```rust
/// use prob_space::{ProbabilitySpace, SpaceConfig};
/// use std::collections::BTreeMap;
///
/// let mass = BTreeMap::from([("heads", 0.5), ("tails", 0.5)]);
/// let coin = ProbabilitySpace::with_config(mass, SpaceConfig::permissive()).unwrap();
/// assert!(coin.mode());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpaceConfig {
    /// Initial unknown-handling mode. `false` rejects events naming foreign outcomes,
    /// `true` ignores them.
    pub ignore_unknown: bool,
}

impl SpaceConfig {
    /// Reject foreign outcomes in event arguments (the default).
    #[must_use]
    pub fn strict() -> Self {
        Self {
            ignore_unknown: false,
        }
    }

    /// Silently skip foreign outcomes in event arguments.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            ignore_unknown: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(SpaceConfig::default(), SpaceConfig::strict());
        assert!(!SpaceConfig::default().ignore_unknown);
    }

    #[test]
    fn test_permissive() {
        assert!(SpaceConfig::permissive().ignore_unknown);
    }
}
