//! Domain types for flavor stacking analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A flavor name - the node identity in the stacking graph.
///
/// Flavors are opaque labels; two flavors are the same node exactly when
/// their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flavor(pub String);

impl Flavor {
    /// Create a new flavor from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The flavor name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Flavor {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for Flavor {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// A discovered two-flavor combination.
///
/// `second` is reachable from `first` along stacking rules, and both are
/// drawn from the source-flavor set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCombination {
    /// The flavor at the bottom of the stack.
    pub first: Flavor,
    /// The flavor stacked on top.
    pub second: Flavor,
}

impl fmt::Display for PairCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.first, self.second)
    }
}

/// A discovered three-flavor combination.
///
/// `second` is reachable from `first` and `third` from `second`; all three
/// flavors are distinct and drawn from the source-flavor set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripleCombination {
    /// The flavor at the bottom of the stack.
    pub first: Flavor,
    /// The middle flavor.
    pub second: Flavor,
    /// The flavor stacked on top.
    pub third: Flavor,
}

impl fmt::Display for TripleCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} -> {}", self.first, self.second, self.third)
    }
}

/// Summary statistics for a stacking graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuStats {
    /// Distinct flavors seen as either endpoint of a rule.
    pub flavors: usize,
    /// Stacking rules, duplicates included.
    pub rules: usize,
    /// Flavors with at least one outgoing rule.
    pub sources: usize,
}
