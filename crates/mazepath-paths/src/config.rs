//! Search configuration.

use std::fmt;
use std::str::FromStr;

/// Which open-set structure the driver uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FrontierKind {
    /// Insertion-ordered list, scanned in full for the minimum. Fine for
    /// small mazes.
    #[default]
    LinearScan,
    /// Binary heap keyed by estimate and discovery order. Same results,
    /// logarithmic selection.
    BinaryHeap,
}

impl FrontierKind {
    /// Short name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::LinearScan => "linear",
            Self::BinaryHeap => "heap",
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FrontierKind {
    type Err = UnknownFrontier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "linear_scan" | "scan" => Ok(Self::LinearScan),
            "heap" | "binary_heap" => Ok(Self::BinaryHeap),
            _ => Err(UnknownFrontier(s.to_string())),
        }
    }
}

/// A frontier name that [`FrontierKind::from_str`] does not recognise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFrontier(pub String);

impl fmt::Display for UnknownFrontier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown frontier '{}' (expected 'linear' or 'heap')",
            self.0
        )
    }
}

impl std::error::Error for UnknownFrontier {}

/// Options for [`PathFinder`](crate::PathFinder).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Open-set structure. Default: linear scan.
    pub frontier: FrontierKind,
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the frontier kind.
    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_linear_scan() {
        assert_eq!(SearchConfig::new().frontier, FrontierKind::LinearScan);
        assert_eq!(
            SearchConfig::new()
                .with_frontier(FrontierKind::BinaryHeap)
                .frontier,
            FrontierKind::BinaryHeap
        );
    }

    #[test]
    fn frontier_names_parse_back() {
        for kind in [FrontierKind::LinearScan, FrontierKind::BinaryHeap] {
            assert_eq!(kind.to_string().parse::<FrontierKind>(), Ok(kind));
        }
        assert_eq!(" HEAP ".parse(), Ok(FrontierKind::BinaryHeap));
        assert_eq!(
            "fibonacci".parse::<FrontierKind>(),
            Err(UnknownFrontier("fibonacci".into()))
        );
    }

    #[test]
    fn unknown_frontier_message_is_plain_ascii() {
        let msg = UnknownFrontier("fib".into()).to_string();
        assert_eq!(msg, "unknown frontier 'fib' (expected 'linear' or 'heap')");
        assert!(msg.is_ascii());
    }
}
