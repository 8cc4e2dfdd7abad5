//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`PathSolver`](super::PathSolver).
///
/// Defaults reproduce the plain algorithm: the graph is built once per
/// solver and the search runs to completion.
///
/// # Example
/// ```
/// use u_staffing::solver::SolverConfig;
///
/// let config: SolverConfig = serde_json::from_str(r#"{"max_settled_states": 500}"#).unwrap();
/// assert!(config.cache_graph);
/// assert_eq!(config.max_settled_states, Some(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Build the state graph once per solver instead of on every call.
    pub cache_graph: bool,
    /// Upper bound on states settled by the shortest-path search.
    /// `None` = unlimited.
    pub max_settled_states: Option<usize>,
}

impl SolverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables graph caching.
    pub fn with_cache_graph(mut self, cache_graph: bool) -> Self {
        self.cache_graph = cache_graph;
        self
    }

    /// Limits the number of settled states.
    pub fn with_max_settled_states(mut self, limit: usize) -> Self {
        self.max_settled_states = Some(limit);
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cache_graph: true,
            max_settled_states: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::new();
        assert!(config.cache_graph);
        assert_eq!(config.max_settled_states, None);
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::new()
            .with_cache_graph(false)
            .with_max_settled_states(10);
        assert!(!config.cache_graph);
        assert_eq!(config.max_settled_states, Some(10));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SolverConfig::new().with_max_settled_states(42);
        let json = serde_json::to_string(&config).unwrap();
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let empty: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SolverConfig::default());
    }
}
