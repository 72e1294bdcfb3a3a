use serde::{Deserialize, Serialize};

/// What to do with dictionary words whose length differs from the start word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Fail fast with `LadderError::LengthMismatch`.
    #[default]
    Reject,
    /// Leave the word out of the graph.
    Skip,
}

/// Settings for a single solve call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub length_policy: LengthPolicy,
    /// Maximum number of transformations to explore (`None` = unbounded).
    pub max_depth: Option<usize>,
}

impl SolverConfig {
    /// Sets the length policy (builder pattern).
    #[must_use]
    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    /// Caps the search depth (builder pattern).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.length_policy, LengthPolicy::Reject);
        assert_eq!(config.max_depth, None);
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::default()
            .with_length_policy(LengthPolicy::Skip)
            .with_max_depth(3);
        assert_eq!(config.length_policy, LengthPolicy::Skip);
        assert_eq!(config.max_depth, Some(3));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SolverConfig = serde_json::from_str(r#"{"length_policy":"skip"}"#).unwrap();
        assert_eq!(config.length_policy, LengthPolicy::Skip);
        assert_eq!(config.max_depth, None); // missing fields fall back to defaults

        let config: SolverConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SolverConfig::default());
    }
}
