//! HC configuration.

/// Configuration for a Hill Climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HcConfig {
    /// Evaluation budget: maximum objective-function calls.
    pub max_evaluations: usize,

    /// Whether to record per-call fitness traces.
    pub trace: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HcConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 1000,
            trace: false,
            seed: None,
        }
    }
}

impl HcConfig {
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_evaluations == 0 {
            return Err("max_evaluations must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(HcConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(HcConfig::default().with_max_evaluations(0).validate().is_err());
    }
}
