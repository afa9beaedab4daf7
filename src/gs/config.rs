//! GS1 configuration.

/// Configuration for a Global Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GsConfig {
    /// Evaluation budget: maximum objective-function calls.
    pub max_evaluations: usize,

    /// Evaluations between schema-best reconstructions. `None`
    /// reconstructs only on the final permitted call.
    pub check_interval: Option<usize>,

    /// Whether to record fitness traces.
    pub trace: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GsConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 1000,
            check_interval: None,
            trace: false,
            seed: None,
        }
    }
}

impl GsConfig {
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    pub fn with_check_interval(mut self, n: usize) -> Self {
        self.check_interval = Some(n);
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
        if self.check_interval == Some(0) {
            return Err("check_interval must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(GsConfig::default().with_check_interval(0).validate().is_err());
    }
}
