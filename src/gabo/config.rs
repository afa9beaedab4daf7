//! GABO configuration.

/// Configuration for a GABO run.
///
/// # Examples
///
/// ```
/// use sgoal::gabo::GaboConfig;
///
/// let config = GaboConfig::default()
///     .with_max_evaluations(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaboConfig {
    /// Evaluation budget: maximum objective-function calls.
    pub max_evaluations: usize,

    /// Whether to record per-call fitness traces.
    pub trace: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GaboConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 1000,
            trace: false,
            seed: None,
        }
    }
}

impl GaboConfig {
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
