use tracing::{info, warn};

/// Record of a single `expect` call, in the order it was made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpectationOutcome {
    pub suite: String,
    pub label: String,
    pub passed: bool,
}

impl ExpectationOutcome {
    pub fn new(suite: impl Into<String>, label: impl Into<String>, passed: bool) -> Self {
        Self {
            suite: suite.into(),
            label: label.into(),
            passed,
        }
    }

    /// Emits the outcome as a structured log event. Failures go out at `warn`
    /// so they stay visible under the default filter.
    pub fn emit(&self) {
        if self.passed {
            info!(suite = %self.suite, label = %self.label, passed = true, "expectation passed");
        } else {
            warn!(suite = %self.suite, label = %self.label, passed = false, "expectation failed");
        }
    }
}
