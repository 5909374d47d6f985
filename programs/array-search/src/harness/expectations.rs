use crate::error::{HarnessError, Result};
use crate::utils::events::ExpectationOutcome;

/// Recorder handed to a test case while it runs.
///
/// Every `expect` call is logged immediately and kept in call order so the
/// final report lists outcomes exactly as the case produced them.
#[derive(Debug)]
pub struct Expectations {
    suite: String,
    outcomes: Vec<ExpectationOutcome>,
}

impl Expectations {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Records one labeled boolean check.
    pub fn expect(&mut self, label: &str, condition: bool) {
        let outcome = ExpectationOutcome::new(self.suite.as_str(), label, condition);
        outcome.emit();
        self.outcomes.push(outcome);
    }

    pub fn finish(self) -> ExpectationReport {
        ExpectationReport {
            suite: self.suite,
            outcomes: self.outcomes,
        }
    }
}

/// Outcomes of one finished test case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpectationReport {
    suite: String,
    outcomes: Vec<ExpectationOutcome>,
}

impl ExpectationReport {
    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn outcomes(&self) -> &[ExpectationOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// True when at least one expectation was recorded and none failed.
    pub fn is_success(&self) -> bool {
        self.total() > 0 && self.failed() == 0
    }

    pub fn failed_labels(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.label.clone())
            .collect()
    }

    /// Converts the report into the harness verdict. An empty report is an
    /// error rather than a vacuous pass.
    pub fn into_result(self) -> Result<Self> {
        if self.outcomes.is_empty() {
            return Err(HarnessError::NoExpectations { suite: self.suite });
        }

        let failed = self.failed();
        if failed > 0 {
            return Err(HarnessError::ExpectationsFailed {
                labels: self.failed_labels(),
                suite: self.suite,
                failed,
                total: self.outcomes.len(),
            });
        }

        Ok(self)
    }
}
