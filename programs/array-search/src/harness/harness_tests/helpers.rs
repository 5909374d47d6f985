use crate::harness::{Expectations, TestCase};

/// Installs a fmt subscriber that writes through the test harness capture.
/// Safe to call from every test; only the first call wins.
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Test case that records a fixed list of labeled booleans.
pub(crate) struct FixedCase {
    pub name: &'static str,
    pub checks: Vec<(&'static str, bool)>,
}

impl FixedCase {
    pub(crate) fn new(name: &'static str, checks: &[(&'static str, bool)]) -> Self {
        Self {
            name,
            checks: checks.to_vec(),
        }
    }
}

impl TestCase for FixedCase {
    fn name(&self) -> &str {
        self.name
    }

    fn run(&self, expectations: &mut Expectations) {
        for (label, condition) in &self.checks {
            expectations.expect(label, *condition);
        }
    }
}
