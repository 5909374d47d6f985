use crate::error::Result;
use crate::harness::expectations::{ExpectationReport, Expectations};
use tracing::{debug, info, warn};

/// A named group of labeled expectations.
pub trait TestCase {
    fn name(&self) -> &str;

    fn run(&self, expectations: &mut Expectations);
}

/// Runs one test case and returns its report, or the failure describing which
/// labels did not hold.
pub fn run_case(case: &dyn TestCase) -> Result<ExpectationReport> {
    debug!(suite = case.name(), "running test case");

    let mut expectations = Expectations::new(case.name());
    case.run(&mut expectations);
    let report = expectations.finish();

    if report.is_success() {
        info!(
            suite = report.suite(),
            passed = report.passed(),
            total = report.total(),
            "test case passed"
        );
    } else {
        warn!(
            suite = report.suite(),
            failed = report.failed(),
            total = report.total(),
            "test case failed"
        );
    }

    report.into_result()
}

/// Runs every case in order. A failing case does not stop the ones after it;
/// the first failure is returned once all cases have run.
pub fn run_suite(cases: &[&dyn TestCase]) -> Result<Vec<ExpectationReport>> {
    let mut reports = Vec::with_capacity(cases.len());
    let mut first_error = None;

    for case in cases {
        match run_case(*case) {
            Ok(report) => reports.push(report),
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(reports),
    }
}
