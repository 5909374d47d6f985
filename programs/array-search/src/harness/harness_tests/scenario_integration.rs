//! Runs the fixed-dataset array search scenario through the harness exactly as
//! a caller would, and checks the labels it reports.

use super::helpers::init_test_tracing;
use crate::harness::{run_case, run_suite, Expectations, TestCase};
use crate::scenarios::ArraySearchScenario;
use crate::utils::constants::ARRAY_SEARCH_SUITE;

const EXPECTED_LABELS: [&str; 5] = [
    "Naive search to find an existing value",
    "Binary search to find an existing value over the median",
    "Binary search to find an existing value under the median",
    "Naive search to return false for non-existing values",
    "Binary search to return false for non-existing values",
];

#[test]
fn array_search_scenario_passes() {
    init_test_tracing();
    let report = run_case(&ArraySearchScenario).expect("array search scenario passes");

    assert_eq!(report.suite(), ARRAY_SEARCH_SUITE);
    assert_eq!(report.total(), EXPECTED_LABELS.len());
    assert_eq!(report.failed(), 0);
}

#[test]
fn array_search_scenario_labels_in_order() {
    let mut expectations = Expectations::new(ArraySearchScenario.name());
    ArraySearchScenario.run(&mut expectations);
    let report = expectations.finish();

    let labels: Vec<&str> = report.outcomes().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, EXPECTED_LABELS);
    assert!(report.outcomes().iter().all(|o| o.passed));
}

#[test]
fn array_search_scenario_is_repeatable() {
    let scenario = ArraySearchScenario;
    let cases: [&dyn TestCase; 2] = [&scenario, &scenario];

    let reports = run_suite(&cases).expect("both runs pass");
    assert_eq!(reports[0], reports[1]);
}
