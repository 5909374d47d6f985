//! Linear and binary search over slices, plus the labeled expectation harness
//! that exercises them against a fixed sorted dataset.

pub mod error;
pub mod harness;
pub mod scenarios;
pub mod search;
pub mod utils;

pub use error::{HarnessError, Result};
pub use harness::{run_case, run_suite, ExpectationReport, Expectations, TestCase};
pub use scenarios::ArraySearchScenario;
pub use search::{binary_search, naive_search};
