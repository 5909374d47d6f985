use thiserror::Error;

/// Result type alias using the harness error type.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Failures surfaced by the expectation harness.
///
/// The search functions themselves never fail; "not found" is a normal
/// result. These variants only describe test cases whose expectations did
/// not hold.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    #[error("{suite}: {failed} of {total} expectations failed: {}", .labels.join("; "))]
    ExpectationsFailed {
        suite: String,
        failed: usize,
        total: usize,
        labels: Vec<String>,
    },

    #[error("{suite}: test case recorded no expectations")]
    NoExpectations { suite: String },
}
