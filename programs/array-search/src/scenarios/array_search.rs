use crate::harness::{Expectations, TestCase};
use crate::search::{binary_search, naive_search};
use crate::utils::constants::{
    ABSENT_FOR_BINARY, ABSENT_FOR_NAIVE, ARRAY_SEARCH_SUITE, PRESENT_ABOVE_MEDIAN,
    PRESENT_BELOW_MEDIAN, SORTED_SAMPLE,
};

/// Checks both search algorithms against the fixed sorted sample: hits on
/// either side of the median and misses for values between elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArraySearchScenario;

impl TestCase for ArraySearchScenario {
    fn name(&self) -> &str {
        ARRAY_SEARCH_SUITE
    }

    fn run(&self, expectations: &mut Expectations) {
        let arr = SORTED_SAMPLE;

        expectations.expect(
            "Naive search to find an existing value",
            naive_search(&arr, &PRESENT_ABOVE_MEDIAN),
        );
        expectations.expect(
            "Binary search to find an existing value over the median",
            binary_search(&arr, &PRESENT_ABOVE_MEDIAN),
        );
        expectations.expect(
            "Binary search to find an existing value under the median",
            binary_search(&arr, &PRESENT_BELOW_MEDIAN),
        );
        expectations.expect(
            "Naive search to return false for non-existing values",
            !naive_search(&arr, &ABSENT_FOR_NAIVE),
        );
        expectations.expect(
            "Binary search to return false for non-existing values",
            !binary_search(&arr, &ABSENT_FOR_BINARY),
        );
    }
}
