/// Scenario constants
pub const ARRAY_SEARCH_SUITE: &str = "array_search";

/// Fixed ascending dataset shared by every array search expectation.
pub const SORTED_SAMPLE: [i32; 12] = [1, 2, 7, 10, 32, 59, 77, 89, 102, 310, 1240, 11404];

/// Probe values, chosen relative to the dataset median (between 59 and 77).
pub const PRESENT_ABOVE_MEDIAN: i32 = 310;
pub const PRESENT_BELOW_MEDIAN: i32 = 7;
pub const ABSENT_FOR_NAIVE: i32 = 124;
pub const ABSENT_FOR_BINARY: i32 = 450;
