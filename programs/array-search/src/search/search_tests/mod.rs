//! Test harness for the slice search primitives.
//!
//! - `core_unit_tests`: deterministic coverage of hits, misses, and boundaries.
//! - `property_tests`: proptest fuzzing of agreement between the two searches.
//! - `helpers`: shared fixtures and strategies.
