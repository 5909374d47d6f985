pub mod binary;
pub mod naive;

pub use binary::*;
pub use naive::*;

#[cfg(test)]
pub mod search_tests;
