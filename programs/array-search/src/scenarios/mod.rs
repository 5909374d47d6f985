pub mod array_search;

pub use array_search::*;
