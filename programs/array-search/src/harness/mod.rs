pub mod expectations;
pub mod runner;

pub use expectations::*;
pub use runner::*;
