pub mod adder;
pub mod cli;
pub mod config;
pub mod core;
pub mod reporting;

pub use self::adder::{add, sum_all, wrapping_add};
pub use self::core::{AddError, AddOutcome, AddResult, Adder, Operand, OverflowPolicy};
