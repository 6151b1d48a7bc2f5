// Core algorithm exports
pub mod filter;
pub mod threshold;

pub use filter::{above_threshold, students_above};
pub use threshold::{validate_threshold, FilterError};
