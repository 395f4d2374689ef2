//! Shared terminal utilities.
//!
//! Box drawing and entropy reporting.

mod output;

pub use output::*;
