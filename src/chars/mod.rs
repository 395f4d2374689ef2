//! Random character generation.

mod fill;
mod generate;
pub mod pool;
pub mod shuffle;

pub use fill::fill_with_random_strings;
pub use generate::{Request, random_chars, random_string};
pub use pool::CharClasses;
pub use shuffle::{shuffle, shuffle_times, shuffled};
