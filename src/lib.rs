//! Constrained random string generation.
//!
//! Strings are drawn from a pool built out of character classes, either
//! without repetition or with a guaranteed number of distinct characters.
//! All randomness comes from a caller-supplied `rand::Rng`.
//!
//! ```
//! use rand::SeedableRng;
//! use randchars::{CharClasses, Request, random_string};
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let req = Request::new(15)
//!     .classes(CharClasses::digits_only())
//!     .repeat_chars(true)
//!     .min_distinct_chars(9);
//! let s = random_string(&req, &mut rng).unwrap();
//! assert_eq!(s.len(), 15);
//! ```

pub mod chars;
pub mod error;
pub mod pick;
pub mod rng;
pub mod settings;

pub use chars::{
    CharClasses, Request, fill_with_random_strings, random_chars, random_string, shuffle,
    shuffle_times, shuffled,
};
pub use error::{Error, Result};
pub use pick::{pick, pick_different, pick_where};
pub use rng::Rand;
