//! Random string generation.

use rand::Rng;

use super::pool::{self, CharClasses};
use super::shuffle::shuffle;
use crate::error::{Error, Result};

/// A single generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub length: usize,
    pub classes: CharClasses,
    pub repeat_chars: bool,
    /// Only consulted when `repeat_chars` is set.
    pub min_distinct_chars: usize,
}

impl Request {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            classes: CharClasses::default(),
            repeat_chars: false,
            min_distinct_chars: 1,
        }
    }

    /// Defaults for bulk fill: repeats allowed, so the length may exceed
    /// the pool.
    pub fn for_fill(length: usize) -> Self {
        Self::new(length).repeat_chars(true)
    }

    pub fn classes(mut self, classes: CharClasses) -> Self {
        self.classes = classes;
        self
    }

    pub fn repeat_chars(mut self, repeat: bool) -> Self {
        self.repeat_chars = repeat;
        self
    }

    pub fn min_distinct_chars(mut self, min: usize) -> Self {
        self.min_distinct_chars = min;
        self
    }

    /// Build the pool and check the request against it.
    pub fn validated_pool(&self) -> Result<Vec<char>> {
        let pool = pool::build(&self.classes)?;

        if self.length == 0 {
            return Err(Error::config("length must be at least 1"));
        }

        if !self.repeat_chars && self.length > pool.len() {
            return Err(Error::config(format!(
                "cannot draw {} characters without repetition from a pool of {}",
                self.length,
                pool.len()
            )));
        }

        if self.repeat_chars {
            if self.min_distinct_chars == 0 {
                return Err(Error::config("minimum distinct characters must be at least 1"));
            }
            if self.min_distinct_chars > pool.len() {
                return Err(Error::config(format!(
                    "cannot guarantee {} distinct characters from a pool of {}",
                    self.min_distinct_chars,
                    pool.len()
                )));
            }
            if self.min_distinct_chars > self.length {
                return Err(Error::config(format!(
                    "minimum distinct characters ({}) exceeds length ({})",
                    self.min_distinct_chars, self.length
                )));
            }
        }

        Ok(pool)
    }
}

/// Generate `request.length` characters.
pub fn random_chars<R: Rng + ?Sized>(request: &Request, rng: &mut R) -> Result<Vec<char>> {
    let mut chars = request.validated_pool()?;
    log::trace!(
        "pool of {} chars, length {}, repeat {}",
        chars.len(),
        request.length,
        request.repeat_chars
    );

    shuffle(&mut chars, rng);

    if !request.repeat_chars {
        chars.truncate(request.length);
        return Ok(chars);
    }

    let mut out = Vec::with_capacity(request.length);
    out.extend_from_slice(&chars[..request.min_distinct_chars]);
    out.extend((request.min_distinct_chars..request.length).map(|_| random_char(&chars, rng)));
    shuffle(&mut out, rng);
    Ok(out)
}

/// Generate a random string.
pub fn random_string<R: Rng + ?Sized>(request: &Request, rng: &mut R) -> Result<String> {
    random_chars(request, rng).map(|chars| chars.into_iter().collect())
}

#[inline]
fn random_char<R: Rng + ?Sized>(chars: &[char], rng: &mut R) -> char {
    chars[rng.random_range(0..chars.len())]
}
