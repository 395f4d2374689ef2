//! In-place shuffling.
//!
//! Each pass walks the slice front to back and swaps position `i` with a
//! uniformly chosen position in `i + 1..len`.

use rand::Rng;

use crate::error::{Error, Result};

/// One shuffle pass over `items`.
#[inline]
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let j = rng.random_range(i + 1..len);
        items.swap(i, j);
    }
}

/// Apply `times` full shuffle passes over `items`.
pub fn shuffle_times<T, R: Rng + ?Sized>(items: &mut [T], times: usize, rng: &mut R) -> Result<()> {
    if times < 1 {
        return Err(Error::argument("number of shuffle passes must be at least 1"));
    }
    for _ in 0..times {
        shuffle(items, rng);
    }
    Ok(())
}

/// Owned variant of [`shuffle_times`].
pub fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, times: usize, rng: &mut R) -> Result<Vec<T>> {
    shuffle_times(&mut items, times, rng)?;
    Ok(items)
}
