//! Random element selection.

use rand::Rng;

use crate::error::{Error, Result};

/// A uniformly chosen element of `items`.
pub fn pick<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Result<&'a T> {
    if items.is_empty() {
        return Err(Error::argument("collection cannot be empty"));
    }
    Ok(&items[rng.random_range(0..items.len())])
}

/// A uniformly chosen element among those matching `predicate`.
pub fn pick_where<'a, T, P, R>(items: &'a [T], predicate: P, rng: &mut R) -> Option<&'a T>
where
    P: FnMut(&&'a T) -> bool,
    R: Rng + ?Sized,
{
    let matching: Vec<&T> = items.iter().filter(predicate).collect();
    if matching.is_empty() {
        return None;
    }
    Some(matching[rng.random_range(0..matching.len())])
}

/// Like [`pick_where`], but an empty match set is an error.
pub fn pick_different<'a, T, P, R>(items: &'a [T], predicate: P, rng: &mut R) -> Result<&'a T>
where
    P: FnMut(&&'a T) -> bool,
    R: Rng + ?Sized,
{
    pick_where(items, predicate, rng)
        .ok_or_else(|| Error::argument("collection contains no matching elements"))
}
