//! Bulk assignment of random strings.
//!
//! One character sequence is generated up front. Each target receives the
//! sequence as it currently stands, then the sequence is reshuffled, so every
//! target gets a different permutation of the same characters.

use rand::Rng;
use zeroize::Zeroize;

use super::generate::{Request, random_chars};
use super::shuffle::shuffle;
use crate::error::{Error, Result};

/// Hand each target a permutation of one generated sequence.
pub fn fill_with_random_strings<T, F, R>(
    targets: &mut [T],
    mut assign: F,
    request: &Request,
    rng: &mut R,
) -> Result<()>
where
    F: FnMut(&mut T, String),
    R: Rng + ?Sized,
{
    if targets.is_empty() {
        return Err(Error::argument("targets cannot be empty"));
    }

    let mut chars = random_chars(request, rng)?;
    log::debug!("filling {} targets from one {}-char sequence", targets.len(), chars.len());

    for target in targets.iter_mut() {
        assign(target, chars.iter().collect());
        shuffle(&mut chars, rng);
    }

    chars.zeroize();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::pool::CharClasses;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Debug, Default)]
    struct Account {
        token: String,
    }

    fn sorted(s: &str) -> Vec<char> {
        let mut v: Vec<char> = s.chars().collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn empty_targets_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut targets: Vec<Account> = vec![];
        let err = fill_with_random_strings(
            &mut targets,
            |a, s| a.token = s,
            &Request::new(8),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn invalid_request_rejected_before_assignment() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut targets = vec![Account::default(), Account::default()];
        let req = Request::new(8).classes(CharClasses::none());
        let err =
            fill_with_random_strings(&mut targets, |a, s| a.token = s, &req, &mut rng).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert!(targets.iter().all(|a| a.token.is_empty()));
    }

    #[test]
    fn targets_share_one_multiset() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut targets: Vec<Account> = (0..50).map(|_| Account::default()).collect();
        let req = Request::new(12).repeat_chars(true).min_distinct_chars(6);
        fill_with_random_strings(&mut targets, |a, s| a.token = s, &req, &mut rng).unwrap();

        let first = sorted(&targets[0].token);
        assert_eq!(first.len(), 12);
        assert!(targets.iter().all(|a| sorted(&a.token) == first));
    }

    #[test]
    fn fill_request_accepts_length_beyond_pool() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut targets: Vec<String> = vec![String::new(); 3];
        let req = Request::for_fill(70);
        assert!(req.repeat_chars);
        fill_with_random_strings(&mut targets, |t, s| *t = s, &req, &mut rng).unwrap();
        assert!(targets.iter().all(|t| t.chars().count() == 70));
    }

    #[test]
    fn consecutive_targets_differ() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut targets: Vec<String> = vec![String::new(); 20];
        let req = Request::new(16);
        fill_with_random_strings(&mut targets, |t, s| *t = s, &req, &mut rng).unwrap();
        // Every reshuffle moves every character, so neighbours never match.
        assert!(targets.windows(2).all(|w| w[0] != w[1]));
    }
}
