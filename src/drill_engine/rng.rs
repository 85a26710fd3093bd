//! Randomization and small number-theory primitives shared by every generator.

use rand::{Rng, RngCore};

/// Uniform integer in `[min, max]` (both inclusive). Requires `min <= max`.
pub fn random_int(rng: &mut dyn RngCore, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Uniform choice from `list`; panics on an empty slice.
pub fn pick_one<'a, T>(rng: &mut dyn RngCore, list: &'a [T]) -> &'a T {
    &list[rng.gen_range(0..list.len())]
}

/// True with probability `p`.
pub fn chance(rng: &mut dyn RngCore, p: f64) -> bool {
    rng.gen_bool(p)
}

/// A uniformly random permutation of `list`; the input is left untouched.
pub fn shuffle<T: Clone>(rng: &mut dyn RngCore, list: &[T]) -> Vec<T> {
    let mut out = list.to_vec();
    shuffle_in_place(rng, &mut out);
    out
}

pub fn shuffle_in_place<T>(rng: &mut dyn RngCore, items: &mut [T]) {
    // Fisher-Yates shuffle
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Euclid on absolute values; `gcd(0, n) == |n|`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Smallest prime dividing `|n|`, or `|n|` itself when `|n| <= 1` or prime.
pub fn smallest_prime_factor(n: i64) -> i64 {
    let n = n.abs();
    if n <= 1 {
        return n;
    }
    if n % 2 == 0 {
        return 2;
    }
    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return i;
        }
        i += 2;
    }
    n
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_int_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let v = random_int(&mut rng, -4, 4);
            assert!((-4..=4).contains(&v));
        }
        assert_eq!(random_int(&mut rng, 7, 7), 7);
    }

    #[test]
    fn shuffle_is_a_permutation_and_leaves_input_alone() {
        let mut rng = StdRng::seed_from_u64(11);
        let input: Vec<u32> = (0..20).collect();
        let out = shuffle(&mut rng, &input);
        assert_eq!(input, (0..20).collect::<Vec<_>>());
        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, input);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            shuffle(&mut rng, &[1, 2, 3, 4, 5, 6, 7, 8])
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn gcd_matches_euclid_recurrence() {
        for a in -30i64..=30 {
            for b in 1i64..=30 {
                assert_eq!(gcd(a, b), gcd(b, a % b), "a={a} b={b}");
            }
        }
        assert_eq!(gcd(0, -9), 9);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(12, 18), 6);
    }

    #[test]
    fn smallest_prime_factor_cases() {
        assert_eq!(smallest_prime_factor(1), 1);
        assert_eq!(smallest_prime_factor(0), 0);
        assert_eq!(smallest_prime_factor(-12), 2);
        assert_eq!(smallest_prime_factor(45), 3);
        assert_eq!(smallest_prime_factor(49), 7);
        assert_eq!(smallest_prime_factor(13), 13);
    }
}
