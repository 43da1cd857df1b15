use {
    crate::{is_prime, prime::SMALL_PRIMES, random_prime, Trials, Uint},
    rand::{rngs::StdRng, SeedableRng},
};

/// Assert that the test accepts every odd prime in the sieve list.
/// Miller-Rabin has no false negatives, so a true prime passes no matter
/// how the witnesses are drawn.
#[test]
fn accepts_small_primes() {
    let mut rng = StdRng::seed_from_u64(20);
    for p in SMALL_PRIMES {
        assert!(
            is_prime(Uint::from_u64(p), Trials::new(8), &mut rng),
            "{p} is prime",
        );
    }
}

/// Assert that the test accepts primes beyond the sieve list.
#[test]
fn accepts_larger_primes() {
    let mut rng = StdRng::seed_from_u64(21);
    for p in [547, 557, 569, 577, 587, 593, 599, 601, 607, 613, 7919, 65521, 104729] {
        assert!(
            is_prime(Uint::from_u64(p), Trials::new(16), &mut rng),
            "{p} is prime",
        );
    }
}

/// Assert that the test rejects composites, including products of two
/// primes too large for the sieve to catch.
#[test]
fn rejects_composites() {
    let mut rng = StdRng::seed_from_u64(22);
    for n in [9, 15, 21, 25, 27, 33, 35, 49, 91, 121, 169, 221, 323, 543, 549, 551] {
        assert!(
            !is_prime(Uint::from_u64(n), Trials::new(16), &mut rng),
            "{n} is composite",
        );
    }
    // 547 * 557 and 563 * 563: no factor within the sieve list.
    for n in [304679, 316969] {
        assert!(
            !is_prime(Uint::from_u64(n), Trials::new(16), &mut rng),
            "{n} is composite",
        );
    }
}

/// Assert that every even number is reported composite, including two: the
/// prime search only proposes odd candidates, and the test rules out all
/// evens up front.
#[test]
fn rejects_evens_and_trivial_values() {
    let mut rng = StdRng::seed_from_u64(23);
    for n in [0, 1, 2, 4, 6, 100, 65536] {
        assert!(!is_prime(Uint::from_u64(n), Trials::new(8), &mut rng));
    }
    assert!(is_prime(Uint::THREE, Trials::new(8), &mut rng));
    assert!(is_prime(Uint::from_u64(5), Trials::new(8), &mut rng));
    assert!(is_prime(Uint::from_u64(7), Trials::new(8), &mut rng));
}

/// Assert that the Carmichael numbers below 10^5 are rejected. These
/// composites pass the plain Fermat test for every coprime base, so they
/// specifically exercise the strong (squaring chain) part of Miller-Rabin.
#[test]
fn rejects_carmichael_numbers() {
    let mut rng = StdRng::seed_from_u64(24);
    let carmichael = [
        561, 1105, 1729, 2465, 2821, 6601, 8911, 10585, 15841, 29341, 41041, 46657, 52633, 62745,
        63973, 75361,
    ];
    for n in carmichael {
        assert!(
            !is_prime(Uint::from_u64(n), Trials::new(32), &mut rng),
            "{n} is composite",
        );
    }
}

/// Assert that a zero trial count is coerced to the small default.
#[test]
fn zero_trials_coerced() {
    assert_eq!(Trials::new(0), Trials::new(3));
    assert_ne!(Trials::default(), Trials::new(0));
}

/// Assert that the prime search returns an odd probable prime of exactly
/// the requested width.
#[test]
fn finds_sixteen_bit_primes() {
    for seed in [30, 31, 32] {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = random_prime(&mut rng, 16);
        assert!(p >= Uint::from_u64(1 << 15));
        assert!(p < Uint::from_u64(1 << 16));
        assert!(p.is_odd());
        assert!(is_prime(p, Trials::new(32), &mut rng));
    }
}

/// Assert that the search works in a range overlapping the sieve list
/// itself, where a candidate can be one of the sieve primes.
#[test]
fn finds_ten_bit_primes() {
    let mut rng = StdRng::seed_from_u64(33);
    let p = random_prime(&mut rng, 10);
    assert!(p >= Uint::from_u64(512));
    assert!(p < Uint::from_u64(1024));
    assert!(is_prime(p, Trials::new(32), &mut rng));
}

/// Assert that the search scales to a realistic width.
#[test]
fn finds_sixty_four_bit_primes() {
    let mut rng = StdRng::seed_from_u64(34);
    let p = random_prime(&mut rng, 64);
    assert!(p >= Uint::ONE << 63);
    assert!(p < Uint::ONE << 64);
    assert!(p.is_odd());
}
