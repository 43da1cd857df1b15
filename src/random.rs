//! Random number generation.
//!
//! Everything randomised in this crate is generic over [`rand::Rng`], so
//! the caller decides what backs it: tests inject a seeded
//! [`StdRng`](rand::rngs::StdRng) to stay deterministic, and callers with
//! stronger requirements can supply a cryptographically secure generator.
//! Nothing here strengthens the source it is given.

use {
    crate::{uint::DIGITS, DivideByZero, Uint},
    rand::Rng,
};

impl Uint {
    /// Generate a uniformly random digit string with a non-zero most
    /// significant digit.
    ///
    /// The most significant digit is drawn from the nine values 1 through
    /// 9, so the result always occupies the full width. The point of the
    /// bias is to keep [ranged draws](Self::random_range) from collapsing
    /// to trivially small values, not to approximate uniformity over the
    /// whole range.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::random_biased(rng, false)
    }

    pub(crate) fn random_biased<R: Rng + ?Sized>(rng: &mut R, odd: bool) -> Self {
        let mut n = Self::ZERO;
        rng.fill(&mut n.digits_mut()[..]);
        n.digits_mut()[DIGITS - 1] = rng.gen_range(1..=9);
        if odd {
            // Bias the least significant digit odd, for callers searching
            // for primes.
            n.digits_mut()[0] |= 1;
        }
        n
    }

    /// Generate a random number below `bound` by reducing a [raw random
    /// draw](Self::random) modulo the bound. Fails if the bound is zero.
    ///
    /// The result is not uniform: when the capacity is not a whole multiple
    /// of the bound, small values are slightly favored. The draws here feed
    /// a primality search, which tolerates that.
    pub fn random_range<R: Rng + ?Sized>(rng: &mut R, bound: Self) -> Result<Self, DivideByZero> {
        Self::random_range_biased(rng, bound, false)
    }

    pub(crate) fn random_range_biased<R: Rng + ?Sized>(
        rng: &mut R,
        bound: Self,
        odd: bool,
    ) -> Result<Self, DivideByZero> {
        let (_, r) = Self::random_biased(rng, odd).div_rem(bound)?;
        Ok(r)
    }
}
