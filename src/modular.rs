//! Modular reduction and exponentiation.

use {
    crate::{
        uint::{BASE, DIGITS},
        DivideByZero, Uint,
    },
    docext::docext,
};

/// Number of precomputed multiples, 0 times the divisor through B times.
const MULTIPLES: usize = BASE + 1;

/// A divisor prepared for repeated modular reduction.
///
/// Reduction is long division that keeps only the remainder. Plain [long
/// division](Uint::div_rem) finds each quotient digit by adding the
/// divisor into a scratch value up to B times. A `Modulus` instead
/// precomputes the table of all B + 1 multiples of the divisor once, so
/// that each quotient digit becomes a binary search over the table,
/// logarithmically many comparisons instead of up to B additions. Building
/// the table costs B additions up front, which pays for itself whenever
/// the same divisor is reused, as in the inner loop of [modular
/// exponentiation](Self::pow).
///
/// The multiples wrap around modulo the capacity like all other
/// arithmetic, and the binary search breaks down with them, so the divisor
/// must leave the topmost digit clear.
pub struct Modulus {
    n: Uint,
    multiples: [Uint; MULTIPLES],
}

impl Modulus {
    /// Prepare a divisor for repeated reduction. Fails if the divisor is
    /// zero.
    pub fn new(n: Uint) -> Result<Self, DivideByZero> {
        if n.is_zero() {
            return Err(DivideByZero);
        }
        let mut multiples = [Uint::ZERO; MULTIPLES];
        let mut t = Uint::ZERO;
        for m in multiples.iter_mut() {
            *m = t;
            t = t + n;
        }
        Ok(Self { n, multiples })
    }

    /// Reduce a number modulo this divisor.
    pub fn reduce(&self, n: Uint) -> Uint {
        if n < self.n {
            return n;
        }
        let mut r = Uint::ZERO;
        for i in (0..DIGITS).rev() {
            r = r.shl_digits(1).add_digit(n.digits()[i]);
            if self.n <= r {
                // The multiples are sorted, so the largest one not
                // exceeding r can be found by binary search. It always
                // exists, since the zeroth multiple is zero.
                let k = self.multiples.partition_point(|m| *m <= r) - 1;
                r = r - self.multiples[k];
            }
        }
        r
    }

    /// Raise `base` to `exp` modulo this divisor, by right-to-left binary
    /// exponentiation.
    ///
    /// Scanning the exponent from its least significant bit, maintain a
    /// running square $base^{2^i}$ and multiply it into the result for
    /// every set bit:
    ///
    /// $$
    /// base^{exp} = \prod_{i \,:\, exp_i = 1} base^{2^i} \pmod n
    /// $$
    ///
    /// The exponent halves on every iteration, so the loop runs once per
    /// bit of the exponent, and every intermediate value stays reduced.
    #[docext]
    #[must_use]
    pub fn pow(&self, mut base: Uint, mut exp: Uint) -> Uint {
        let mut r = Uint::ONE;
        while !exp.is_zero() {
            if exp.is_odd() {
                r = self.reduce(base * r);
            }
            exp = exp >> 1;
            base = self.reduce(base * base);
        }
        r
    }
}

/// Raise `base` to `exp` modulo `n`. Fails if the modulus is zero.
///
/// This prepares a [`Modulus`] for the one exponentiation; callers with
/// several exponentiations under the same modulus should prepare it
/// themselves and use [`Modulus::pow`] directly.
pub fn pow_mod(base: Uint, exp: Uint, n: Uint) -> Result<Uint, DivideByZero> {
    Ok(Modulus::new(n)?.pow(base, exp))
}
