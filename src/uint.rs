//! Fixed-width multiple-precision unsigned arithmetic.

use {
    docext::docext,
    std::{cmp, fmt, ops},
};

/// A fixed-width unsigned integer, stored as little-endian digits in base
/// 256, i.e. least significant byte first.
///
/// All arithmetic wraps around modulo the capacity: results too large to
/// represent silently lose their most significant digits, and subtracting
/// a larger number from a smaller one yields the base-256 two's
/// complement. This is a contract, not an accident. Callers working
/// anywhere near the capacity are expected to size their operands
/// accordingly.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Uint([Digit; DIGITS]);

pub(crate) const DIGITS: usize = 256;
const ZERO: [Digit; DIGITS] = [0; DIGITS];

/// Numeric value of the digit base.
pub(crate) const BASE: usize = 1 << Digit::BITS;

pub(crate) type Digit = u8;
type DoubleDigit = u16;

impl Uint {
    pub const BITS: usize = DIGITS * Digit::BITS as usize;
    pub const BYTES: usize = Self::BITS / 8;

    pub const ZERO: Self = Self(ZERO);
    pub const ONE: Self = Self::from_u64_const(1);
    pub const TWO: Self = Self::from_u64_const(2);
    pub const THREE: Self = Self::from_u64_const(3);

    /// The digits are exactly the little-endian byte encoding, so this is a
    /// plain rewrap.
    pub const fn from_le_bytes(b: [u8; Self::BYTES]) -> Self {
        Self(b)
    }

    pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
        self.0
    }

    /// Decompose a host-width value into base-256 digits, least significant
    /// first.
    pub fn from_u64(v: u64) -> Self {
        Self::from_u64_const(v)
    }

    const fn from_u64_const(mut v: u64) -> Self {
        let mut n = ZERO;
        let mut i = 0;
        while v > 0 {
            n[i] = (v % BASE as u64) as Digit;
            v /= BASE as u64;
            i += 1;
        }
        Self(n)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == ZERO
    }

    pub fn is_even(&self) -> bool {
        self.0[0] & 1 == 0
    }

    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    pub(crate) fn digits(&self) -> &[Digit; DIGITS] {
        &self.0
    }

    pub(crate) fn digits_mut(&mut self) -> &mut [Digit; DIGITS] {
        &mut self.0
    }

    /// Add a single digit, propagating the carry only as far as it reaches.
    #[must_use]
    pub fn add_digit(mut self, n: Digit) -> Self {
        let mut carry = DoubleDigit::from(n);
        for d in self.0.iter_mut() {
            if carry == 0 {
                break;
            }
            let x = DoubleDigit::from(*d) + carry;
            *d = x as Digit;
            carry = x >> Digit::BITS;
        }
        self
    }

    /// Subtract a single digit, propagating the borrow only as far as it
    /// reaches. Wraps around like full-width subtraction.
    #[must_use]
    pub fn sub_digit(mut self, n: Digit) -> Self {
        let mut borrow = DoubleDigit::from(n);
        for d in self.0.iter_mut() {
            if borrow == 0 {
                break;
            }
            let x = BASE as DoubleDigit + DoubleDigit::from(*d) - borrow;
            *d = x as Digit;
            borrow = 1 - (x >> Digit::BITS);
        }
        self
    }

    /// Multiply by a single digit, with a two-digit running product holding
    /// the partial result and its carry.
    #[must_use]
    pub fn mul_digit(mut self, n: Digit) -> Self {
        let mut carry: DoubleDigit = 0;
        for d in self.0.iter_mut() {
            let x = DoubleDigit::from(*d) * DoubleDigit::from(n) + carry;
            *d = x as Digit;
            carry = x >> Digit::BITS;
        }
        self
    }

    /// Shift left by whole digits, i.e. multiply by $B^{sh}$ modulo $B^N$.
    /// Shifting by $N$ digits or more yields zero.
    #[docext]
    #[must_use]
    pub fn shl_digits(mut self, sh: usize) -> Self {
        if sh == 0 {
            return self;
        }
        if sh >= DIGITS {
            return Self::ZERO;
        }
        // copy_within moves the high digits first, so the source is never
        // overwritten before it is read.
        self.0.copy_within(..DIGITS - sh, sh);
        self.0[..sh].fill(0);
        self
    }

    /// Shift right by whole digits, i.e. divide by $B^{sh}$, discarding the
    /// remainder. Shifting by $N$ digits or more yields zero.
    #[docext]
    #[must_use]
    pub fn shr_digits(mut self, sh: usize) -> Self {
        if sh == 0 {
            return self;
        }
        if sh >= DIGITS {
            return Self::ZERO;
        }
        self.0.copy_within(sh.., 0);
        self.0[DIGITS - sh..].fill(0);
        self
    }

    /// Divide by another number, returning the quotient and the remainder.
    /// Fails if the divisor is zero.
    ///
    /// This is long division, the same as done on paper, except that the
    /// digits range from 0 to 255 instead of 0 to 9. Keep a running
    /// remainder $r$. For each digit of the dividend, most significant
    /// first, append the digit to $r$, count how many times the divisor can
    /// be subtracted from $r$, perform the subtractions, and append the
    /// count to the quotient as a single digit.
    ///
    /// The count is found by adding the divisor into a scratch value until
    /// it exceeds $r$, up to $B$ times per digit. [Modular
    /// reduction](crate::Modulus) replaces this linear probe with a binary
    /// search over precomputed multiples of the divisor; plain division
    /// computes each multiple only once, so there is nothing to amortize
    /// and the simple probe is used.
    #[docext]
    pub fn div_rem(self, d: Self) -> Result<(Self, Self), DivideByZero> {
        if d.is_zero() {
            return Err(DivideByZero);
        }
        let mut q = Self::ZERO;
        let mut r = Self::ZERO;
        for i in (0..DIGITS).rev() {
            r = r.shl_digits(1).add_digit(self.0[i]);
            if d <= r {
                // Find the largest k with k*d <= r. The remainder stays
                // below d*B, so k fits in a digit as long as d leaves the
                // topmost digit clear.
                let mut t = d;
                let mut k: usize = 1;
                while t <= r {
                    t = t + d;
                    k += 1;
                }
                q.0[i] = (k - 1) as Digit;
                r = r - (t - d);
            }
        }
        Ok((q, r))
    }

    /// Divide by a host-width value, returning the quotient and the
    /// remainder. Fails if the divisor is zero.
    pub fn div_rem_u64(self, n: u64) -> Result<(Self, u64), DivideByZero> {
        if n == 0 {
            return Err(DivideByZero);
        }
        let mut q = Self::ZERO;
        let mut r: u128 = 0;
        for i in (0..DIGITS).rev() {
            let x = (r << Digit::BITS) + u128::from(self.0[i]);
            q.0[i] = (x / u128::from(n)) as Digit;
            r = x % u128::from(n);
        }
        Ok((q, r as u64))
    }

    /// Reduce modulo a host-width value using Horner's method, one digit at
    /// a time: $r \gets (rB + d_i) \bmod n$, most significant digit first.
    /// Fails if the divisor is zero.
    #[docext]
    pub fn rem_u64(self, n: u64) -> Result<u64, DivideByZero> {
        if n == 0 {
            return Err(DivideByZero);
        }
        let mut r: u128 = 0;
        for d in self.0.into_iter().rev() {
            // The intermediate value is at most (n - 1)*B + 255, which is
            // why the accumulator is wider than the divisor.
            r = ((r << Digit::BITS) + u128::from(d)) % u128::from(n);
        }
        Ok(r as u64)
    }
}

impl ops::Add for Uint {
    type Output = Self;

    /// Wrapping addition. Same as addition on paper, with a single-digit
    /// carry held in a wider integer; the final carry out of the most
    /// significant digit is discarded.
    fn add(mut self, n: Self) -> Self {
        let mut carry: DoubleDigit = 0;
        for (a, b) in self.0.iter_mut().zip(n.0) {
            let x = DoubleDigit::from(*a) + DoubleDigit::from(b) + carry;
            *a = x as Digit;
            carry = x >> Digit::BITS;
        }
        self
    }
}

impl ops::Sub for Uint {
    type Output = Self;

    /// Wrapping subtraction. Each step computes B + a - b - borrow for one
    /// digit pair in a wider integer; the high bit of the result tells
    /// whether the next digit must be borrowed from. Subtracting a larger
    /// number from a smaller one wraps around modulo the capacity.
    fn sub(mut self, n: Self) -> Self {
        let mut borrow: DoubleDigit = 0;
        for (a, b) in self.0.iter_mut().zip(n.0) {
            let x = BASE as DoubleDigit + DoubleDigit::from(*a) - DoubleDigit::from(b) - borrow;
            *a = x as Digit;
            borrow = 1 - (x >> Digit::BITS);
        }
        self
    }
}

impl ops::Mul for Uint {
    type Output = Self;

    /// Wrapping schoolbook multiplication: scale the multiplicand by each
    /// digit in turn, shift it into place, and accumulate. Quadratic in the
    /// number of digits.
    fn mul(self, n: Self) -> Self {
        let mut p = Self::ZERO;
        for (i, d) in self.0.into_iter().enumerate() {
            if d == 0 {
                continue;
            }
            p = p + n.mul_digit(d).shl_digits(i);
        }
        p
    }
}

impl ops::Shl<usize> for Uint {
    type Output = Self;

    /// Shift left by a number of bits. Bits shifted past the most
    /// significant digit are discarded; shifting by the full width or more
    /// yields zero.
    fn shl(mut self, sh: usize) -> Self {
        self = self.shl_digits(sh / Digit::BITS as usize);
        let sh = sh % Digit::BITS as usize;
        if sh == 0 {
            return self;
        }
        let mut carry: Digit = 0;
        for d in self.0.iter_mut() {
            let x = DoubleDigit::from(*d) << sh;
            *d = x as Digit | carry;
            carry = (x >> Digit::BITS) as Digit;
        }
        self
    }
}

impl ops::Shr<usize> for Uint {
    type Output = Self;

    /// Shift right by a number of bits, discarding the bits shifted out of
    /// the least significant digit. Shifting by the full width or more
    /// yields zero.
    fn shr(mut self, sh: usize) -> Self {
        self = self.shr_digits(sh / Digit::BITS as usize);
        let sh = sh % Digit::BITS as usize;
        if sh == 0 {
            return self;
        }
        let mut carry: Digit = 0;
        for d in self.0.iter_mut().rev() {
            let x = *d;
            *d = (x >> sh) | carry;
            carry = x << (Digit::BITS as usize - sh);
        }
        self
    }
}

// Not derived: the standard library only provides Default for arrays of
// up to 32 elements.
impl Default for Uint {
    fn default() -> Self {
        Self::ZERO
    }
}

impl cmp::PartialOrd for Uint {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl cmp::Ord for Uint {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        // Compare the digits in most-significant-first order.
        for (a, b) in self.0.iter().zip(other.0.iter()).rev() {
            match a.cmp(b) {
                cmp::Ordering::Less => return cmp::Ordering::Less,
                cmp::Ordering::Equal => {}
                cmp::Ordering::Greater => return cmp::Ordering::Greater,
            }
        }
        cmp::Ordering::Equal
    }
}

impl fmt::Display for Uint {
    /// Format in decimal by dividing by ten repeatedly; the digits come out
    /// least significant first and are emitted in reverse.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        let mut digits = Vec::new();
        let mut n = *self;
        while !n.is_zero() {
            // Ten is not zero.
            let (q, r) = n.div_rem_u64(10).unwrap();
            digits.push(r as u8);
            n = q;
        }
        let s: String = digits.iter().rev().map(|d| char::from(b'0' + d)).collect();
        f.write_str(&s)
    }
}

impl fmt::Debug for Uint {
    /// Format as raw digits, from the most significant non-zero one down to
    /// the least significant, each as a decimal number right-aligned in a
    /// field of width three.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.0.iter().rposition(|d| *d != 0).unwrap_or(0);
        for (i, d) in self.0[..=top].iter().enumerate().rev() {
            write!(f, "{d:3}")?;
            if i != 0 {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

/// Attempted to divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivideByZero;

impl fmt::Display for DivideByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attempted to divide by zero")
    }
}

impl std::error::Error for DivideByZero {}
