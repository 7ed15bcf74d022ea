//! Core numeric types used throughout the acquisition data path: the raw
//! complex-integer correlator accumulator and the block-floating-point
//! complex cell it gets folded into.

use std::ops::Add;

/// A pair of signed integers, the correlator's native accumulator type.
/// `~x` (one's-complement negation, `-x-1`) is used in place of true
/// negation in the matched filter -- see `matched_filter::matched_filter_core`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexInt {
    pub real: i32,
    pub imag: i32,
}

impl ComplexInt {
    pub const fn new(real: i32, imag: i32) -> Self {
        Self { real, imag }
    }
}

impl Add for ComplexInt {
    type Output = ComplexInt;
    fn add(self, rhs: ComplexInt) -> ComplexInt {
        ComplexInt::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl std::ops::Not for ComplexInt {
    type Output = ComplexInt;
    fn not(self) -> ComplexInt {
        ComplexInt::new(!self.real, !self.imag)
    }
}

/// Block-floating-point complex cell: a 10-bit-field mantissa pair sharing
/// one exponent. Invariant: `-512 <= real <= 511` and `-512 <= imag <= 511`
/// after every mutation; any overflow renormalizes by shifting both halves
/// right by one and incrementing `exp`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockFloatComplex {
    pub real: i32,
    pub imag: i32,
    pub exp: u32,
}

fn bit_width(v: i32) -> u32 {
    let bits = if v >= 0 { v } else { !v };
    32 - bits.leading_zeros()
}

impl From<ComplexInt> for BlockFloatComplex {
    /// Construction rule: pick the exponent from whichever half needs more
    /// bits, clamped to 0, then shift both halves down by it.
    fn from(data: ComplexInt) -> Self {
        let real_exp = bit_width(data.real) as i32 - 9;
        let imag_exp = bit_width(data.imag) as i32 - 9;
        let exp = real_exp.max(imag_exp).max(0);
        if exp > 0 {
            BlockFloatComplex {
                real: data.real >> exp,
                imag: data.imag >> exp,
                exp: exp as u32,
            }
        } else {
            BlockFloatComplex {
                real: data.real,
                imag: data.imag,
                exp: 0,
            }
        }
    }
}

impl BlockFloatComplex {
    fn renormalize(&mut self) {
        if self.real > 511 || self.imag > 511 || self.real < -512 || self.imag < -512 {
            self.exp += 1;
            self.real >>= 1;
            self.imag >>= 1;
        }
    }

    /// Align `data` onto the larger of the two exponents, add, and
    /// renormalize on overflow. Mirrors `complex_exp10::operator+=`.
    fn combine(&mut self, data: ComplexInt, data_exp: u32, sub: bool) {
        let (mut tr, mut ti) = (data.real, data.imag);
        let exp = if data_exp > self.exp {
            self.real >>= data_exp - self.exp;
            self.imag >>= data_exp - self.exp;
            data_exp
        } else {
            tr >>= self.exp - data_exp;
            ti >>= self.exp - data_exp;
            self.exp
        };
        self.exp = exp;
        if sub {
            self.real -= tr;
            self.imag -= ti;
        } else {
            self.real += tr;
            self.imag += ti;
        }
        self.renormalize();
    }
}

impl Add<ComplexInt> for BlockFloatComplex {
    type Output = BlockFloatComplex;
    fn add(self, rhs: ComplexInt) -> BlockFloatComplex {
        let rhs_bf = BlockFloatComplex::from(rhs);
        let mut result = self;
        result.combine(rhs, rhs_bf.exp, false);
        result
    }
}

impl std::ops::AddAssign<ComplexInt> for BlockFloatComplex {
    fn add_assign(&mut self, rhs: ComplexInt) {
        let rhs_bf = BlockFloatComplex::from(rhs);
        self.combine(rhs, rhs_bf.exp, false);
    }
}

impl std::ops::Sub<ComplexInt> for BlockFloatComplex {
    type Output = BlockFloatComplex;
    fn sub(self, rhs: ComplexInt) -> BlockFloatComplex {
        let rhs_bf = BlockFloatComplex::from(rhs);
        let mut result = self;
        result.combine(rhs, rhs_bf.exp, true);
        result
    }
}

/// Round-half-to-even right shift, used when applying twiddle magnitudes.
pub fn convergent_round_shift(x: i32, n: u32) -> i32 {
    if n == 0 {
        return x;
    }
    let mask = (1i32 << n) - 1;
    let half = 1i32 << (n - 1);
    let frac = x & mask;
    let mut result = x >> n;
    if frac > half || (frac == half && (result & 1) != 0) {
        result += 1;
    }
    result
}

/// Round-half-up right shift: `(x + (1 << (s-1))) >> s`. Used for
/// non-coherent amplitude rescaling.
pub fn round_shift_raw(x: u32, s: u32) -> u32 {
    if s == 0 { x } else { (x + (1 << (s - 1))) >> s }
}

/// One record tracked by the peak sorter (§3, §4.7).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeakRecord {
    pub amp: u32,
    pub exp: u32,
    pub phase_pos: u32,
    pub freq_pos: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_float_stays_in_range() {
        let mut c = BlockFloatComplex::from(ComplexInt::new(1_000_000, -1_000_000));
        assert!(c.real <= 511 && c.real >= -512);
        assert!(c.imag <= 511 && c.imag >= -512);
        for _ in 0..20 {
            c += ComplexInt::new(500, -500);
            assert!(c.real <= 511 && c.real >= -512, "real out of range: {}", c.real);
            assert!(c.imag <= 511 && c.imag >= -512, "imag out of range: {}", c.imag);
        }
    }

    #[test]
    fn not_is_ones_complement() {
        let c = ComplexInt::new(5, -3);
        let n = !c;
        assert_eq!(n.real, -6);
        assert_eq!(n.imag, 2);
    }

    #[test]
    fn convergent_round_shift_rounds_to_even() {
        assert_eq!(convergent_round_shift(0b10, 1), 1); // 2 -> exactly .5, even target
        assert_eq!(convergent_round_shift(0b110, 1), 3); // 6 -> 3 exact
        assert_eq!(convergent_round_shift(0b0100, 2), 1); // 4 -> exactly 1.0
    }

    #[test]
    fn round_shift_raw_rounds_half_up() {
        assert_eq!(round_shift_raw(3, 1), 2);
        assert_eq!(round_shift_raw(2, 1), 1);
    }
}
