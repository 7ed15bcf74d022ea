//! Coherent integration and 8-point DFT (C7, §4.4-4.5): folds a non-coherent
//! round's matched-filter outputs into an 8-bin coherent buffer using a
//! twiddle-factor LUT instead of trigonometric multiplies.

use crate::constants::DFT_TABLE;
use crate::types::{convergent_round_shift, BlockFloatComplex, ComplexInt};

/// One DFT bin pair's twiddle factor: cosine/sine magnitudes plus their
/// independent sign bits (§4.4).
#[derive(Debug, Clone, Copy, Default)]
pub struct TwiddleFactor {
    pub mag_cos: i32,
    pub mag_sin: i32,
    pub sign_cos: bool,
    pub sign_sin: bool,
}

/// Compute the four positive-frequency twiddle factors (bins ±1, ±3, ±5, ±7)
/// for the current `DftNco` (14-bit unsigned phase accumulator).
pub fn get_dft_factor(dft_nco: u32) -> [TwiddleFactor; 4] {
    let mut out = [TwiddleFactor::default(); 4];
    for (i, slot) in out.iter_mut().enumerate() {
        let mut nco = ((2 * i as u32 + 1) * dft_nco) & 0x3FFF;
        nco >>= 6;
        let idx = (nco & 0x7F) as usize;
        let mag_sin = DFT_TABLE[idx];
        let mag_cos = DFT_TABLE[idx ^ 0x40];
        let sign_cos = (((nco >> 7) ^ (nco >> 6)) & 1) != 0;
        let sign_sin = ((!nco >> 7) & 1) != 0;
        *slot = TwiddleFactor {
            mag_cos,
            mag_sin,
            sign_cos,
            sign_sin,
        };
    }
    out
}

fn scale_and_round(value: i32, magnitude: i32) -> i32 {
    let product = value * magnitude;
    convergent_round_shift(product >> 3, 6)
}

/// `MulAdd`/`MulSub` products for one correlator output and one twiddle
/// factor, per the sign rules in §4.5.
pub fn mul_add_sub(cor: ComplexInt, tw: TwiddleFactor) -> (ComplexInt, ComplexInt) {
    let pc = ComplexInt::new(
        scale_and_round(cor.real, tw.mag_cos),
        scale_and_round(cor.imag, tw.mag_cos),
    );
    let ps = ComplexInt::new(
        scale_and_round(cor.real, tw.mag_sin),
        scale_and_round(cor.imag, tw.mag_sin),
    );

    let pc_real = if tw.sign_cos { -pc.real } else { pc.real };
    let pc_imag = if tw.sign_cos { -pc.imag } else { pc.imag };

    let add = ComplexInt::new(
        pc_real + if tw.sign_sin { ps.imag } else { -ps.imag },
        pc_imag + if tw.sign_sin { -ps.real } else { ps.real },
    );
    let sub = ComplexInt::new(
        pc_real + if tw.sign_sin { -ps.imag } else { ps.imag },
        pc_imag + if tw.sign_sin { ps.real } else { -ps.real },
    );
    (add, sub)
}

/// Bias added to a correlator output before accumulation, to move two's
/// complement products into a positive range ahead of the DFT (§4.5).
pub fn segment_bias(full_length: bool, segment: usize) -> ComplexInt {
    if full_length {
        ComplexInt::new(512, 512)
    } else if segment == 1 {
        ComplexInt::new(192, 192)
    } else {
        ComplexInt::new(160, 160)
    }
}

/// `MF_CORE_DEPTH × 8` block-float accumulators for one non-coherent round.
/// Reset implicitly at the start of each round (§3).
#[derive(Debug, Clone)]
pub struct CoherentBuffer {
    rows: Vec<[BlockFloatComplex; 8]>,
    pub max_exp: u32,
}

impl CoherentBuffer {
    pub fn new(depth: usize) -> Self {
        CoherentBuffer {
            rows: vec![[BlockFloatComplex::default(); 8]; depth],
            max_exp: 0,
        }
    }

    pub fn reset(&mut self) {
        for row in self.rows.iter_mut() {
            *row = [BlockFloatComplex::default(); 8];
        }
        self.max_exp = 0;
    }

    pub fn row(&self, idx: usize) -> &[BlockFloatComplex; 8] {
        &self.rows[idx]
    }

    /// First epoch of a round: seed every bin identically, reducing the DFT
    /// to a direct sum (§4.5).
    pub fn seed_first_epoch(&mut self, row: usize, value: ComplexInt) {
        let cell = BlockFloatComplex::from(value);
        for bin in self.rows[row].iter_mut() {
            *bin = cell;
        }
        self.max_exp = self.max_exp.max(cell.exp);
    }

    pub fn accumulate(&mut self, row: usize, bin: usize, value: ComplexInt) {
        self.rows[row][bin] += value;
        self.max_exp = self.max_exp.max(self.rows[row][bin].exp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dft_factor_zero_nco_has_zero_sin_magnitude() {
        let factors = get_dft_factor(0);
        assert_eq!(factors[0].mag_sin, 0);
    }

    #[test]
    fn coherent_buffer_first_epoch_seeds_all_bins_equal() {
        let mut buf = CoherentBuffer::new(4);
        buf.seed_first_epoch(0, ComplexInt::new(100, -50));
        let row = buf.row(0);
        for bin in row.iter() {
            assert_eq!((bin.real, bin.imag, bin.exp), (row[0].real, row[0].imag, row[0].exp));
        }
    }

    #[test]
    fn segment_bias_matches_mode() {
        assert_eq!(segment_bias(true, 0), ComplexInt::new(512, 512));
        assert_eq!(segment_bias(false, 1), ComplexInt::new(192, 192));
        assert_eq!(segment_bias(false, 2), ComplexInt::new(160, 160));
    }
}
