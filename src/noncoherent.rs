//! Non-coherent accumulation (C8, §4.6): folds one non-coherent round's
//! coherent-buffer cells into 8-bit amplitude estimates, rescaling the
//! running accumulation whenever a round threatens to overflow its 8-bit
//! field.

use crate::coherent::CoherentBuffer;
use crate::peak::PeakSorter;
use crate::types::{round_shift_raw, BlockFloatComplex, PeakRecord};

/// Piecewise-linear envelope approximation of `|re + j*im|` used instead of
/// a real magnitude (§4.6). The two's-complement sign bit is cleared via
/// bitwise NOT rather than true negation, per the hardware idiom used
/// throughout this engine.
pub fn amplitude(cell: BlockFloatComplex) -> u32 {
    let abs_re = if cell.real < 0 { !cell.real } else { cell.real } as u32;
    let abs_im = if cell.imag < 0 { !cell.imag } else { cell.imag } as u32;
    let (max, min) = if abs_re >= abs_im {
        (abs_re, abs_im)
    } else {
        (abs_im, abs_re)
    };
    if max > 3 * min {
        max + (min >> 3)
    } else {
        max - (max >> 3) + (min >> 1)
    }
}

/// Align a cell's envelope amplitude onto the round's shared scale and apply
/// the final one-bit round-shift (§4.6).
fn cell_amp_aligned(cell: BlockFloatComplex, shift_coh: u32, max_coh_exp: u32) -> u32 {
    let raw = amplitude(cell);
    let total_shift = shift_coh + max_coh_exp.saturating_sub(cell.exp);
    let shifted = if total_shift == 0 { raw } else { raw >> total_shift };
    (shifted + 1) >> 1
}

/// `MF_CORE_DEPTH × 8` non-coherent amplitude accumulator, plus the shared
/// exponent and rescale-partition state carried across rounds of a single
/// channel search (reset only when `NoncohCount == 0`).
///
/// Cells are stored as `u16` even though the field is nominally "8-bit":
/// the write-back invariant (§8) allows values up to 510 after a rescale,
/// one bit wider than a true 8-bit field -- headroom the reference model's
/// clipping logic relies on before the *next* round's rescale brings it
/// back under 256.
#[derive(Debug, Clone)]
pub struct NonCoherentAccumulator {
    bins: Vec<[u16; 8]>,
    noncoh_exp: u32,
    exp_inc_pos: usize,
    pub noise_floor: u32,
}

impl NonCoherentAccumulator {
    pub fn new(depth: usize) -> Self {
        NonCoherentAccumulator {
            bins: vec![[0u16; 8]; depth],
            noncoh_exp: 0,
            exp_inc_pos: 0,
            noise_floor: 0,
        }
    }

    /// `NoiseFloor` is reset at the top of every `NonCoherentAcc` call, so
    /// only the final qualifying call's accumulation survives in the field.
    pub fn begin_round(&mut self, noncoh_count: u32) {
        self.noise_floor = 0;
        if noncoh_count == 0 {
            self.noncoh_exp = 0;
            self.exp_inc_pos = 0;
            for row in self.bins.iter_mut() {
                *row = [0u16; 8];
            }
        }
    }

    /// Fold one non-coherent round's coherent buffer into the accumulator,
    /// rescaling on overflow, and feed every row's peak into `sorter`.
    pub fn do_non_coherent_sum(
        &mut self,
        coherent: &CoherentBuffer,
        final_round: bool,
        final_span: bool,
        sorter: &mut PeakSorter,
    ) {
        let max_coh_exp = coherent.max_exp;
        let final_exp = max_coh_exp.max(self.noncoh_exp);
        let shift_coh = final_exp - max_coh_exp;
        let shift_noncoh = final_exp - self.noncoh_exp;
        self.noncoh_exp = final_exp;

        let mut exp_inc_cor = 0usize;
        let mut extra_shift = false;

        for r in 0..self.bins.len() {
            let row_cells = coherent.row(r);
            let shift = if r < self.exp_inc_pos {
                shift_noncoh + 1
            } else {
                shift_noncoh
            };

            let mut row_out = [0u32; 8];
            let mut exceed = false;
            for b in 0..8 {
                let amp_new = cell_amp_aligned(row_cells[b], shift_coh, max_coh_exp);
                let old_shifted = round_shift_raw(self.bins[r][b] as u32, shift);
                let mut sum = old_shifted + amp_new;
                if extra_shift {
                    sum = (sum + 1) >> 1;
                }
                if sum >= 512 {
                    sum = 510;
                }
                if sum > 255 {
                    exceed = true;
                }
                row_out[b] = sum;
            }

            if exceed {
                self.noncoh_exp += 1;
                exp_inc_cor = r;
                extra_shift = true;
                for v in row_out.iter_mut() {
                    *v = (*v + 1) >> 1;
                }
                self.noise_floor >>= 1;
            }

            let mut max_amp = 0u32;
            let mut max_bin = 0usize;
            for (b, &v) in row_out.iter().enumerate() {
                let clipped = v.min(510);
                self.bins[r][b] = clipped as u16;
                if clipped > max_amp {
                    max_amp = clipped;
                    max_bin = b;
                }
            }
            if exceed {
                max_amp = (max_amp + 1) >> 1;
            }

            if final_round && final_span {
                let sum: u32 = row_out.iter().sum();
                self.noise_floor += sum >> 3;
            }

            sorter.insert_value(PeakRecord {
                amp: max_amp,
                exp: self.noncoh_exp,
                phase_pos: r as u32,
                freq_pos: max_bin as u32,
            });
        }

        self.exp_inc_pos = exp_inc_cor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComplexInt;

    #[test]
    fn amplitude_prefers_linear_branch_when_balanced() {
        let cell = BlockFloatComplex::from(ComplexInt::new(100, 90));
        let amp = amplitude(cell);
        assert!(amp > 0);
    }

    #[test]
    fn begin_round_resets_only_on_first_round() {
        let mut acc = NonCoherentAccumulator::new(4);
        acc.bins[0][0] = 42;
        acc.begin_round(1);
        assert_eq!(acc.bins[0][0], 42);
        acc.begin_round(0);
        assert_eq!(acc.bins[0][0], 0);
    }

    #[test]
    fn do_non_coherent_sum_clips_to_510() {
        let depth = 2;
        let mut acc = NonCoherentAccumulator::new(depth);
        acc.begin_round(0);
        let mut coherent = CoherentBuffer::new(depth);
        for r in 0..depth {
            coherent.seed_first_epoch(r, ComplexInt::new(511, 511));
        }
        let mut sorter = PeakSorter::new();
        for _ in 0..10 {
            acc.do_non_coherent_sum(&coherent, false, false, &mut sorter);
        }
        for row in acc.bins.iter() {
            for &v in row.iter() {
                assert!(v <= 510);
            }
        }
    }
}
