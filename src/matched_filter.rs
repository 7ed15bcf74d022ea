//! Matched-filter core (C6, §4.3): correlates a window of mixed samples
//! against PRN chips using only adders and a conditional bitwise NOT in
//! place of a real multiply -- the hardware-friendly ±1 correlation trick.

use crate::constants::{ADDER_TREE_WIDTH, MF_CORE_DEPTH};
use crate::types::ComplexInt;

/// `samples` must hold at least `phase_count - 1 + MF_CORE_DEPTH` entries;
/// `code` must hold `ADDER_TREE_WIDTH` chips (one per two-sample step).
/// Returns one correlator sum per output phase `0..phase_count`.
pub fn matched_filter_core(samples: &[ComplexInt], code: &[u8], phase_count: usize) -> Vec<ComplexInt> {
    debug_assert!(code.len() >= ADDER_TREE_WIDTH);
    let mut output = Vec::with_capacity(phase_count);
    for i in 0..phase_count {
        let mut acc = ComplexInt::default();
        let mut j = 0usize;
        while j < MF_CORE_DEPTH {
            let chip = code[j / 2];
            let sample = samples[i + j];
            acc = acc + if chip == 1 { !sample } else { sample };
            j += 2;
        }
        output.push(acc);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_zero_chips_sums_samples_directly() {
        let samples = vec![ComplexInt::new(1, 1); MF_CORE_DEPTH];
        let code = vec![0u8; ADDER_TREE_WIDTH];
        let out = matched_filter_core(&samples, &code, 1);
        assert_eq!(out[0], ComplexInt::new(MF_CORE_DEPTH as i32, MF_CORE_DEPTH as i32));
    }

    #[test]
    fn all_one_chips_uses_ones_complement_not_negation() {
        let samples = vec![ComplexInt::new(2, -3); MF_CORE_DEPTH];
        let code = vec![1u8; ADDER_TREE_WIDTH];
        let out = matched_filter_core(&samples, &code, 1);
        let per_step = !ComplexInt::new(2, -3);
        let expected = ComplexInt::new(
            per_step.real * (MF_CORE_DEPTH as i32 / 2),
            per_step.imag * (MF_CORE_DEPTH as i32 / 2),
        );
        assert_eq!(out[0], expected);
    }
}
