//! Channel search (C10, §4.8): orchestrates C2-C9 through the stride
//! (Doppler) × code-round × non-coherent-round × coherent-epoch × segment
//! search that one channel's `DoAcquisition` pass runs.

use crate::buffer::AeBuffer;
use crate::coherent::{get_dft_factor, mul_add_sub, segment_bias, CoherentBuffer};
use crate::config::ChannelConfig;
use crate::constants::{ADDER_TREE_WIDTH, FULL_LENGTH, GPS_INIT, MF_CORE_DEPTH};
use crate::matched_filter::matched_filter_core;
use crate::mixer::SampleMixer;
use crate::noncoherent::NonCoherentAccumulator;
use crate::peak::PeakSorter;
use crate::prn::{PrnBank, PrnSelect};
use crate::types::PeakRecord;

/// Doppler stride offset sequence `0, +1, -1, +2, -2, ...` (§4.8).
fn stride_offset(stride_count: u32) -> i32 {
    if stride_count == 0 {
        0
    } else {
        let magnitude = (stride_count + 1) / 2;
        if stride_count % 2 == 1 {
            magnitude as i32
        } else {
            -(magnitude as i32)
        }
    }
}

fn init_word_for(svid: u8, select: PrnSelect) -> u32 {
    if svid == 0 {
        return 0;
    }
    match select {
        PrnSelect::Lfsr => {
            let idx = svid as usize - 1;
            GPS_INIT.get(idx).copied().unwrap_or(0)
        }
        PrnSelect::Memory => ((49u32 + svid as u32) << 6) + 0xC000_0004,
        PrnSelect::WeilB1C => {
            let idx = svid as usize - 1;
            crate::constants::B1C_INIT.get(idx).copied().unwrap_or(0)
        }
        PrnSelect::WeilL1C => {
            let idx = svid as usize - 1;
            crate::constants::L1C_INIT.get(idx).copied().unwrap_or(0)
        }
    }
}

pub struct SearchResult {
    pub peaks: [PeakRecord; 3],
    pub noise_floor: u32,
    pub peak_exp: u32,
    pub success: bool,
}

/// Owns one channel's correlator-path state: the mixer, coherent/non-coherent
/// buffers, peak sorter, and PRN generator bank. Reused across channels by
/// calling `search_one_channel` again -- the reference model runs channels
/// strictly sequentially (§5), so one instance suffices for the whole engine.
pub struct ChannelSearch {
    mixer: SampleMixer,
    coherent: CoherentBuffer,
    noncoherent: NonCoherentAccumulator,
    sorter: PeakSorter,
    prn_bank: PrnBank,
}

impl ChannelSearch {
    pub fn new(memory_table: std::sync::Arc<[u32]>) -> Self {
        ChannelSearch {
            mixer: SampleMixer::new(),
            coherent: CoherentBuffer::new(MF_CORE_DEPTH),
            noncoherent: NonCoherentAccumulator::new(MF_CORE_DEPTH),
            sorter: PeakSorter::new(),
            prn_bank: PrnBank::new(memory_table),
        }
    }

    /// Reset the mixer's carrier NCO and decimator history, and the PRN
    /// generator's phase, once at the start of a code-round (§4.1: "the
    /// previous input is retained across calls and reset to zero at
    /// preload"). Every segment within the round continues from here rather
    /// than resetting again.
    fn begin_code_round(&mut self, select: PrnSelect, init_word: u32) {
        self.mixer.preload();
        self.prn_bank.phase_init(select, init_word);
    }

    /// Mix and decimate the next `2 * MF_CORE_DEPTH` raw samples starting at
    /// `address`, continuing the mixer's carrier NCO phase and decimator
    /// history from the previous call within this code-round.
    fn load_samples(&mut self, buffer: &AeBuffer, address: usize, carrier_freq: u32) -> Vec<crate::types::ComplexInt> {
        let needed = 2 * MF_CORE_DEPTH;
        (0..needed)
            .map(|i| {
                let raw = buffer.read_sample(address + i) as i8;
                self.mixer.mix(raw, carrier_freq)
            })
            .collect()
    }

    /// Draw the next `ADDER_TREE_WIDTH` chips, continuing the PRN
    /// generator's shift state from wherever `begin_code_round` (or the
    /// previous segment's draw) left it.
    fn load_code(&mut self, select: PrnSelect) -> [u8; ADDER_TREE_WIDTH] {
        let mut code = [0u8; ADDER_TREE_WIDTH];
        for c in code.iter_mut() {
            *c = self.prn_bank.chip(select);
            self.prn_bank.shift(select);
        }
        code
    }

    pub fn search_one_channel(&mut self, cfg: &ChannelConfig, buffer: &AeBuffer) -> SearchResult {
        self.sorter.clear();
        let select: PrnSelect = cfg.prn_select.into();
        let init_word = init_word_for(cfg.svid, select);

        let segments = if FULL_LENGTH { 1 } else { 3 };
        let code_round_limit = (cfg.code_span as usize / segments).max(1);
        let base_address = cfg.read_address as usize * MF_CORE_DEPTH;

        let mut early_stop = false;

        'strides: for stride_count in 0..cfg.stride_number {
            let offset = stride_offset(stride_count);
            let carrier_freq = (cfg.center_freq + cfg.stride_interval * offset) as u32;

            for code_round in 0..code_round_limit {
                let code_round_addr = base_address + code_round * MF_CORE_DEPTH;
                self.begin_code_round(select, init_word);
                let mut address = code_round_addr;

                for noncoh_count in 0..cfg.non_coherent_number {
                    self.noncoherent.begin_round(noncoh_count);
                    self.coherent.reset();
                    let mut dft_nco: u32 = 0;

                    for coh_count in 0..cfg.coherent_number {
                        let factors = get_dft_factor(dft_nco);

                        for segment in 0..segments {
                            let samples = self.load_samples(buffer, address, carrier_freq);
                            address += MF_CORE_DEPTH;
                            let code = self.load_code(select);
                            let cor = matched_filter_core(&samples, &code, MF_CORE_DEPTH);
                            let bias = segment_bias(FULL_LENGTH, segment);

                            for (row, &value) in cor.iter().enumerate() {
                                let biased = value + bias;
                                if coh_count == 0 {
                                    self.coherent.seed_first_epoch(row, biased);
                                } else {
                                    for (k, factor) in factors.iter().enumerate() {
                                        let (add, sub) = mul_add_sub(biased, *factor);
                                        self.coherent.accumulate(row, 4 + k, add);
                                        self.coherent.accumulate(row, 3 - k, sub);
                                    }
                                }
                            }
                        }
                        dft_nco = (dft_nco + cfg.dft_freq) & 0x3FFF;
                    }

                    let final_round = noncoh_count + 1 == cfg.non_coherent_number;
                    let final_span = code_round + 1 == code_round_limit;
                    self.noncoherent
                        .do_non_coherent_sum(&self.coherent, final_round, final_span, &mut self.sorter);

                    if cfg.early_terminate && self.sorter.peak_found(cfg.peak_ratio_th) {
                        early_stop = true;
                        break 'strides;
                    }
                }
            }
        }

        let peaks = *self.sorter.peaks();
        SearchResult {
            peaks,
            noise_floor: self.noncoherent.noise_floor,
            peak_exp: peaks[0].exp,
            success: early_stop || self.sorter.peak_found(cfg.peak_ratio_th),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_offset_sequence_alternates_sign() {
        assert_eq!(stride_offset(0), 0);
        assert_eq!(stride_offset(1), 1);
        assert_eq!(stride_offset(2), -1);
        assert_eq!(stride_offset(3), 2);
        assert_eq!(stride_offset(4), -2);
    }

    #[test]
    fn svid_zero_forces_zero_init_word() {
        assert_eq!(init_word_for(0, PrnSelect::Lfsr), 0);
    }
}
