//! Channel configuration bitfield codec (§3, §6): decodes/encodes the 8 ×
//! 32-bit per-channel register words, plus a `serde`-derived human-editable
//! form for config files and the CLI.

use serde::{Deserialize, Serialize};

use crate::prn::PrnSelect;
use crate::types::PeakRecord;

fn bits(word: u32, hi: u32, lo: u32) -> u32 {
    let width = hi - lo + 1;
    let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
    (word >> lo) & mask
}

fn put_bits(word: &mut u32, hi: u32, lo: u32, value: u32) {
    let width = hi - lo + 1;
    let mask = if width >= 32 { u32::MAX } else { (1u32 << width) - 1 };
    *word = (*word & !(mask << lo)) | ((value & mask) << lo);
}

/// Decoded view of a channel's 4 input config words (§3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub stride_number: u32,
    pub coherent_number: u32,
    pub non_coherent_number: u32,
    pub peak_ratio_th: u8,
    pub early_terminate: bool,
    pub center_freq: i32,
    pub svid: u8,
    pub prn_select: PrnSelectConfig,
    pub code_span: u32,
    pub read_address: u32,
    pub dft_freq: u32,
    pub stride_interval: i32,
}

/// Serde-friendly mirror of `PrnSelect` (kept separate so `prn::PrnSelect`
/// stays free to evolve without touching the on-disk config format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrnSelectConfig {
    Lfsr,
    Memory,
    WeilB1C,
    WeilL1C,
}

impl From<PrnSelectConfig> for PrnSelect {
    fn from(v: PrnSelectConfig) -> Self {
        match v {
            PrnSelectConfig::Lfsr => PrnSelect::Lfsr,
            PrnSelectConfig::Memory => PrnSelect::Memory,
            PrnSelectConfig::WeilB1C => PrnSelect::WeilB1C,
            PrnSelectConfig::WeilL1C => PrnSelect::WeilL1C,
        }
    }
}

impl ChannelConfig {
    pub fn decode(words: &[u32; 8]) -> Self {
        let w0 = words[0];
        let w1 = words[1];
        let w2 = words[2];
        let w3 = words[3];

        let center_freq = (bits(w1, 19, 0) << 12) as i32;
        let prn_select = match bits(w1, 31, 30) {
            0 => PrnSelectConfig::Lfsr,
            1 => PrnSelectConfig::Memory,
            2 => PrnSelectConfig::WeilB1C,
            _ => PrnSelectConfig::WeilL1C,
        };
        let stride_interval = bits(w3, 21, 0) as i32;

        ChannelConfig {
            stride_number: bits(w0, 5, 0),
            coherent_number: bits(w0, 13, 8),
            non_coherent_number: bits(w0, 22, 16),
            peak_ratio_th: bits(w0, 26, 24) as u8,
            early_terminate: bits(w0, 27, 27) != 0,
            center_freq,
            svid: bits(w1, 29, 24) as u8,
            prn_select,
            code_span: bits(w2, 4, 0),
            read_address: bits(w2, 12, 8),
            dft_freq: bits(w2, 30, 20),
            stride_interval,
        }
    }

    pub fn encode(&self) -> [u32; 4] {
        let mut w0 = 0u32;
        put_bits(&mut w0, 5, 0, self.stride_number);
        put_bits(&mut w0, 13, 8, self.coherent_number);
        put_bits(&mut w0, 22, 16, self.non_coherent_number);
        put_bits(&mut w0, 26, 24, self.peak_ratio_th as u32);
        put_bits(&mut w0, 27, 27, self.early_terminate as u32);

        let mut w1 = 0u32;
        put_bits(&mut w1, 19, 0, (self.center_freq as u32) >> 12);
        put_bits(&mut w1, 29, 24, self.svid as u32);
        let prn_bits = match self.prn_select {
            PrnSelectConfig::Lfsr => 0,
            PrnSelectConfig::Memory => 1,
            PrnSelectConfig::WeilB1C => 2,
            PrnSelectConfig::WeilL1C => 3,
        };
        put_bits(&mut w1, 31, 30, prn_bits);

        let mut w2 = 0u32;
        put_bits(&mut w2, 4, 0, self.code_span);
        put_bits(&mut w2, 12, 8, self.read_address);
        put_bits(&mut w2, 30, 20, self.dft_freq);

        let mut w3 = 0u32;
        put_bits(&mut w3, 21, 0, self.stride_interval as u32);

        [w0, w1, w2, w3]
    }
}

/// Packs word4's success/exponent/noise-floor fields (§6).
pub fn encode_status_word(success: bool, peak_exp: u8, noise_floor: u32) -> u32 {
    let mut w = 0u32;
    put_bits(&mut w, 31, 31, success as u32);
    put_bits(&mut w, 30, 24, peak_exp as u32);
    put_bits(&mut w, 18, 0, noise_floor);
    w
}

/// Packs one `{amp8, freq9, phase15}` peak triple into a result word (§6).
pub fn encode_peak_word(peak: &PeakRecord) -> u32 {
    let mut w = 0u32;
    put_bits(&mut w, 31, 24, peak.amp);
    put_bits(&mut w, 23, 15, peak.freq_pos);
    put_bits(&mut w, 14, 0, peak.phase_pos);
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_encode_round_trips_input_words() {
        let cfg = ChannelConfig {
            stride_number: 21,
            coherent_number: 10,
            non_coherent_number: 4,
            peak_ratio_th: 5,
            early_terminate: true,
            center_freq: 1 << 20,
            svid: 12,
            prn_select: PrnSelectConfig::WeilB1C,
            code_span: 3,
            read_address: 7,
            dft_freq: 900,
            stride_interval: 400,
        };
        let words = cfg.encode();
        let decoded = ChannelConfig::decode(&[words[0], words[1], words[2], words[3], 0, 0, 0, 0]);
        assert_eq!(decoded, cfg);
    }

    #[test]
    fn encode_peak_word_packs_fields() {
        let peak = PeakRecord {
            amp: 200,
            exp: 3,
            phase_pos: 100,
            freq_pos: 5,
        };
        let w = encode_peak_word(&peak);
        assert_eq!(bits(w, 31, 24), 200);
        assert_eq!(bits(w, 23, 15), 5);
        assert_eq!(bits(w, 14, 0), 100);
    }
}
