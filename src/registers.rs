//! Register/bus façade (C11, §4.9, §6): the address-decoded register space
//! a host CPU would see, wrapping the channel config blocks, the sample
//! buffer, the rate adaptor, and the per-channel search loop.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::buffer::AeBuffer;
use crate::channel_search::ChannelSearch;
use crate::config::{encode_peak_word, encode_status_word, ChannelConfig};
use crate::constants::{
    ADDR_OFFSET_AE_BUFFER_CONTROL, ADDR_OFFSET_AE_CARRIER_FREQ, ADDR_OFFSET_AE_CODE_RATIO,
    ADDR_OFFSET_AE_CONTROL, ADDR_OFFSET_AE_STATUS, ADDR_OFFSET_AE_THRESHOLD, AE_CLK_MHZ, BLOCK_US,
    DO_ACQUIRE_MASK, MAX_CHANNELS, MF_CORE_DEPTH, RESET_RATE_ADAPTOR_MASK, START_FILL_MASK,
};
use crate::rate_adaptor::RateAdaptor;

/// Top-level acquisition-engine state machine (§4.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AeState {
    Idle,
    Filling,
    Ready,
    Searching,
    Done,
}

/// The acquisition engine: register file, sample buffer, per-channel config
/// blocks (32 words each), and the search path.
pub struct AcquisitionEngine {
    buffer: AeBuffer,
    rate_adaptor: RateAdaptor,
    channel_count: u32,
    channel_words: Vec<[u32; 8]>,
    state: AeState,
    search: ChannelSearch,
}

impl AcquisitionEngine {
    pub fn new() -> Self {
        AcquisitionEngine::with_memory_table(Arc::from(Vec::<u32>::new()))
    }

    pub fn with_memory_table(memory_table: Arc<[u32]>) -> Self {
        AcquisitionEngine {
            buffer: AeBuffer::new(),
            rate_adaptor: RateAdaptor::new(),
            channel_count: 0,
            channel_words: vec![[0u32; 8]; MAX_CHANNELS],
            state: AeState::Idle,
            search: ChannelSearch::new(memory_table),
        }
    }

    pub fn reset(&mut self) {
        self.buffer = AeBuffer::new();
        self.rate_adaptor.reset();
        self.channel_count = 0;
        self.channel_words = vec![[0u32; 8]; MAX_CHANNELS];
        self.state = AeState::Idle;
    }

    pub fn write_sample(&mut self, byte: u8) {
        self.buffer.write_sample(byte);
        if self.buffer.is_full() {
            self.state = AeState::Ready;
        }
    }

    /// Decode a register-window write. `addr` is the byte offset within the
    /// AE base (§6); per-channel config words live above the fixed
    /// registers at `32 * channel_index + word_index`.
    pub fn set_reg_value(&mut self, addr: u32, value: u32) {
        const CONFIG_BASE: u32 = 0x1000;
        if addr >= CONFIG_BASE {
            let word_addr = ((addr - CONFIG_BASE) / 4) as usize;
            let channel = word_addr / 32;
            let word = word_addr % 32;
            if channel < self.channel_words.len() && word < 8 {
                self.channel_words[channel][word] = value;
            }
            return;
        }

        match addr {
            a if a == ADDR_OFFSET_AE_CONTROL => {
                self.channel_count = value & 0x3F;
                if value & DO_ACQUIRE_MASK != 0 {
                    self.do_acquisition();
                }
            }
            a if a == ADDR_OFFSET_AE_BUFFER_CONTROL => {
                self.buffer.set_threshold(value & 0x7F);
                // Literal decimal masks, not the 0x40/0x80 bit positions the
                // §6 register-map prose would suggest -- preserved verbatim
                // from the reference control-register handler (DESIGN.md).
                if value & START_FILL_MASK != 0 {
                    self.buffer.start_fill();
                    self.state = AeState::Filling;
                }
                if value & RESET_RATE_ADAPTOR_MASK != 0 {
                    self.rate_adaptor.reset();
                }
            }
            a if a == ADDR_OFFSET_AE_CARRIER_FREQ => self.rate_adaptor.carrier_freq = value,
            a if a == ADDR_OFFSET_AE_CODE_RATIO => self.rate_adaptor.code_rate_adjust_ratio = value & 0x00FF_FFFF,
            a if a == ADDR_OFFSET_AE_THRESHOLD => self.rate_adaptor.threshold = (value & 0xFF) as u8,
            _ => warn!("set_reg_value: unmapped address {addr:#x}"),
        }
    }

    pub fn get_reg_value(&self, addr: u32) -> u32 {
        const CONFIG_BASE: u32 = 0x1000;
        if addr >= CONFIG_BASE {
            let word_addr = ((addr - CONFIG_BASE) / 4) as usize;
            let channel = word_addr / 32;
            let word = word_addr % 32;
            return self
                .channel_words
                .get(channel)
                .and_then(|c| c.get(word))
                .copied()
                .unwrap_or(0);
        }

        match addr {
            a if a == ADDR_OFFSET_AE_CONTROL => self.channel_count,
            a if a == ADDR_OFFSET_AE_BUFFER_CONTROL => 0,
            a if a == ADDR_OFFSET_AE_STATUS => {
                let mut status = 0u32;
                if self.buffer.is_filling() {
                    status |= 1 << 16;
                }
                if self.buffer.threshold_reached() {
                    status |= 1 << 17;
                }
                if self.buffer.is_full() {
                    status |= 1 << 18;
                }
                status |= 1 << 19;
                status
            }
            a if a == ADDR_OFFSET_AE_CARRIER_FREQ => self.rate_adaptor.carrier_freq,
            a if a == ADDR_OFFSET_AE_CODE_RATIO => self.rate_adaptor.code_rate_adjust_ratio,
            a if a == ADDR_OFFSET_AE_THRESHOLD => self.rate_adaptor.threshold as u32,
            _ => {
                warn!("get_reg_value: unmapped address {addr:#x}");
                0
            }
        }
    }

    /// Runs every configured channel's search to completion, strictly
    /// sequentially (§5), writing each channel's result words back into its
    /// config block.
    pub fn do_acquisition(&mut self) {
        if self.channel_count == 0 {
            return;
        }
        self.state = AeState::Searching;
        info!("starting acquisition across {} channel(s)", self.channel_count);

        for ch in 0..self.channel_count as usize {
            if ch >= self.channel_words.len() {
                break;
            }
            let words = self.channel_words[ch];
            let cfg = ChannelConfig::decode(&words);
            let result = self.search.search_one_channel(&cfg, &self.buffer);
            debug!("channel {ch}: success={} peaks={:?}", result.success, result.peaks.map(|p| p.amp));

            self.channel_words[ch][4] = encode_status_word(result.success, result.peak_exp as u8, result.noise_floor);
            for (i, peak) in result.peaks.iter().enumerate() {
                self.channel_words[ch][5 + i] = encode_peak_word(peak);
            }
        }

        self.state = AeState::Done;
    }

    /// Scheduler completion estimate (§5): `ceil(682 * cycles / (AE_CLK_MHz
    /// * BLOCK_US))`, a true integer ceiling division -- unlike the register
    /// masks above, this implementation treats the "rounded up to whole
    /// milliseconds" contract literally rather than reproducing the
    /// reference's truncation-based approximation (DESIGN.md).
    pub fn get_ae_process_time(&self) -> u64 {
        let mut total_cycles: u64 = 2;
        for ch in 0..self.channel_count as usize {
            if ch >= self.channel_words.len() {
                break;
            }
            let cfg = ChannelConfig::decode(&self.channel_words[ch]);
            total_cycles += cfg.stride_number as u64
                * cfg.code_span as u64
                * (1 + 6 * cfg.coherent_number as u64 * cfg.non_coherent_number as u64);
        }
        let numerator = MF_CORE_DEPTH as u64 * total_cycles;
        let denominator = AE_CLK_MHZ * BLOCK_US;
        numerator.div_ceil(denominator)
    }

    pub fn state(&self) -> AeState {
        self.state
    }
}

impl Default for AcquisitionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn do_acquire_with_zero_channels_is_a_noop() {
        let mut ae = AcquisitionEngine::new();
        ae.set_reg_value(ADDR_OFFSET_AE_CONTROL, DO_ACQUIRE_MASK);
        assert_eq!(ae.state(), AeState::Idle);
    }

    #[test]
    fn process_time_is_baseline_with_no_channels_configured() {
        // total_cycles is seeded at 2 regardless of channel count, so an
        // idle engine still reports the fixed MF_CORE_DEPTH * 2 baseline.
        let ae = AcquisitionEngine::new();
        let expected = (MF_CORE_DEPTH as u64 * 2).div_ceil(AE_CLK_MHZ * BLOCK_US);
        assert_eq!(ae.get_ae_process_time(), expected);
    }

    #[test]
    fn literal_buffer_control_masks_trigger_reset_and_fill() {
        let mut ae = AcquisitionEngine::new();
        ae.set_reg_value(ADDR_OFFSET_AE_BUFFER_CONTROL, START_FILL_MASK);
        assert!(ae.buffer.is_filling());
        ae.set_reg_value(ADDR_OFFSET_AE_BUFFER_CONTROL, RESET_RATE_ADAPTOR_MASK);
        assert_eq!(ae.rate_adaptor.carrier_freq, 0);
    }
}
