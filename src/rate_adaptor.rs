//! Rate adaptor (C5): carrier-frequency and code-rate configuration that is
//! opaque to the acquisition engine's own logic -- AE only records and resets
//! it on command (`ResetRateAdaptor`, §6).

#[derive(Debug, Clone, Copy, Default)]
pub struct RateAdaptor {
    pub carrier_freq: u32,
    pub code_rate_adjust_ratio: u32,
    pub threshold: u8,
}

impl RateAdaptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triggered by `AE_BUFFER_CONTROL`'s literal `200` mask (§6, §9) -- AE
    /// logic never interprets these fields, it only clears them on reset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_all_fields() {
        let mut ra = RateAdaptor {
            carrier_freq: 123,
            code_rate_adjust_ratio: 456,
            threshold: 7,
        };
        ra.reset();
        assert_eq!(ra.carrier_freq, 0);
        assert_eq!(ra.code_rate_adjust_ratio, 0);
        assert_eq!(ra.threshold, 0);
    }
}
