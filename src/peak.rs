//! Peak sorter (C9, §4.7): keeps the three largest (amplitude, exponent,
//! phase, frequency) records observed during a channel's search, comparing
//! across rounds whose amplitudes may share different exponents.
//!
//! `original_source` does not carry `PeakSorter::InsertValue`'s body (not
//! present in the retrieval pack). This implementation reconstructs it from
//! the invariants in the data model and testable-properties sections: to
//! compare two records fairly, normalize both to the larger of their two
//! exponents by right-shifting the smaller-exponent record's amplitude, then
//! insertion-sort. See DESIGN.md for the worked example.

use crate::types::PeakRecord;

#[derive(Debug, Clone)]
pub struct PeakSorter {
    peaks: [PeakRecord; 3],
}

impl PeakSorter {
    pub fn new() -> Self {
        PeakSorter {
            peaks: [PeakRecord::default(); 3],
        }
    }

    pub fn clear(&mut self) {
        self.peaks = [PeakRecord::default(); 3];
    }

    pub fn peaks(&self) -> &[PeakRecord; 3] {
        &self.peaks
    }

    fn normalized_amp(amp: u32, exp: u32, target_exp: u32) -> u32 {
        if target_exp >= exp {
            amp >> (target_exp - exp)
        } else {
            amp
        }
    }

    /// Insert a candidate record, keeping only the three largest by
    /// exponent-normalized amplitude.
    pub fn insert_value(&mut self, candidate: PeakRecord) {
        let target_exp = self.peaks.iter().map(|p| p.exp).max().unwrap_or(0).max(candidate.exp);

        let mut normalized: Vec<(u32, PeakRecord)> = self
            .peaks
            .iter()
            .map(|p| (Self::normalized_amp(p.amp, p.exp, target_exp), *p))
            .collect();
        normalized.push((
            Self::normalized_amp(candidate.amp, candidate.exp, target_exp),
            candidate,
        ));

        normalized.sort_by(|a, b| b.0.cmp(&a.0));
        for (slot, (_, rec)) in self.peaks.iter_mut().zip(normalized.into_iter()) {
            *slot = rec;
        }
    }

    /// `PeakRatioTh`-gated detection threshold against the third-ranked
    /// amplitude (§4.7).
    pub fn peak_found(&self, peak_ratio_th: u8) -> bool {
        let p2 = self.peaks[2].amp;
        let mut th = p2 + (p2 >> 3) + 1;
        if peak_ratio_th & 1 != 0 {
            th += p2 >> 3;
        }
        if peak_ratio_th & 2 != 0 {
            th += p2 >> 2;
        }
        if peak_ratio_th & 4 != 0 {
            th += p2 >> 1;
        }
        self.peaks[0].amp >= th
    }
}

impl Default for PeakSorter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(amp: u32, exp: u32) -> PeakRecord {
        PeakRecord {
            amp,
            exp,
            phase_pos: 0,
            freq_pos: 0,
        }
    }

    #[test]
    fn keeps_top_three_sorted_descending() {
        let mut sorter = PeakSorter::new();
        for amp in [10, 50, 30, 90, 5] {
            sorter.insert_value(rec(amp, 0));
        }
        let amps: Vec<u32> = sorter.peaks().iter().map(|p| p.amp).collect();
        assert_eq!(amps, vec![90, 50, 30]);
    }

    #[test]
    fn compares_across_differing_exponents() {
        let mut sorter = PeakSorter::new();
        sorter.insert_value(rec(100, 0)); // effectively 100
        sorter.insert_value(rec(10, 3)); // effectively 80 at exp 0, smaller
        sorter.insert_value(rec(60, 2)); // effectively 240 at exp 0, largest
        assert_eq!(sorter.peaks()[0].amp, 60);
        assert_eq!(sorter.peaks()[0].exp, 2);
    }

    #[test]
    fn peak_found_respects_ratio_threshold() {
        let mut sorter = PeakSorter::new();
        sorter.insert_value(rec(255, 0));
        sorter.insert_value(rec(200, 0));
        sorter.insert_value(rec(100, 0));
        assert!(sorter.peak_found(0));
        assert!(!sorter.peak_found(7));
    }
}
