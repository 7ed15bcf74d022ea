//! Raw sample file loading: reads the packed nibble-stream the acquisition
//! engine's sample buffer expects straight off disk.

use bytesize::ByteSize;
use colored::Colorize;
use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::PathBuf;
use std::time::Instant;

/// Loads a raw byte-per-sample capture file on demand, one `AE_BUFFER_SIZE`
/// fill at a time.
pub struct SampleRecording {
    file_path: PathBuf,
}

impl SampleRecording {
    pub fn new(file_path: PathBuf) -> Result<Self, Box<dyn Error>> {
        let file_size = file_path.metadata()?.len();
        println!(
            "sample file: {} -- {}",
            file_path.display().to_string().green(),
            ByteSize::b(file_size).to_string_as(false).bold(),
        );
        Ok(Self { file_path })
    }

    /// Read `num_samples` raw sample bytes starting at byte offset
    /// `off_samples`. Short reads past end of file return as many samples as
    /// were available rather than erroring, matching the engine's own
    /// silent-truncation behavior at buffer boundaries (§7).
    pub fn read_samples(&self, off_samples: usize, num_samples: usize) -> Result<Vec<u8>, Box<dyn Error>> {
        let file = File::open(&self.file_path)?;
        let mut reader = BufReader::with_capacity(num_samples, &file);
        reader.seek(SeekFrom::Start(off_samples as u64))?;

        let ts = Instant::now();
        let mut samples = Vec::with_capacity(num_samples);

        loop {
            let buf = reader.fill_buf()?;
            let len = buf.len();
            if len == 0 {
                break;
            }
            let take = len.min(num_samples - samples.len());
            samples.extend_from_slice(&buf[..take]);
            reader.consume(take);
            if samples.len() >= num_samples {
                break;
            }
        }

        log::debug!(
            "read_samples: off_samples={off_samples} num_samples={num_samples} got={} in {} us",
            samples.len(),
            ts.elapsed().as_micros()
        );
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_back_written_bytes() {
        let mut path = std::env::temp_dir();
        path.push("ae_recording_test.bin");
        {
            let mut f = File::create(&path).unwrap();
            f.write_all(&[1, 2, 3, 4, 5]).unwrap();
        }
        let rec = SampleRecording::new(path.clone()).unwrap();
        let samples = rec.read_samples(1, 3).unwrap();
        assert_eq!(samples, vec![2, 3, 4]);
        let _ = std::fs::remove_file(&path);
    }
}
