use std::path::PathBuf;
use std::time::Instant;
use std::sync::Arc;

use colored::Colorize;
use structopt::StructOpt;

use gnss_acq_engine::config::{ChannelConfig, PrnSelectConfig};
use gnss_acq_engine::constants::{ADDR_OFFSET_AE_BUFFER_CONTROL, ADDR_OFFSET_AE_CONTROL, AE_BUFFER_SIZE, DO_ACQUIRE_MASK, START_FILL_MASK};
use gnss_acq_engine::recording::SampleRecording;
use gnss_acq_engine::registers::AcquisitionEngine;

const NUM_GPS_SATS: u8 = 32;

#[derive(StructOpt)]
#[structopt(name = "gnss-acq-engine", about = "GNSS acquisition engine harness")]
struct Options {
    #[structopt(short = "f", long, default_value = "resources/capture.bin")]
    file: PathBuf,
    #[structopt(long, default_value = "0")]
    off_samples: usize,
    #[structopt(long, default_value = "")]
    sats: String,
    #[structopt(long, default_value = "21")]
    stride_number: u32,
    #[structopt(long, default_value = "1000")]
    stride_interval: i32,
    #[structopt(long, default_value = "10")]
    coherent_number: u32,
    #[structopt(long, default_value = "4")]
    non_coherent_number: u32,
    #[structopt(long, default_value = "3")]
    code_span: u32,
    #[structopt(long, short = "v")]
    verbose: bool,
}

fn sat_list(sats: &str) -> Vec<u8> {
    if sats.is_empty() {
        (1..=NUM_GPS_SATS).collect()
    } else {
        sats.split(',').map(|s| s.parse::<u8>().unwrap()).collect()
    }
}

fn main() -> std::io::Result<()> {
    let opt = Options::from_args();
    if opt.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }

    let recording = SampleRecording::new(opt.file.clone()).map_err(std::io::Error::other)?;
    let samples = recording
        .read_samples(opt.off_samples, AE_BUFFER_SIZE)
        .map_err(std::io::Error::other)?;

    let mut engine = AcquisitionEngine::with_memory_table(Arc::from(Vec::<u32>::new()));
    engine.set_reg_value(ADDR_OFFSET_AE_BUFFER_CONTROL, START_FILL_MASK);
    for &byte in samples.iter() {
        engine.write_sample(byte);
    }

    let svids = sat_list(&opt.sats);
    for (i, &svid) in svids.iter().enumerate() {
        let cfg = ChannelConfig {
            stride_number: opt.stride_number,
            coherent_number: opt.coherent_number,
            non_coherent_number: opt.non_coherent_number,
            peak_ratio_th: 0,
            early_terminate: true,
            center_freq: 0,
            svid,
            prn_select: PrnSelectConfig::Lfsr,
            code_span: opt.code_span,
            read_address: 0,
            dft_freq: 50,
            stride_interval: opt.stride_interval,
        };
        let words = cfg.encode();
        for (w, value) in words.iter().enumerate() {
            engine.set_reg_value(0x1000 + ((i * 32 + w) * 4) as u32, *value);
        }
    }

    let estimate_ms = engine.get_ae_process_time();
    println!(
        "{} channels configured, estimated completion: {} ms",
        svids.len().to_string().bold(),
        estimate_ms
    );

    let ts = Instant::now();
    engine.set_reg_value(ADDR_OFFSET_AE_CONTROL, (svids.len() as u32 & 0x3F) | DO_ACQUIRE_MASK);
    println!("acquisition duration: {} ms", ts.elapsed().as_millis());

    for (i, &svid) in svids.iter().enumerate() {
        let status = engine.get_reg_value(0x1000 + ((i * 32 + 4) * 4) as u32);
        let success = status & (1 << 31) != 0;
        let line = format!("PRN{svid:02}: success={success}");
        if success {
            println!("{}", line.green());
        } else {
            println!("{line}");
        }
    }

    Ok(())
}
