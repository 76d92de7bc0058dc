use std::{
    fs,
    hint::black_box,
    path::Path,
    time::{Duration, Instant},
};

use anyhow::{Context, Result};
use lcg_core::Lcg;
use serde::{Deserialize, Serialize};

pub const DUMP_ROWS_DEFAULT: usize = 24;
pub const STREAM_COUNT_DEFAULT: usize = 10;
pub const BENCH_ITERATIONS_DEFAULT: u64 = 1_000_000_000;

pub fn seed_to_hex(seed: u64) -> String {
    format!("{seed:#018x}")
}

/// Big-endian bytes of one 64-bit state, e.g. `91 77 8A ED 87 EE 5E B1`.
pub fn format_row(value: u64) -> String {
    value
        .to_be_bytes()
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn dump_rows(rng: &mut Lcg, rows: usize) -> Vec<String> {
    (0..rows).map(|_| format_row(rng.step())).collect()
}

pub fn stream_values(rng: &mut Lcg, count: usize, signed: bool) -> Vec<String> {
    (0..count)
        .map(|_| {
            if signed {
                rng.next_i32().to_string()
            } else {
                rng.next_u32().to_string()
            }
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub seed: u64,
    pub skipped: u64,
    pub generator: Lcg,
}

impl Checkpoint {
    pub fn capture(seed: u64, skip: u64) -> Self {
        let mut generator = lcg_core::init(seed);
        generator.discard(skip);
        Self {
            seed,
            skipped: skip,
            generator,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).context("failed to serialize checkpoint json")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let encoded = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed creating {}", parent.display()))?;
        }
        fs::write(path, encoded)
            .with_context(|| format!("failed writing checkpoint: {}", path.display()))?;
        tracing::info!(path = %path.display(), state = self.generator.state(), "checkpoint written");
        Ok(())
    }

    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("failed reading checkpoint: {}", path.display()))?;
        let checkpoint: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("invalid checkpoint json: {}", path.display()))?;
        tracing::debug!(
            seed = checkpoint.seed,
            skipped = checkpoint.skipped,
            "checkpoint loaded"
        );
        Ok(checkpoint)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BenchmarkReport {
    pub seed: u64,
    pub iterations: u64,
    pub last_value: u32,
    pub final_state: u64,
    pub elapsed: Duration,
}

impl BenchmarkReport {
    pub fn values_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.iterations as f64 / secs
        } else {
            0.0
        }
    }
}

pub fn run_benchmark(seed: u64, iterations: u64) -> BenchmarkReport {
    let mut rng = lcg_core::init(seed);
    let mut last_value = 0u32;

    tracing::debug!(seed, iterations, "benchmark start");
    let start = Instant::now();
    for _ in 0..iterations {
        last_value = black_box(rng.next_u32());
    }
    let elapsed = start.elapsed();
    tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "benchmark done");

    BenchmarkReport {
        seed,
        iterations,
        last_value,
        final_state: rng.state(),
        elapsed,
    }
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
