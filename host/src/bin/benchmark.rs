//! Benchmark binary: draws 32-bit values in a tight loop and reports throughput.
//!
//! Usage:
//!   cargo run --release --bin benchmark -- --seed 42

use clap::Parser;
use host::{init_tracing, run_benchmark, seed_to_hex, BENCH_ITERATIONS_DEFAULT};
use lcg_core::parse_seed;

#[derive(Parser)]
#[command(name = "lcg-benchmark")]
#[command(about = "Measure raw next_u32 throughput of the LCG")]
struct Args {
    #[arg(long, value_parser = parse_seed)]
    seed: u64,
    #[arg(long, default_value_t = BENCH_ITERATIONS_DEFAULT)]
    iterations: u64,
}

fn main() {
    init_tracing();

    let args = Args::parse();

    println!("Running {} iterations...", args.iterations);
    let report = run_benchmark(args.seed, args.iterations);

    println!();
    println!("=== BENCHMARK RESULTS ===");
    println!("  Seed:          {}", seed_to_hex(report.seed));
    println!("  Iterations:    {}", report.iterations);
    println!("  Last value:    {}", report.last_value);
    println!("  Final state:   {:#018x}", report.final_state);
    println!("  Wall time:     {:.3}s", report.elapsed.as_secs_f64());
    println!("  Values/sec:    {:.0}", report.values_per_sec());
}
