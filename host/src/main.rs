//! LCG host CLI: hex dumps, value streams and checkpoints for a seeded generator.
//!
//! Usage:
//!   cargo run -p host -- dump --seed 0xDEADBEEF
//!   RUST_LOG=debug cargo run -p host -- checkpoint --seed 42 --skip 1000 --out state.json

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use host::{
    dump_rows, init_tracing, seed_to_hex, stream_values, Checkpoint, DUMP_ROWS_DEFAULT,
    STREAM_COUNT_DEFAULT,
};
use lcg_core::parse_seed;

#[derive(Parser, Debug)]
#[command(name = "lcg")]
#[command(about = "Deterministic 64-bit LCG: dump, stream and checkpoint generator output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print raw 64-bit states as big-endian hex bytes
    Dump {
        #[arg(long, value_parser = parse_seed)]
        seed: u64,
        #[arg(long, default_value_t = DUMP_ROWS_DEFAULT)]
        rows: usize,
    },
    /// Print 32-bit outputs, one per line
    Stream {
        #[arg(long, value_parser = parse_seed)]
        seed: u64,
        #[arg(long, default_value_t = STREAM_COUNT_DEFAULT)]
        count: usize,
        /// Reinterpret outputs as signed i32
        #[arg(long, default_value_t = false)]
        signed: bool,
    },
    /// Skip ahead and save the generator state as JSON
    Checkpoint {
        #[arg(long, value_parser = parse_seed)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        skip: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Continue a stream from a saved checkpoint
    Resume {
        #[arg(long)]
        from: PathBuf,
        #[arg(long, default_value_t = STREAM_COUNT_DEFAULT)]
        count: usize,
        #[arg(long, default_value_t = false)]
        signed: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Dump { seed, rows } => {
            tracing::debug!(seed = %seed_to_hex(seed), rows, "dump");
            let mut rng = lcg_core::init(seed);
            for row in dump_rows(&mut rng, rows) {
                println!("{row}");
            }
        }
        Commands::Stream {
            seed,
            count,
            signed,
        } => {
            tracing::debug!(seed = %seed_to_hex(seed), count, signed, "stream");
            let mut rng = lcg_core::init(seed);
            for value in stream_values(&mut rng, count, signed) {
                println!("{value}");
            }
        }
        Commands::Checkpoint { seed, skip, out } => {
            let checkpoint = Checkpoint::capture(seed, skip);
            if let Some(path) = out {
                checkpoint.write(&path)?;
                println!("seed={}", seed_to_hex(checkpoint.seed));
                println!("skipped={}", checkpoint.skipped);
                println!("state={:#018x}", checkpoint.generator.state());
                println!("output={}", path.display());
            } else {
                let encoded = checkpoint.to_json()?;
                println!("{}", String::from_utf8_lossy(&encoded));
            }
        }
        Commands::Resume {
            from,
            count,
            signed,
        } => {
            let checkpoint = Checkpoint::read(&from)?;
            let mut rng = checkpoint.generator;
            for value in stream_values(&mut rng, count, signed) {
                println!("{value}");
            }
        }
    }

    Ok(())
}
