use cache_replay::generator::{ScriptConfig, ScriptGenerator};
use clap::Parser;
use std::path::PathBuf;

/// Script generator for cache replays
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of operations
    #[arg(long, default_value = "10000")]
    ops: usize,

    /// Number of unique keys
    #[arg(long, default_value = "1000")]
    keys: usize,

    /// Percentage of keys that are hot (default: 20%)
    #[arg(long, default_value = "20")]
    hot_keys: u8,

    /// Percentage of traffic going to hot keys (default: 80%)
    #[arg(long, default_value = "80")]
    hot_traffic: u8,

    /// Percentage of operations that are puts (default: 30%)
    #[arg(long, default_value = "30")]
    put_ratio: u8,

    /// Insert a resize every N operations (0 disables)
    #[arg(long, default_value = "0")]
    resize_every: usize,

    /// Smallest capacity used by generated resizes
    #[arg(long, default_value = "100")]
    min_capacity: usize,

    /// Largest capacity used by generated resizes
    #[arg(long, default_value = "100")]
    max_capacity: usize,

    /// RNG seed for reproducible scripts
    #[arg(long)]
    seed: Option<u64>,

    /// Output script file
    #[arg(short, long, default_value = "replay.script")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = ScriptConfig {
        operations: args.ops,
        unique_keys: args.keys,
        hot_keys_percent: args.hot_keys,
        hot_traffic_percent: args.hot_traffic,
        put_percent: args.put_ratio,
        resize_every: args.resize_every,
        min_capacity: args.min_capacity,
        max_capacity: args.max_capacity,
        seed: args.seed,
    };

    println!("Generating script:");
    println!("  Operations: {}", config.operations);
    println!("  Unique keys: {}", config.unique_keys);
    println!(
        "  Hot keys: {}% receiving {}% of traffic",
        config.hot_keys_percent, config.hot_traffic_percent
    );
    println!("  Puts: {}%", config.put_percent);
    if config.resize_every > 0 {
        println!(
            "  Resize every {} ops to {}..={}",
            config.resize_every, config.min_capacity, config.max_capacity
        );
    }

    let generator = ScriptGenerator::new(config)?;
    let summary = generator.generate(&args.output)?;

    println!(
        "Wrote {} lines to {} (seed {})",
        summary.lines,
        args.output.display(),
        summary.seed
    );
    Ok(())
}
