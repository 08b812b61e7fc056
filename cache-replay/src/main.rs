use cache_replay::error::ReplayError;
use cache_replay::generator::{ScriptConfig, ScriptGenerator};
use cache_replay::runner::ReplayRunner;
use cache_replay::script::ScriptReader;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Replay operation scripts against the resizable LRU cache
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a script and print the transcript
    Run {
        /// Script file, one operation per line
        #[arg(short, long, value_name = "FILE")]
        script: PathBuf,

        /// Initial cache capacity (scripts usually start with `resize`)
        #[arg(short, long, default_value = "0")]
        capacity: usize,

        /// Export replay counters and cache metrics to a CSV file
        #[arg(long, value_name = "PATH")]
        output_csv: Option<PathBuf>,

        /// Only print the summary, not the per-operation transcript
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate a random script
    Generate(GenerateArgs),
}

/// Options shared with the standalone `trace-generator` binary
#[derive(Args, Debug)]
struct GenerateArgs {
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

impl From<&GenerateArgs> for ScriptConfig {
    fn from(args: &GenerateArgs) -> Self {
        ScriptConfig {
            operations: args.ops,
            unique_keys: args.keys,
            hot_keys_percent: args.hot_keys,
            hot_traffic_percent: args.hot_traffic,
            put_percent: args.put_ratio,
            resize_every: args.resize_every,
            min_capacity: args.min_capacity,
            max_capacity: args.max_capacity,
            seed: args.seed,
        }
    }
}

fn main() -> ExitCode {
    // Defaults to "cache_replay=info", can be overridden with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cache_replay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            script,
            capacity,
            output_csv,
            quiet,
        } => run_script(script, capacity, output_csv, quiet),
        Commands::Generate(args) => generate_script(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_script(
    script: PathBuf,
    capacity: usize,
    output_csv: Option<PathBuf>,
    quiet: bool,
) -> Result<(), ReplayError> {
    let reader = ScriptReader::open(&script)?;
    let report = ReplayRunner::new(capacity).run(reader, |step| {
        if !quiet {
            for line in step.transcript() {
                println!("{line}");
            }
        }
    })?;

    report.print_summary();

    if let Some(csv_path) = output_csv {
        report.export_csv(&csv_path)?;
        println!("\nResults exported to: {}", csv_path.display());
    }
    Ok(())
}

fn generate_script(args: &GenerateArgs) -> Result<(), ReplayError> {
    let generator = ScriptGenerator::new(ScriptConfig::from(args))?;
    let summary = generator.generate(&args.output)?;
    println!(
        "Wrote {} lines to {} ({} puts, {} lookups, {} resizes, seed {})",
        summary.lines,
        args.output.display(),
        summary.puts,
        summary.lookups,
        summary.resizes,
        summary.seed
    );
    Ok(())
}
