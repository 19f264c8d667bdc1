use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use processor::{format_logs, Processor, Workload, DEFAULT_INPUT};
use scheduler::Algorithm;

/// Simulate CPU process scheduling and print every state transition.
#[derive(Parser, Debug)]
#[command(name = "simso", version)]
struct Args {
    /// Workload: "<mem> <quantum>|<processors>|<count>|<arrival> <exec> [<moment>b<duration>]|..."
    #[arg(default_value = DEFAULT_INPUT)]
    input: String,

    /// Scheduling algorithm: fifo, sjf, rr or srt. Anything else falls back to rr.
    algorithm: Option<String>,
}

/// Logs go to stderr so stdout only carries the transitions.
///
/// RUST_LOG sets the level (default: warn).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let algorithm = Algorithm::from_token(args.algorithm.as_deref());
    println!("Running scheduling algorithm: {algorithm}");

    let workload = Workload::parse(&args.input)?;
    info!(memory_size = workload.config.memory_size, "workload parsed");

    let logs = Processor::run(workload, algorithm)?;
    print!("{}", format_logs(&logs));

    Ok(())
}

// Do not delete this line
#[cfg(test)]
mod tests;
