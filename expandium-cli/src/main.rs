#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

//! # Expandium CLI
//!
//! A demo client for the expandium rewriters, running the stringify,
//! bridging and timing macros end to end.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use expandium::{logged, stringify, take_time};

/// Exit codes for different error conditions
mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const RUNTIME_ERROR: i32 = 2;
}

/// Command-line interface for the expandium demo client
#[derive(Parser)]
#[command(
    name = "expandium",
    version,
    author,
    about = "Demo client for the expandium source rewriters",
    long_about = "expandium-cli runs the three expandium rewriters end to end: the stringify \
expression macro, the callback-to-async bridging attribute, and the timing attribute.",
    after_help = "EXAMPLES:
  # Run every demo
  $ expandium-cli

  # Only the bridged async request
  $ expandium-cli bridge --path https://example.net

  # Timed workload with a larger iteration count
  $ expandium-cli timing -n 5000000

  # Machine-readable summary
  $ expandium-cli all --json"
)]
struct Cli {
    /// Which demo to run
    #[arg(value_enum, default_value = "all", help = "Demo to run")]
    demo: DemoValue,

    /// Path fed to the bridged request demo
    #[arg(
        short = 'p',
        long,
        default_value = "https://example.net",
        help = "Path handed to the bridged request"
    )]
    path: String,

    /// Iteration count for the timed workload
    #[arg(
        short = 'n',
        long,
        default_value = "100000",
        help = "Iteration count for the timed workload"
    )]
    iterations: u64,

    /// Output a JSON summary instead of formatted text
    #[arg(long, help = "Output the demo summary in JSON format")]
    #[cfg(feature = "json")]
    json: bool,

    /// Enable verbose output
    #[arg(short = 'v', long, help = "Enable verbose output with run information")]
    verbose: bool,

    /// Suppress non-error output
    #[arg(short = 'q', long, help = "Suppress non-error output (quiet mode)")]
    quiet: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    no_color: bool,

    /// Force colored output
    #[arg(long, help = "Force colored output even when not a terminal")]
    force_color: bool,
}

/// Demo selection values for the CLI
#[derive(Clone, Debug, ValueEnum)]
enum DemoValue {
    /// Expression-to-source-text capture
    Stringify,
    /// Callback-to-async bridging
    Bridge,
    /// Wall-clock timing instrumentation
    Timing,
    /// Every demo in sequence
    All,
}

/// Callback-style request bridged into `async fn request(path) -> String`
#[logged("request")]
fn request(path: String, completion: impl FnOnce(String)) {
    completion(path);
}

/// Timed workload mirroring the instrumented reduce
#[take_time("[*] ")]
fn reduce(limit: u64) -> u64 {
    (0..limit).sum()
}

/// Main application entry point
fn main() {
    std::process::exit(match run() {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            determine_exit_code(&e)
        }
    });
}

/// Determine the appropriate exit code based on the error
fn determine_exit_code(error: &anyhow::Error) -> i32 {
    if error.downcast_ref::<std::io::Error>().is_some() {
        exit_code::RUNTIME_ERROR
    } else {
        exit_code::GENERAL_ERROR
    }
}

/// Run the main application logic
fn run() -> Result<()> {
    let cli = Cli::parse();

    configure_color(&cli);

    let start_time = std::time::Instant::now();
    let mut summaries = Vec::new();

    if matches!(cli.demo, DemoValue::Stringify | DemoValue::All) {
        summaries.push(run_stringify_demo(&cli));
    }
    if matches!(cli.demo, DemoValue::Bridge | DemoValue::All) {
        summaries.push(run_bridge_demo(&cli)?);
    }
    if matches!(cli.demo, DemoValue::Timing | DemoValue::All) {
        summaries.push(run_timing_demo(&cli));
    }

    #[cfg(feature = "json")]
    if cli.json {
        return write_json_summary(&cli, &summaries, start_time.elapsed());
    }

    if cli.verbose && !cli.quiet {
        eprintln!("Demos run: {}", summaries.len());
        eprintln!("Total time: {:?}", start_time.elapsed());
    }

    Ok(())
}

/// Apply the color flags to the global colored-output switch
fn configure_color(cli: &Cli) {
    if cli.no_color {
        colored::control::set_override(false);
    } else if cli.force_color {
        colored::control::set_override(true);
    }
}

/// Run the stringify demo and return its summary line
fn run_stringify_demo(cli: &Cli) -> DemoSummary {
    let a = 17;
    let b = 25;
    let (value, code) = stringify!(a + b);

    if !cli.quiet {
        println!(
            "{} the value {} was produced by the code \"{}\"",
            "stringify".cyan().bold(),
            value,
            code
        );
    }
    DemoSummary {
        demo: "stringify",
        output: format!("({value}, \"{code}\")"),
    }
}

/// Run the bridging demo on a single-threaded runtime
fn run_bridge_demo(cli: &Cli) -> Result<DemoSummary> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let body = runtime.block_on(request(cli.path.clone()));

    if !cli.quiet {
        println!("{} resumed with \"{}\"", "bridge".cyan().bold(), body);
    }
    if cli.verbose && !cli.quiet {
        // The callback form stays reachable next to the async wrapper
        request_with_callback(cli.path.clone(), |value| {
            eprintln!("callback form resumed with \"{value}\"");
        });
    }
    Ok(DemoSummary {
        demo: "bridge",
        output: body,
    })
}

/// Run the timing demo and return its summary line
fn run_timing_demo(cli: &Cli) -> DemoSummary {
    let total = reduce(cli.iterations);

    if !cli.quiet {
        println!(
            "{} reduced {} iterations to {}",
            "timing".cyan().bold(),
            cli.iterations,
            total
        );
    }
    DemoSummary {
        demo: "timing",
        output: total.to_string(),
    }
}

/// Outcome of one demo, kept for the run summary
#[cfg_attr(feature = "json", derive(serde::Serialize))]
struct DemoSummary {
    /// Demo name
    demo: &'static str,
    /// Human-readable result
    output: String,
}

/// Write the JSON summary to stdout
#[cfg(feature = "json")]
fn write_json_summary(
    cli: &Cli,
    summaries: &[DemoSummary],
    elapsed: std::time::Duration,
) -> Result<()> {
    use serde_json::json;

    let result = json!({
        "success": true,
        "demos": summaries,
        "path": cli.path,
        "iterations": cli.iterations,
        "total_time_ms": elapsed.as_millis(),
    });

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
