//! Terminal front end for the keypad calculator.
//!
//! Every character read is one key press. Whitespace is skipped and keys
//! that are not on the keypad are dropped with a warning.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tenkey::{Calculator, Config, Screen};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "tenkey", version, about = "Four-function keypad calculator")]
struct Cli {
    /// TOML file overriding digit budget and error texts
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Press these keys, print the final screen and exit
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the state transition log as JSON before exiting
    #[arg(long)]
    dump_transitions: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let mut calc = Calculator::with_config(Screen::default(), config);

    let result = match &cli.keys {
        Some(keys) => {
            feed(&mut calc, keys);
            print_screen(calc.display())
        }
        None => run_interactive(&mut calc),
    };
    if let Err(e) = result {
        tracing::error!("Terminal I/O failed: {}", e);
        return ExitCode::FAILURE;
    }

    if let Some(elapsed) = calc.transitions().duration() {
        tracing::info!(
            "Session made {} transitions over {:?}",
            calc.transitions().len(),
            elapsed
        );
    }

    if cli.dump_transitions {
        match serde_json::to_string_pretty(calc.transitions()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize transitions: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn run_interactive(calc: &mut Calculator<Screen>) -> io::Result<()> {
    print_screen(calc.display())?;
    for line in io::stdin().lock().lines() {
        feed(calc, &line?);
        print_screen(calc.display())?;
    }
    Ok(())
}

fn feed(calc: &mut Calculator<Screen>, keys: &str) {
    let mut buf = [0u8; 4];
    for ch in keys.chars().filter(|c| !c.is_whitespace()) {
        if !calc.press(ch.encode_utf8(&mut buf)) {
            tracing::warn!("Ignoring key {:?}", ch);
        }
    }
}

fn print_screen(screen: &Screen) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{screen}")?;
    out.flush()
}
