//! cornerslide -- rules engine for a corner-start sliding-piece board game.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
//!
//! Usage:
//!   cornerslide [--config FILE]

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use cornerslide::config::{load_config, EngineConfig};
use cornerslide::engine::Engine;
use cornerslide::protocol::parser::{parse_command, Command};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_usage() {
    eprintln!("Usage: cornerslide [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    JSON engine configuration");
    eprintln!("  --help           Show this help");
}

/// Runs the protocol loop until `quit` or end of input.
fn run<R: BufRead, W: Write>(engine: &mut Engine, input: R, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Hello => engine.handle_hello(out)?,
            Command::IsReady => engine.handle_isready(out)?,
            Command::SetOption { name, value } => {
                if let Err(e) = engine.set_option(&name, value.as_deref()) {
                    error!("setoption: {}", e);
                }
            }
            Command::NewGame => {
                engine.new_game();
                engine.handle_board(out)?;
            }
            Command::Position { encoded } => {
                if let Err(e) = engine.set_position(&encoded) {
                    error!("position: {}", e);
                }
            }
            Command::Board => engine.handle_board(out)?,
            Command::Json => engine.handle_json(out)?,
            Command::Paths { cell } => engine.handle_paths(&cell, out)?,
            Command::Targets { cell } => engine.handle_targets(&cell, out)?,
            Command::Hints => engine.handle_hints(out)?,
            Command::Move { from, to } => engine.handle_move(&from, &to, out)?,
            Command::Quit => break,
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let mut config = EngineConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    eprintln!("--config requires a file path");
                    return ExitCode::FAILURE;
                };
                config = match load_config(Path::new(path)) {
                    Ok(c) => c,
                    Err(e) => {
                        eprintln!("{}", e);
                        return ExitCode::FAILURE;
                    }
                };
            }
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                return ExitCode::FAILURE;
            }
        }
        i += 1;
    }

    let mut engine = Engine::new(config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match run(&mut engine, stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("i/o error: {}", e);
            ExitCode::FAILURE
        }
    }
}
