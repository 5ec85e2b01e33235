//! # Lyre CLI
//!
//! Runs Lyre source files, evaluates one-shot expressions, emits token or
//! AST JSON for tooling, or starts an interactive REPL.

mod config;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use lyre_lang::{Interpreter, Value};

use crate::config::ReplConfig;

#[derive(Debug, Parser)]
#[command(name = "lyre", version, about = "The Lyre language interpreter")]
struct Cli {
    /// Source file to execute; starts a REPL when omitted.
    file: Option<PathBuf>,

    /// Evaluate a single expression and print its value.
    #[arg(short = 'e', long = "eval", value_name = "EXPR", conflicts_with = "file")]
    eval: Option<String>,

    /// Print the token stream as JSON instead of evaluating.
    #[arg(long)]
    emit_tokens: bool,

    /// Print the parsed AST as JSON instead of evaluating.
    #[arg(long, conflicts_with = "emit_tokens")]
    emit_ast: bool,

    /// Path to a TOML configuration file (default: ./lyre.toml if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ReplConfig::load(cli.config.as_deref())?;
    let interpreter = Interpreter::new()?;

    if let Some(source) = cli.eval.as_deref() {
        return run_source(&interpreter, source, &cli, false);
    }
    if let Some(path) = cli.file.as_ref() {
        info!("running {}", path.display());
        let source = fs::read_to_string(path)?;
        return run_source(&interpreter, &source, &cli, true);
    }
    repl(&interpreter, &config)
}

/// Evaluate `source`, or emit its tokens/AST as JSON when requested.
/// `program` selects whole-program parsing (files) over the
/// single-expression rule (`--eval`).
fn run_source(
    interpreter: &Interpreter,
    source: &str,
    cli: &Cli,
    program: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if cli.emit_tokens {
        let tokens = interpreter.tokenize(source)?;
        println!("{}", serde_json::to_string_pretty(&tokens)?);
        return Ok(());
    }
    if cli.emit_ast {
        if program {
            let program = interpreter.parse_program(source)?;
            println!("{}", serde_json::to_string_pretty(&program)?);
        } else {
            let expr = interpreter.parse(source)?;
            println!("{}", serde_json::to_string_pretty(&expr)?);
        }
        return Ok(());
    }

    let value = if program {
        interpreter.interpret_program(source)?
    } else {
        interpreter.interpret(source)?
    };
    if !matches!(value, Value::Unit) {
        println!("{value}");
    }
    Ok(())
}

/// One expression per line; errors are reported without ending the
/// session; EOF exits.
fn repl(interpreter: &Interpreter, config: &ReplConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.show_banner {
        println!("lyre {}", env!("CARGO_PKG_VERSION"));
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let source = line.trim();
        if source.is_empty() {
            continue;
        }

        match interpreter.interpret(source) {
            Ok(Value::Unit) if !config.print_unit => {}
            Ok(value) => println!("{value}"),
            Err(error) => eprintln!("error: {error}"),
        }
    }
    Ok(())
}
