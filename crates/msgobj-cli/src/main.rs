//! `msgobj` CLI: check, format and convert message text from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the canonical form of every message on stdin
//! echo 'Login { user = "alice" }' | msgobj fmt
//!
//! # Validate a file and summarize what it holds
//! msgobj check -i capture.msg
//!
//! # Convert one message to pretty-printed JSON
//! msgobj json -i state.msg -o state.json
//!
//! # Tighter nesting limit, with parser diagnostics on stderr
//! msgobj --max-depth 32 --log-level debug check -i untrusted.msg
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use msgobj_core::{from_str_with_options, Message, ParseOptions, Tokenizer};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "msgobj", version, about = "Check, format and convert msgobj messages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum container nesting accepted by the parser
    #[arg(long, global = true, default_value_t = msgobj_core::parser::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Log filter used when RUST_LOG is not set (e.g. "debug", "msgobj_core=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print each message in canonical form, one per line
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate messages and print a one-line summary of each
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert a single message to pretty-printed JSON
    Json {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let options = ParseOptions::new().with_max_depth(cli.max_depth);

    match cli.command {
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let mut out = String::new();
            for (i, message) in parse_all(&text, options)?.iter().enumerate() {
                let canonical = msgobj_core::to_string(message)
                    .with_context(|| format!("Failed to write message {}", i + 1))?;
                out.push_str(&canonical);
                out.push('\n');
            }
            write_output(output.as_deref(), &out)?;
        }
        Commands::Check { input, output } => {
            let text = read_input(input.as_deref())?;
            let messages = parse_all(&text, options)?;
            if messages.is_empty() {
                anyhow::bail!("No message found in input");
            }
            let mut out = String::new();
            for message in &messages {
                out.push_str(&summarize(message));
                out.push('\n');
            }
            write_output(output.as_deref(), &out)?;
        }
        Commands::Json { input, output } => {
            let text = read_input(input.as_deref())?;
            let message =
                from_str_with_options(&text, options).context("Failed to parse message")?;
            let mut pretty = serde_json::to_string_pretty(&message)?;
            pretty.push('\n');
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parse every message in `text`, in order.
fn parse_all(text: &str, options: ParseOptions) -> Result<Vec<Message>> {
    let mut parser = msgobj_core::Parser::with_options(Tokenizer::new(text), options);
    let mut messages = Vec::new();
    while let Some(message) = parser
        .next_message()
        .with_context(|| format!("Failed to parse message {}", messages.len() + 1))?
    {
        messages.push(message);
    }
    debug!(count = messages.len(), "parsed input");
    Ok(messages)
}

/// One-line description such as `ok: object Login (2 attributes)`.
fn summarize(message: &Message) -> String {
    let name = message.name().unwrap_or("(anonymous)");
    match message {
        Message::Object(obj) => {
            let noun = if obj.len() == 1 { "attribute" } else { "attributes" };
            format!("ok: object {name} ({} {noun})", obj.len())
        }
        Message::Array(arr) => {
            let noun = if arr.len() == 1 { "element" } else { "elements" };
            format!("ok: array {name} ({} {noun})", arr.len())
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
