use anyhow::Context;
use clap::{Parser, Subcommand};
use festival_codec::{DecodeOptions, Festival, decode_with, encode_to_string, render};
use std::io::Read;
use tracing_subscriber::EnvFilter;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "festival-codec")]
#[command(about = "Inspect festival records exchanged with the front-end", long_about = None)]
struct Cli {
    /// Log decode events (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a payload and print it (validates while decoding).
    Decode {
        /// Payload file; stdin when omitted.
        #[arg(long)]
        input: Option<String>,

        /// Fill absent fields with defaults instead of failing.
        #[arg(long)]
        permissive: bool,

        /// Print canonical JSON instead of a summary.
        #[arg(long)]
        json: bool,
    },
    /// Build a record from typed fields and print its canonical JSON.
    Encode {
        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        days: i64,

        #[arg(long = "type", default_value = "")]
        kind: String,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_payload(input: Option<&str>) -> Result<String> {
    match input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("read payload file {}", path))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("read payload from stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Decode {
            input,
            permissive,
            json,
        } => {
            let options = if permissive {
                DecodeOptions::permissive()
            } else {
                DecodeOptions::strict()
            };

            let text = read_payload(input.as_deref())?;
            let source = input.as_deref().unwrap_or("<stdin>");
            let festival = decode_with(text.trim(), &options)
                .with_context(|| format!("decode festival payload from {}", source))?;

            if json {
                println!("{}", encode_to_string(&festival));
            } else {
                println!("{}", render::render_summary(&festival));
            }
        }
        Commands::Encode { name, days, kind } => {
            let festival = Festival::new(name, days, kind);
            println!("{}", encode_to_string(&festival));
        }
    }

    Ok(())
}
