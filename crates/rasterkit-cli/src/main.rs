//! rasterkit - inspect pixel formats and decode component streams
//!
//! Thin front end over `rasterkit-core`: lists well-known formats, resolves
//! channel storage kinds and decodes raw component values into a buffer.

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rasterkit")]
#[command(author, version, about = "Inspect pixel formats and decode component streams")]
#[command(long_about = "
Describe pixel layouts as channel lists and decode flat component streams.

Examples:
  rasterkit formats                              # List well-known formats
  rasterkit resolve uint 10                      # Storage kind for a 10-bit channel
  rasterkit decode -f rgb8 -w 2 -H 1 10 20 30 40 50 60
  rasterkit decode -c r:u10,g:u10,b:u10,a:u2 -w 1 -H 1 1023 512 0 3
  RUST_LOG=trace rasterkit decode -f alpha8 -w 1 -H 1 128
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List well-known pixel formats
    #[command(visible_alias = "f")]
    Formats(FormatsArgs),

    /// Resolve a binary form and bit width to a storage kind
    #[command(visible_alias = "r")]
    Resolve(ResolveArgs),

    /// Decode a component stream into a pixel buffer and print it
    #[command(visible_alias = "d")]
    Decode(DecodeArgs),
}

#[derive(Args)]
struct FormatsArgs {
    /// Also list each format's channels
    #[arg(short, long)]
    channels: bool,
}

/// Numeric family of a binary form.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Family {
    /// Unsigned integer
    Uint,
    /// Signed integer
    Int,
    /// Floating point
    Float,
}

#[derive(Args)]
struct ResolveArgs {
    /// Numeric family
    family: Family,

    /// Requested bit width (0 picks the widest kind)
    bits: u32,
}

#[derive(Args)]
struct DecodeArgs {
    /// Well-known format name (see `rasterkit formats`)
    #[arg(short, long, conflicts_with = "channels", required_unless_present = "channels")]
    format: Option<String>,

    /// Ad hoc interleaved layout, e.g. "r:u8,g:u8,b:u8"
    #[arg(short, long)]
    channels: Option<String>,

    /// Buffer width in pixels
    #[arg(short, long)]
    width: u32,

    /// Buffer height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    /// Print normalized values next to raw ones
    #[arg(short, long)]
    normalized: bool,

    /// Raw component values in stream order
    #[arg(allow_negative_numbers = true)]
    values: Vec<String>,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Formats(args) => commands::formats::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Decode(args) => commands::decode::run(args),
    }
}
