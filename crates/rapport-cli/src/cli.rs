//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Rapport CLI - Encode, inspect, and interpret relationship keys.
#[derive(Debug, Parser)]
#[command(name = "rapport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Repair malformed keys with defaults instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (keys only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode a relationship state into a key
    Encode(EncodeArgs),

    /// Parse a key and display its dimensions
    Parse(ParseArgs),

    /// Apply change signals to a key, producing the next key
    Update(UpdateArgs),

    /// Compress a key history into one SuperKey
    Compress(CompressArgs),

    /// Read a key back as human phrases
    Interpret(InterpretArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the encode command.
///
/// Every dimension is optional; omitted ones take their documented default.
/// A trailing trend glyph on a value is honored (e.g. `--trust 🔒🔒📈`).
#[derive(Debug, Default, Parser)]
pub struct EncodeArgs {
    /// Topic glyphs
    #[arg(long)]
    pub topic: Option<String>,

    /// Approach glyphs
    #[arg(long)]
    pub approach: Option<String>,

    /// Goal glyphs
    #[arg(long)]
    pub goal: Option<String>,

    /// Tone glyphs
    #[arg(long)]
    pub tone: Option<String>,

    /// Context glyphs
    #[arg(long)]
    pub context: Option<String>,

    /// Trust glyphs
    #[arg(long)]
    pub trust: Option<String>,

    /// Style glyphs
    #[arg(long)]
    pub style: Option<String>,

    /// Humor glyphs
    #[arg(long)]
    pub humor: Option<String>,

    /// Collaboration glyphs
    #[arg(long)]
    pub collab: Option<String>,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Key string (regular or SuperKey)
    pub key: String,
}

/// Arguments for the update command.
#[derive(Debug, Parser)]
pub struct UpdateArgs {
    /// Key to update
    pub key: String,

    /// Trend delta for one dimension (format: dimension=direction)
    ///
    /// Directions: increase, decrease, no-change, oscillating, unknown.
    #[arg(short, long = "delta", value_name = "DIM=DELTA")]
    pub deltas: Vec<String>,

    /// Replacement glyphs for one dimension (format: dimension=glyphs)
    #[arg(short, long = "set", value_name = "DIM=GLYPHS")]
    pub sets: Vec<String>,
}

/// Arguments for the compress command.
#[derive(Debug, Parser)]
pub struct CompressArgs {
    /// History keys, oldest first
    pub keys: Vec<String>,

    /// Read keys from file (one per line)
    #[arg(long)]
    pub file: Option<String>,

    /// Read keys from stdin (one per line)
    #[arg(long)]
    pub stdin: bool,

    /// Ratio literal for the SuperKey envelope
    #[arg(short, long)]
    pub ratio: Option<u32>,
}

/// Arguments for the interpret command.
#[derive(Debug, Parser)]
pub struct InterpretArgs {
    /// Key string (regular or SuperKey)
    pub key: String,

    /// Lexicon TOML file overriding the built-in phrasing
    #[arg(short, long)]
    pub lexicon: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
