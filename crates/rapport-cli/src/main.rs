//! Rapport CLI - Command-line interface for the relationship key codec.

use clap::Parser;
use rapport_cli::commands;
use rapport_cli::repl;
use rapport_cli::{Cli, Command, Config, Formatter};
use rapport_codec::{CodecConfig, ParseMode};
use tracing::Level;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> rapport_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (log to stderr, keeping stdout clean for output)
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Codec configuration: the flag wins over the config file
    let mode = if cli.lenient || config.settings.lenient {
        ParseMode::Lenient
    } else {
        ParseMode::Strict
    };
    let codec = CodecConfig {
        mode,
        ratio: config.settings.ratio,
    };

    // Handle commands
    match cli.command {
        None | Some(Command::Repl) => {
            // Enter REPL mode
            repl::run_repl(&config, &codec, &formatter)?;
        }
        Some(Command::Encode(args)) => {
            commands::execute_encode(args, &formatter)?;
        }
        Some(Command::Parse(args)) => {
            commands::execute_parse(args, &codec, &formatter)?;
        }
        Some(Command::Update(args)) => {
            commands::execute_update(args, &codec, &formatter)?;
        }
        Some(Command::Compress(args)) => {
            commands::execute_compress(args, &codec, &formatter)?;
        }
        Some(Command::Interpret(args)) => {
            commands::execute_interpret(args, &config, &formatter)?;
        }
    }

    Ok(())
}
