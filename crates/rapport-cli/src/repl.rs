//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::cli::{Command, CompressArgs, EncodeArgs, InterpretArgs, ParseArgs, UpdateArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rapport_codec::{CodecConfig, Compressor, Parser};
use rapport_domain::traits::KeyHistory;
use rapport_domain::{Delta, Dimension};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(config: &Config, codec: &CodecConfig, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Rapport REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    // Initialize readline editor
    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    // Load history
    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut session = Session::new();

    loop {
        let prompt = if session.current.is_some() {
            "rapport> "
        } else {
            "rapport (no key)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                // Parse command
                match parse_repl_command(line, session.current.as_deref()) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::History) => {
                        print_session_history(&session, formatter);
                    }
                    Ok(ReplCommand::Show) => {
                        if let Err(e) = show_current(&session, codec, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::CompressSession) => {
                        if let Err(e) = compress_session(&mut session, codec, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Ok(ReplCommand::Command(cmd)) => {
                        if let Err(e) =
                            execute_repl_command(cmd, &mut session, config, codec, formatter)
                        {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    editor.save_history(&history_path).ok();

    Ok(())
}

/// Keys produced or loaded during one REPL session.
struct Session {
    /// Last key produced by encode, update, or compress
    current: Option<String>,
    history: SessionHistory,
}

impl Session {
    fn new() -> Self {
        Self {
            current: None,
            history: SessionHistory { keys: Vec::new() },
        }
    }

    fn remember(&mut self, key: String) {
        self.current = Some(key.clone());
        self.history.push(key);
    }
}

/// In-memory history store backing the session's compress command.
struct SessionHistory {
    keys: Vec<String>,
}

impl SessionHistory {
    fn push(&mut self, key: String) {
        self.keys.push(key);
    }

    fn all(&self) -> &[String] {
        &self.keys
    }
}

impl KeyHistory for SessionHistory {
    type Error = std::convert::Infallible;

    fn keys(&self) -> std::result::Result<Vec<String>, Self::Error> {
        Ok(self.keys.clone())
    }

    fn record(&mut self, key: String) -> std::result::Result<(), Self::Error> {
        self.push(key);
        Ok(())
    }
}

/// REPL command type.
enum ReplCommand {
    Exit,
    Help,
    History,
    Show,
    CompressSession,
    Command(Command),
}

/// Parse a REPL command line.
///
/// Commands that operate on a key fall back to the session's current key
/// when none is given.
fn parse_repl_command(line: &str, current: Option<&str>) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "history" => Ok(ReplCommand::History),
        "show" => Ok(ReplCommand::Show),
        "encode" => parse_encode_command(&parts[1..]),
        "parse" => parse_parse_command(&parts[1..], current),
        "update" => parse_update_command(&parts[1..], current),
        "compress" => parse_compress_command(&parts[1..]),
        "interpret" => parse_interpret_command(&parts[1..], current),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: Command,
    session: &mut Session,
    config: &Config,
    codec: &CodecConfig,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        Command::Encode(args) => {
            let key = commands::execute_encode(args, formatter)?;
            session.remember(key);
        }
        Command::Parse(args) => {
            commands::execute_parse(args, codec, formatter)?;
        }
        Command::Update(args) => {
            let key = commands::execute_update(args, codec, formatter)?;
            session.remember(key);
        }
        Command::Compress(args) => {
            let key = commands::execute_compress(args, codec, formatter)?;
            session.remember(key);
        }
        Command::Interpret(args) => {
            commands::execute_interpret(args, config, formatter)?;
        }
        Command::Repl => {}
    }

    Ok(())
}

/// Compress every key recorded this session into one SuperKey.
fn compress_session(
    session: &mut Session,
    codec: &CodecConfig,
    formatter: &Formatter,
) -> Result<()> {
    let super_key = Compressor::new(codec.clone()).compress_history(&session.history)?;

    let state = Parser::new(codec.clone()).parse(&super_key)?;
    println!("{}", formatter.format_state(&state, &super_key)?);

    session.remember(super_key);
    Ok(())
}

/// Display the session's current key as a parsed state.
fn show_current(session: &Session, codec: &CodecConfig, formatter: &Formatter) -> Result<()> {
    let key = session.current.as_deref().ok_or(CliError::NoCurrentKey)?;
    let state = Parser::new(codec.clone()).parse(key)?;
    println!("{}", formatter.format_state(&state, key)?);
    Ok(())
}

/// List the keys recorded this session, oldest first.
fn print_session_history(session: &Session, formatter: &Formatter) {
    let keys = session.history.all();
    if keys.is_empty() {
        println!("{}", formatter.info("No keys recorded this session"));
        return;
    }

    for (i, key) in keys.iter().enumerate() {
        println!("{:>3}  {}", i + 1, key);
    }
}

// Simple command parsers for REPL (minimal argument parsing)

fn parse_encode_command(args: &[&str]) -> Result<ReplCommand> {
    let mut encode_args = EncodeArgs::default();

    for pair in args {
        let (dimension, value) = split_assignment(pair)?;
        assign_value(&mut encode_args, dimension, value.to_string());
    }

    Ok(ReplCommand::Command(Command::Encode(encode_args)))
}

fn parse_parse_command(args: &[&str], current: Option<&str>) -> Result<ReplCommand> {
    let key = args
        .first()
        .map(|s| s.to_string())
        .or_else(|| current.map(str::to_string))
        .ok_or(CliError::NoCurrentKey)?;

    Ok(ReplCommand::Command(Command::Parse(ParseArgs { key })))
}

fn parse_update_command(args: &[&str], current: Option<&str>) -> Result<ReplCommand> {
    let mut key = None;
    let mut deltas = Vec::new();
    let mut sets = Vec::new();

    for arg in args {
        if arg.contains('=') {
            let (dimension, value) = split_assignment(arg)?;
            // A value naming a delta direction is a trend hint; anything
            // else is a replacement glyph sequence.
            if Delta::parse(value).is_some() {
                deltas.push(format!("{}={}", dimension.as_str(), value));
            } else {
                sets.push(format!("{}={}", dimension.as_str(), value));
            }
        } else if key.is_none() {
            key = Some(arg.to_string());
        } else {
            return Err(CliError::InvalidInput(format!(
                "Unexpected argument '{}'",
                arg
            )));
        }
    }

    if deltas.is_empty() && sets.is_empty() {
        return Err(CliError::InvalidInput(
            "Usage: update [key] <dimension=delta|glyphs> ...".to_string(),
        ));
    }

    let key = key
        .or_else(|| current.map(str::to_string))
        .ok_or(CliError::NoCurrentKey)?;

    Ok(ReplCommand::Command(Command::Update(UpdateArgs {
        key,
        deltas,
        sets,
    })))
}

fn parse_compress_command(args: &[&str]) -> Result<ReplCommand> {
    if args.is_empty() {
        return Ok(ReplCommand::CompressSession);
    }

    Ok(ReplCommand::Command(Command::Compress(CompressArgs {
        keys: args.iter().map(|s| s.to_string()).collect(),
        file: None,
        stdin: false,
        ratio: None,
    })))
}

fn parse_interpret_command(args: &[&str], current: Option<&str>) -> Result<ReplCommand> {
    let key = args
        .first()
        .map(|s| s.to_string())
        .or_else(|| current.map(str::to_string))
        .ok_or(CliError::NoCurrentKey)?;

    Ok(ReplCommand::Command(Command::Interpret(InterpretArgs {
        key,
        lexicon: None,
    })))
}

/// Split one `dimension=value` pair and validate the dimension name.
fn split_assignment(input: &str) -> Result<(Dimension, &str)> {
    let (name, value) = input.split_once('=').ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Invalid assignment '{}'. Expected 'dimension=value'",
            input
        ))
    })?;

    let dimension = Dimension::parse(name)
        .ok_or_else(|| CliError::InvalidInput(format!("Unknown dimension '{}'", name)))?;

    Ok((dimension, value))
}

fn assign_value(args: &mut EncodeArgs, dimension: Dimension, value: String) {
    let slot = match dimension {
        Dimension::Topic => &mut args.topic,
        Dimension::Approach => &mut args.approach,
        Dimension::Goal => &mut args.goal,
        Dimension::Tone => &mut args.tone,
        Dimension::Context => &mut args.context,
        Dimension::Trust => &mut args.trust,
        Dimension::Style => &mut args.style,
        Dimension::Humor => &mut args.humor,
        Dimension::Collab => &mut args.collab,
    };
    *slot = Some(value);
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let rapport_dir = home.join(".rapport");
    std::fs::create_dir_all(&rapport_dir)?;
    Ok(rapport_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  encode [dim=glyphs ...]       - Encode a state (omitted dimensions default)");
    println!("    dims: topic, approach, goal, tone, context, trust, style, humor, collab");
    println!("  parse [key]                   - Parse a key and show its dimensions");
    println!("  update [key] dim=value ...    - Apply changes to a key");
    println!("    a delta direction (increase, decrease, no-change, oscillating)");
    println!("    sets the trend; any other value replaces the glyphs");
    println!("  compress [key1 key2 ...]      - Compress keys into a SuperKey");
    println!("    with no arguments, compresses this session's history");
    println!("  interpret [key]               - Read a key back as phrases");
    println!("  show                          - Show the current key");
    println!("  history                       - List keys recorded this session");
    println!("  help, ?                       - Show this help");
    println!("  exit, quit, q                 - Exit REPL");
    println!();
}
