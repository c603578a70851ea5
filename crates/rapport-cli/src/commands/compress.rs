//! Compress command implementation.

use crate::cli::CompressArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rapport_codec::{encode, CodecConfig, Compressor};
use std::fs;
use std::io::{self, BufRead};

/// Execute the compress command. Returns the produced SuperKey.
pub fn execute_compress(
    args: CompressArgs,
    codec: &CodecConfig,
    formatter: &Formatter,
) -> Result<String> {
    // Collect history keys from various sources, oldest first
    let mut keys = args.keys.clone();

    if let Some(file_path) = &args.file {
        keys.extend(read_keys_from_file(file_path)?);
    }

    if args.stdin {
        keys.extend(read_keys_from_stdin()?);
    }

    if keys.is_empty() {
        return Err(CliError::InvalidInput("No history keys provided".to_string()));
    }

    let mut codec = codec.clone();
    if let Some(ratio) = args.ratio {
        codec.ratio = ratio;
    }

    let state = Compressor::new(codec).compress_state(&keys)?;
    let super_key = encode(&state);

    println!("{}", formatter.format_state(&state, &super_key)?);

    Ok(super_key)
}

/// Read keys from a file (one per line).
fn read_keys_from_file(path: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect())
}

/// Read keys from stdin (one per line).
fn read_keys_from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut keys = Vec::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            keys.push(trimmed.to_string());
        }
    }

    Ok(keys)
}
