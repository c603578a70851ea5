//! Update command implementation.

use crate::cli::UpdateArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rapport_codec::{encode, update, CodecConfig, Parser};
use rapport_domain::{Delta, DeltaSignal, Dimension};

/// Execute the update command. Returns the produced key.
pub fn execute_update(args: UpdateArgs, codec: &CodecConfig, formatter: &Formatter) -> Result<String> {
    let previous = Parser::new(codec.clone()).parse(&args.key)?;
    let signal = build_signal(&args)?;

    let next = update(&previous, &signal);
    let key = encode(&next);

    println!("{}", formatter.format_state(&next, &key)?);

    Ok(key)
}

/// Build the change signal from `--delta` and `--set` assignments.
fn build_signal(args: &UpdateArgs) -> Result<DeltaSignal> {
    let mut signal = DeltaSignal::new();

    for pair in &args.deltas {
        let (dimension, value) = parse_assignment(pair)?;
        let delta = Delta::parse(value).ok_or_else(|| {
            CliError::InvalidInput(format!(
                "Unknown delta '{}'. Expected increase, decrease, no-change, oscillating, or unknown",
                value
            ))
        })?;
        signal = signal.with_delta(dimension, delta);
    }

    for pair in &args.sets {
        let (dimension, value) = parse_assignment(pair)?;
        signal = signal
            .with_replacement(dimension, value.to_string())
            .map_err(CliError::InvalidInput)?;
    }

    Ok(signal)
}

/// Parse one `dimension=value` assignment.
fn parse_assignment(input: &str) -> Result<(Dimension, &str)> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rapport_domain::Trend;

    #[test]
    fn test_parse_assignment() {
        let (dim, value) = parse_assignment("trust=increase").unwrap();
        assert_eq!(dim, Dimension::Trust);
        assert_eq!(value, "increase");
    }

    #[test]
    fn test_parse_assignment_rejects_bad_dimension() {
        assert!(parse_assignment("mood=increase").is_err());
        assert!(parse_assignment("no-equals-sign").is_err());
    }

    #[test]
    fn test_build_signal_combines_deltas_and_sets() {
        let args = UpdateArgs {
            key: String::new(),
            deltas: vec!["trust=increase".to_string(), "tone=oscillating".to_string()],
            sets: vec!["topic=🎮🕹️".to_string()],
        };

        let signal = build_signal(&args).unwrap();
        assert_eq!(signal.get(Dimension::Trust).delta().trend(), Trend::Up);
        assert_eq!(signal.get(Dimension::Tone).delta().trend(), Trend::Cyclic);
        assert_eq!(signal.get(Dimension::Topic).replacement(), Some("🎮🕹️"));
    }

    #[test]
    fn test_build_signal_rejects_unknown_delta() {
        let args = UpdateArgs {
            key: String::new(),
            deltas: vec!["trust=sideways".to_string()],
            sets: vec![],
        };

        assert!(matches!(
            build_signal(&args),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_build_signal_rejects_empty_replacement() {
        let args = UpdateArgs {
            key: String::new(),
            deltas: vec![],
            sets: vec!["topic=".to_string()],
        };

        assert!(matches!(
            build_signal(&args),
            Err(CliError::InvalidInput(_))
        ));
    }
}
