//! Interpret command implementation.

use crate::cli::InterpretArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use rapport_interpreter::{Interpreter, Lexicon};
use std::path::Path;

/// Execute the interpret command.
pub fn execute_interpret(args: InterpretArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    // The flag wins over the configured lexicon; neither means built-ins.
    let path = args
        .lexicon
        .as_deref()
        .or(config.settings.lexicon_path.as_deref());
    let lexicon = load_lexicon(path)?;

    let report = Interpreter::new(lexicon).interpret(&args.key);

    println!("{}", formatter.format_report(&report)?);

    Ok(())
}

/// Load a lexicon from an optional TOML file path.
fn load_lexicon(path: Option<&str>) -> Result<Lexicon> {
    match path {
        Some(path) => Ok(Lexicon::load(Path::new(path))?),
        None => Ok(Lexicon::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_path_uses_builtin_lexicon() {
        let lexicon = load_lexicon(None).unwrap();
        assert_eq!(lexicon.topic.fallback, "Technology and the web");
    }

    #[test]
    fn test_custom_lexicon_loads_from_file() {
        let mut lexicon = Lexicon::default();
        lexicon
            .topic
            .entries
            .insert("🎮🕹️".to_string(), "Games and play".to_string());

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", lexicon.to_toml().unwrap()).unwrap();

        let loaded = load_lexicon(file.path().to_str()).unwrap();
        assert_eq!(loaded.topic.phrase("🎮🕹️"), "Games and play");
    }

    #[test]
    fn test_missing_lexicon_file_is_an_error() {
        assert!(matches!(
            load_lexicon(Some("/nonexistent/lexicon.toml")),
            Err(CliError::Lexicon(_))
        ));
    }
}
