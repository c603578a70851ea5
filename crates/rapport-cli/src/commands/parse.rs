//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::error::Result;
use crate::output::Formatter;
use rapport_codec::{encode, CodecConfig, Parser};

/// Execute the parse command.
///
/// The key shown back is the canonical re-encoding of the parsed state, so
/// lenient repairs become visible in the output.
pub fn execute_parse(args: ParseArgs, codec: &CodecConfig, formatter: &Formatter) -> Result<()> {
    let state = Parser::new(codec.clone()).parse(&args.key)?;
    let canonical = encode(&state);

    println!("{}", formatter.format_state(&state, &canonical)?);

    Ok(())
}
