//! parse-int / parse-uint commands - run the bundled strconv functions

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::strconv::{parse_int, parse_uint, NumError};
use clap::Args;
use serde::Serialize;

/// Arguments shared by parse-int and parse-uint
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Text to parse (may start with a sign for parse-int)
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Base: 0 infers it from a 0b/0o/0x prefix, otherwise 2 to 36
    #[arg(long, short = 'b', default_value_t = 10)]
    pub base: u8,

    /// Bit size: 0 for the platform word, otherwise up to 64
    #[arg(long, short = 's', default_value_t = 64)]
    pub bit_size: u8,
}

/// Parse response
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub input: String,
    pub base: u8,
    pub bit_size: u8,
    pub value: String,
}

/// Execute the parse-int command
pub fn execute_int(args: ParseArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_int(&args.value, args.base, args.bit_size);
    report(args, parsed.map(|v| v.to_string()), format)
}

/// Execute the parse-uint command
pub fn execute_uint(
    args: ParseArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let parsed = parse_uint(&args.value, args.base, args.bit_size);
    report(args, parsed.map(|v| v.to_string()), format)
}

fn report(
    args: ParseArgs,
    parsed: Result<String, NumError>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = parsed?;

    let response = ParseResponse {
        input: args.value,
        base: args.base,
        bit_size: args.bit_size,
        value,
    };

    match format {
        OutputFormat::Human => println!("{}", colors::number(&response.value)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}
