use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use serin::{DecodeOptions, EncodeOptions, Format, Value};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimArg {
    Comma,
    Tab,
    Pipe,
}

impl From<DelimArg> for serin::Delimiter {
    fn from(arg: DelimArg) -> Self {
        match arg {
            DelimArg::Comma => serin::Delimiter::Comma,
            DelimArg::Tab => serin::Delimiter::Tab,
            DelimArg::Pipe => serin::Delimiter::Pipe,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "serin",
    about = "Convert between JSON, TOON and YAML documents",
    version
)]
struct Args {
    /// Path to the input document (format detected from the extension)
    input: PathBuf,

    /// Path to the output document; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format (json, toon, yaml); defaults to toon when no output
    /// path is given
    #[arg(short = 't', long = "type")]
    output_type: Option<String>,

    /// Indent width for structured output
    #[arg(short, long, default_value_t = 2)]
    indent: usize,

    /// Delimiter for TOON arrays and tables
    #[arg(long, value_enum, default_value_t = DelimArg::Comma)]
    delimiter: DelimArg,

    /// Emit [#N] length markers in TOON array headers
    #[arg(long)]
    length_marker: bool,

    /// Reconcile TOON count mismatches instead of failing
    #[arg(long)]
    lenient: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let delimiter: serin::Delimiter = args.delimiter.into();

    let input_format = Format::from_path(&args.input).with_context(|| {
        format!(
            "unable to determine the input format of '{}' (supported: json, toon, yaml)",
            args.input.display()
        )
    })?;

    let output_format = match (&args.output, &args.output_type) {
        (Some(path), requested) => {
            let detected = Format::from_path(path).with_context(|| {
                format!(
                    "unable to determine the output format of '{}' (supported: json, toon, yaml)",
                    path.display()
                )
            })?;
            if let Some(name) = requested {
                let requested = Format::from_str(name)?;
                if requested != detected {
                    bail!(
                        "output type '{requested}' does not match the extension of '{}'",
                        path.display()
                    );
                }
            }
            detected
        }
        (None, Some(name)) => Format::from_str(name)?,
        (None, None) => Format::Toon,
    };

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;
    let value: Value = match input_format {
        Format::Json => serin::json::from_str(&text)?,
        Format::Toon => {
            let options = DecodeOptions::new()
                .with_strict(!args.lenient)
                .with_delimiter(delimiter);
            serin::decode(&text, &options)?
        }
        Format::Yaml => serin::yaml::from_str(&text)?,
    };

    let rendered = match output_format {
        Format::Json => serin::json::to_string_pretty(&value, args.indent)?,
        Format::Toon => {
            let options = EncodeOptions::new()
                .with_indent(args.indent)
                .with_delimiter(delimiter)
                .with_length_marker(args.length_marker);
            serin::encode(&value, &options)
        }
        Format::Yaml => serin::yaml::to_string(&value)?,
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => println!("{rendered}"),
    }

    Ok(())
}
