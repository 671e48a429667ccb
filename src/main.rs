use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use pctcodec::{
    byte_to_hex, decode, encode, equivalent, hex_to_byte, log_debug, log_info, normalize,
    remove_dot_segments,
    utils::{set_global_log_level, LogLevel},
    CharSet,
};

#[derive(Parser, Debug)]
#[command(name = "pctcodec", version, about = "RFC 3986 percent-encoding toolkit")]
struct Cli {
    /// Minimum level written to stderr.
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warning)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Percent-encode text
    Encode {
        /// Base set of characters left unencoded.
        #[arg(long, value_enum, default_value_t = Preset::Unreserved)]
        preset: Preset,

        /// Extra characters to leave unencoded, e.g. `--allow ' /'`.
        #[arg(long, default_value = "")]
        allow: String,

        #[command(flatten)]
        input: Input,
    },
    /// Percent-decode text
    Decode {
        #[command(flatten)]
        input: Input,
    },
    /// Normalize percent-encoding (uppercase hex, decode unreserved octets)
    Normalize {
        #[command(flatten)]
        input: Input,
    },
    /// Exit with status 0 if both strings normalize to the same text, 1 otherwise
    Equivalent { a: String, b: String },
    /// Print a byte (0-255) as two hex digits
    Hex {
        byte: u8,

        #[arg(long)]
        lower: bool,
    },
    /// Print the byte value of a two-digit hex pair
    Unhex { pair: String },
    /// Remove `.` and `..` segments from a path
    RemoveDots { path: String },
}

#[derive(Args, Debug)]
struct Input {
    /// Text to process. Read from --file or stdin when omitted.
    text: Option<String>,

    /// Read the text from a file instead.
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Print `{"input": ..., "output": ...}` instead of the bare output.
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    Unreserved,
    Component,
    PathSegment,
    Path,
    Query,
}

impl Preset {
    fn char_set(self) -> CharSet {
        match self {
            Preset::Unreserved => CharSet::unreserved(),
            Preset::Component => CharSet::component(),
            Preset::PathSegment => CharSet::path_segment(),
            Preset::Path => CharSet::path(),
            Preset::Query => CharSet::query(),
        }
    }
}

#[derive(Serialize)]
struct Transcript<'a> {
    input: &'a str,
    output: &'a str,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    set_global_log_level(cli.log_level);

    match cli.command {
        Command::Encode {
            preset,
            allow,
            input,
        } => {
            let allowed = preset.char_set().with(allow.chars());
            if !allowed.covers_unreserved() {
                log_info!("cli", "allowed set does not cover the unreserved set");
            }
            run_transform(&input, |text| encode(text, &allowed))?;
        }
        Command::Decode { input } => run_transform(&input, decode)?,
        Command::Normalize { input } => run_transform(&input, normalize)?,
        Command::Equivalent { a, b } => {
            let same = equivalent(&a, &b);
            println!("{}", same);
            if !same {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Hex { byte, lower } => println!("{}", byte_to_hex(byte, !lower)),
        Command::Unhex { pair } => {
            let byte = hex_to_byte(&pair).with_context(|| format!("cannot parse {:?}", pair))?;
            println!("{}", byte);
        }
        Command::RemoveDots { path } => println!("{}", remove_dot_segments(&path)),
    }

    Ok(ExitCode::SUCCESS)
}

fn run_transform(input: &Input, transform: impl Fn(&str) -> String) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let output = transform(&text);
    log_debug!(
        "cli",
        "{} chars in, {} chars out",
        text.chars().count(),
        output.chars().count()
    );

    if input.json {
        let transcript = Transcript {
            input: &text,
            output: &output,
        };
        println!("{}", serde_json::to_string(&transcript)?);
    } else {
        println!("{}", output);
    }
    Ok(())
}

fn read_input(input: &Input) -> anyhow::Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    let mut text = match &input.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    // Drop the trailing newline editors and shells add.
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
