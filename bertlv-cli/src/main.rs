//! Command-line front end for the BER-TLV decoder
//!
//! Owns everything the core leaves to its caller: argument parsing, the
//! hex input gate, user-facing error messages, and the process exit status.
//! The core itself never prints or exits.

use anyhow::{Context, Result, bail};
use bertlv_core::{RenderConfig, find, head, render};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bertlv", about = "Decode BER-TLV encoded hex strings into a readable tree")]
struct Cli {
    /// TLV string (coded in hexadecimal); interior spaces are ignored
    tlv: String,

    /// Tag to search for (hexadecimal); prints the first matching object
    #[arg(short, long, value_name = "TAG")]
    find: Option<String>,

    /// Indent width for the tree view
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stream = parse_hex(&cli.tlv).context("invalid TLV input")?;
    log::debug!("decoded {} input byte(s)", stream.len());

    if let Some(target) = &cli.find {
        let target_tag = parse_hex(target).context("invalid search tag")?;
        match find(&target_tag, &stream)? {
            Some(object) => println!("{}", hex::encode(object.as_bytes())),
            None => println!("tag {} not found", hex::encode(&target_tag)),
        }
        return Ok(());
    }

    let config = RenderConfig { indent: cli.indent };
    let mut rest: &[u8] = &stream;
    while !rest.is_empty() {
        let object = head(rest)?;
        rest = &rest[object.as_bytes().len()..];
        println!("{}", render(&object, 0, &config)?);
    }

    Ok(())
}

/// Hex input gate: strip interior whitespace, then require non-empty,
/// even-length, hex-only input before any byte reaches the decoder.
fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        bail!("input is empty");
    }
    hex::decode(&compact)
        .with_context(|| format!("not an even-length hex string: {}", compact))
}
