//! Interactive URL prompt.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter the image URL: ";

/// Prints the prompt to `out` and reads one line from `input`, trimmed.
/// End of input yields an empty string, which the fetcher rejects as an invalid URL.
pub fn read_url<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<String> {
    write!(out, "{}", PROMPT).context("write prompt")?;
    out.flush().context("flush prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("read URL from stdin")?;
    Ok(line.trim().to_string())
}
