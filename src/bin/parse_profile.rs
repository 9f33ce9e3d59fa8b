use std::io::Read;
use std::{env, fs};

use anyhow::{Context, Result};
use rolemap::parser;

fn main() -> Result<()> {
    let arg = env::args()
        .nth(1)
        .context("Usage: cargo run --bin parse_profile -- <path-to-text-file | ->")?;
    let text = if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read profile text from stdin")?;
        buf
    } else {
        fs::read_to_string(&arg).with_context(|| format!("Failed to read profile text {arg}"))?
    };
    let profile = parser::parse(&text);
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
