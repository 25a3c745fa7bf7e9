use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::PathBuf;

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s).context("read stdin")?;
    Ok(s)
}

/// Paths dragged into a terminal often arrive quoted.
pub fn clean_directory_input(raw: &str) -> &str {
    raw.trim().trim_matches(|c: char| c == '"' || c == '\'')
}

pub fn prompt_directory() -> Result<PathBuf> {
    let raw = prompt("Enter the directory containing credit card statements")?;
    Ok(PathBuf::from(clean_directory_input(&raw)))
}
