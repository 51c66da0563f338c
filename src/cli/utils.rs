//! Convenience helpers shared across command handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use mrz::MrzLines;

/// Read command input from a file, or from stdin when `from` is absent or `-`.
pub fn read_input(from: Option<&Path>) -> Result<String> {
    match from {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("cannot read MRZ input from {}", path.display())),
        _ => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("cannot read MRZ input from stdin")?;
    Ok(input)
}

/// Write rendered output to `path`, or to stdout for `-`.
pub fn write_output(path: &Path, rendered: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        return io::stdout()
            .write_all(rendered.as_bytes())
            .context("cannot write to stdout");
    }
    fs::write(path, rendered).with_context(|| format!("cannot write {}", path.display()))
}

/// Pick the two MRZ lines out of free text, ignoring blank lines.
///
/// Lines are not trimmed beyond the line terminator so that stray padding
/// still trips the decoder's length check.
pub fn parse_line_pair(input: &str) -> Result<MrzLines> {
    let lines: Vec<&str> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    match lines.as_slice() {
        [line1, line2] => Ok(MrzLines::new(*line1, *line2)),
        other => Err(anyhow!(
            "expected exactly two MRZ lines, found {}",
            other.len()
        )),
    }
}

/// Render an optional value, showing `-` when absent.
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_pair_skips_blank_lines() {
        let pair = parse_line_pair("\nAAA\r\n\nBBB\n").unwrap();
        assert_eq!(pair, MrzLines::new("AAA", "BBB"));
    }

    #[test]
    fn line_pair_requires_two_lines() {
        assert!(parse_line_pair("AAA").is_err());
        assert!(parse_line_pair("A\nB\nC").is_err());
    }

    #[test]
    fn input_is_read_from_file() {
        let path = std::env::temp_dir().join(format!("mrz-read-input-{}.txt", std::process::id()));
        fs::write(&path, "LINE1\nLINE2\n").unwrap();
        let input = read_input(Some(path.as_path())).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(input, "LINE1\nLINE2\n");
    }

    #[test]
    fn missing_input_file_names_the_path() {
        let path = Path::new("/nonexistent/mrz-input.txt");
        let err = read_input(Some(path)).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/mrz-input.txt"));
    }
}
