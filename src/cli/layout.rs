//! Layout discovery (`mrz layout`).

use anyhow::Result;
use clap::Args;
use mrz::{MrzLine, td3_layout};

/// Arguments for `mrz layout`.
#[derive(Args, Debug)]
pub struct LayoutArgs {
    /// Only show fields on this line (1 or 2).
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub line: Option<u8>,
    /// Emit JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Execute `mrz layout`.
pub fn handle(args: LayoutArgs) -> Result<()> {
    let spans: Vec<_> = td3_layout()
        .iter()
        .filter(|span| args.line.is_none_or(|line| span.line.number() == line))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&spans)?);
        return Ok(());
    }
    let mut current: Option<MrzLine> = None;
    for span in spans {
        if current != Some(span.line) {
            println!("Line {}:", span.line.number());
            current = Some(span.line);
        }
        println!(
            "  {:>2}-{:>2}  {:<24} {}",
            span.start + 1,
            span.end,
            span.name,
            span.label
        );
    }
    Ok(())
}
