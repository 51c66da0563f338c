//! Decoding workflow (`mrz decode ...`).

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use mrz::{IntegrityReport, MrzLines, MrzRecord};
use serde::Serialize;

use crate::cli::utils::{or_dash, parse_line_pair, read_input};

/// Arguments for `mrz decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// First MRZ line (44 characters).
    #[arg(long, requires = "line2")]
    pub line1: Option<String>,
    /// Second MRZ line (44 characters).
    #[arg(long, requires = "line1")]
    pub line2: Option<String>,
    /// Read both lines from a file (`-` for stdin) when not given inline.
    #[arg(long = "from", conflicts_with_all = ["line1", "line2"])]
    pub from: Option<PathBuf>,
    /// Verify check digits and list mismatching fields.
    #[arg(long)]
    pub check: bool,
    /// Fail when any check digit mismatches (implies `--check`).
    #[arg(long)]
    pub strict: bool,
    /// Emit JSON instead of a field listing.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DecodeOutput<'a> {
    record: &'a MrzRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    integrity: Option<&'a IntegrityReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mismatches: Option<Vec<&'static str>>,
}

/// Execute `mrz decode`.
pub fn handle(args: DecodeArgs) -> Result<()> {
    let lines = match (args.line1, args.line2) {
        (Some(line1), Some(line2)) => MrzLines::new(line1, line2),
        _ => parse_line_pair(&read_input(args.from.as_deref())?)?,
    };
    let record = lines.decode()?;
    tracing::debug!(surname = %record.surname, "decoded MRZ");

    let check = args.check || args.strict;
    let report = check.then(|| IntegrityReport::for_record(&record));
    let mismatches = report.as_ref().map(IntegrityReport::mismatches);

    if args.json {
        let output = DecodeOutput {
            record: &record,
            integrity: report.as_ref(),
            mismatches: mismatches.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_record(&record);
        if let Some(mismatches) = &mismatches {
            if mismatches.is_empty() {
                println!("Check digits:      ok");
            } else {
                println!("Check digits:      mismatch in {}", mismatches.join(", "));
            }
        }
    }

    if args.strict {
        if let Some(mismatches) = mismatches.filter(|m| !m.is_empty()) {
            return Err(anyhow!(
                "check digit verification failed for {}",
                mismatches.join(", ")
            ));
        }
    }
    Ok(())
}

fn print_record(record: &MrzRecord) {
    println!("Document type:     {}", record.document_type);
    println!("Issuing country:   {}", record.issuing_country);
    println!("Surname:           {}", record.surname);
    println!("Given names:       {}", record.given_names);
    println!(
        "Passport number:   {} (check {})",
        record.passport_number,
        or_dash(record.passport_check_digit.as_deref())
    );
    println!("Nationality:       {}", record.nationality);
    println!(
        "Birth date:        {} (check {})",
        record.birth_date,
        or_dash(record.birth_check_digit.as_deref())
    );
    println!("Sex:               {}", record.gender);
    println!(
        "Expiration date:   {} (check {})",
        record.expiration_date,
        or_dash(record.expiration_check_digit.as_deref())
    );
    println!(
        "Personal number:   {} (check {})",
        record.personal_number,
        or_dash(record.personal_check_digit.as_deref())
    );
    println!(
        "Final check digit: {}",
        or_dash(record.final_check_digit.as_deref())
    );
}
