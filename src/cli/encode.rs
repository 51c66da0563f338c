//! Encoding workflow (`mrz encode ...`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mrz::{MrzFields, encode_with_report};

use crate::cli::utils::{read_input, write_output};

/// Arguments for `mrz encode`.
///
/// Field flags override values loaded with `--fields`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON object of field values (`-` for stdin).
    #[arg(long)]
    pub fields: Option<PathBuf>,
    /// Document type; only the first character is used.
    #[arg(long = "type")]
    pub document_type: Option<String>,
    /// Issuing country code.
    #[arg(long)]
    pub country: Option<String>,
    /// Full name as SURNAME<<GIVEN<NAMES (spaces allowed).
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub passport_number: Option<String>,
    #[arg(long)]
    pub passport_check: Option<String>,
    #[arg(long)]
    pub nationality: Option<String>,
    /// Date of birth, YYMMDD.
    #[arg(long)]
    pub birth_date: Option<String>,
    #[arg(long)]
    pub birth_check: Option<String>,
    #[arg(long)]
    pub sex: Option<String>,
    /// Date of expiry, YYMMDD.
    #[arg(long)]
    pub expiration_date: Option<String>,
    #[arg(long)]
    pub expiration_check: Option<String>,
    #[arg(long)]
    pub personal_number: Option<String>,
    #[arg(long)]
    pub personal_check: Option<String>,
    #[arg(long)]
    pub final_check: Option<String>,
    /// Write the two lines to a file (`-` for stdout).
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    /// List fields that were truncated to fit.
    #[arg(long)]
    pub report: bool,
    /// Emit JSON instead of raw lines.
    #[arg(long)]
    pub json: bool,
}

/// Execute `mrz encode`.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let mut fields = match args.fields.clone() {
        Some(path) => {
            let raw = read_input(Some(path.as_path()))?;
            serde_json::from_str::<MrzFields>(&raw)
                .with_context(|| format!("failed to parse field JSON from {}", path.display()))?
        }
        None => MrzFields::default(),
    };
    fields.merge(args.overrides());

    let encoded = encode_with_report(&fields);
    let rendered = if args.json {
        format!("{}\n", serde_json::to_string_pretty(&encoded)?)
    } else {
        format!("{}\n{}\n", encoded.lines.line1, encoded.lines.line2)
    };

    match &args.output {
        Some(path) => write_output(path, &rendered)?,
        None => print!("{rendered}"),
    }
    if args.report && !args.json {
        if encoded.was_truncated() {
            eprintln!("Truncated to fit: {}", encoded.truncated.join(", "));
        } else {
            eprintln!("No fields truncated");
        }
    }
    Ok(())
}

impl EncodeArgs {
    fn overrides(&self) -> MrzFields {
        MrzFields {
            document_type: self.document_type.clone(),
            country: self.country.clone(),
            name: self.name.clone(),
            passport_number: self.passport_number.clone(),
            passport_check: self.passport_check.clone(),
            nationality: self.nationality.clone(),
            birth_date: self.birth_date.clone(),
            birth_check: self.birth_check.clone(),
            sex: self.sex.clone(),
            expiration_date: self.expiration_date.clone(),
            expiration_check: self.expiration_check.clone(),
            personal_number: self.personal_number.clone(),
            personal_check: self.personal_check.clone(),
            final_check: self.final_check.clone(),
        }
    }
}
