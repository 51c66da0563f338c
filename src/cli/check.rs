//! Check-digit helpers (`mrz check ...`).

use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};
use mrz::{verhoeff_check_digit, verify_field_with_verhoeff};

/// Check-digit subcommands.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Print the Verhoeff check digit for a digit string.
    Digit(CheckDigitArgs),
    /// Verify a field against a provided check digit.
    Verify(CheckVerifyArgs),
}

/// Arguments for `mrz check digit`.
#[derive(Args, Debug)]
pub struct CheckDigitArgs {
    /// Decimal digits to checksum.
    pub digits: String,
}

/// Arguments for `mrz check verify`.
#[derive(Args, Debug)]
pub struct CheckVerifyArgs {
    /// Field value.
    pub field: String,
    /// Expected check digit.
    pub check_digit: String,
}

/// Execute a check command.
pub fn handle(command: CheckCommand) -> Result<()> {
    match command {
        CheckCommand::Digit(args) => digit(args),
        CheckCommand::Verify(args) => verify(args),
    }
}

fn digit(args: CheckDigitArgs) -> Result<()> {
    let digit = verhoeff_check_digit(&args.digits)?;
    println!("{digit}");
    Ok(())
}

fn verify(args: CheckVerifyArgs) -> Result<()> {
    if verify_field_with_verhoeff(&args.field, &args.check_digit) {
        println!("valid");
        return Ok(());
    }
    match verhoeff_check_digit(&args.field) {
        Ok(expected) => Err(anyhow!(
            "check digit mismatch for '{}': got {}, expected {}",
            args.field,
            args.check_digit,
            expected
        )),
        Err(err) => Err(anyhow!("field '{}' cannot be verified: {}", args.field, err)),
    }
}
