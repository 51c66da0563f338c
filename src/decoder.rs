use crate::error::{MrzError, Result};
use crate::fields::{slice_exact, split_name_block};
use crate::layout::{FieldSpan, MrzLine, TD3_LINE_LEN, spans};
use crate::record::MrzRecord;

/// Decode a TD3 line pair into its named fields.
///
/// Only the line widths are validated. Characters outside the MRZ alphabet,
/// impossible dates, and bad check digits all pass through untouched; use
/// [`crate::report_mismatches`] for check digits.
pub fn decode(line1: &str, line2: &str) -> Result<MrzRecord> {
    check_length(MrzLine::First, line1)?;
    check_length(MrzLine::Second, line2)?;

    let field = |span: FieldSpan| match span.line {
        MrzLine::First => slice_exact(line1, span.start, span.end),
        MrzLine::Second => slice_exact(line2, span.start, span.end),
    };
    let (surname, given_names) = split_name_block(&field(spans::NAME));

    Ok(MrzRecord {
        document_type: field(spans::DOCUMENT_TYPE),
        issuing_country: field(spans::ISSUING_COUNTRY),
        surname,
        given_names,
        passport_number: field(spans::PASSPORT_NUMBER),
        passport_check_digit: Some(field(spans::PASSPORT_CHECK_DIGIT)),
        nationality: field(spans::NATIONALITY),
        birth_date: field(spans::BIRTH_DATE),
        birth_check_digit: Some(field(spans::BIRTH_CHECK_DIGIT)),
        gender: field(spans::GENDER),
        expiration_date: field(spans::EXPIRATION_DATE),
        expiration_check_digit: Some(field(spans::EXPIRATION_CHECK_DIGIT)),
        personal_number: field(spans::PERSONAL_NUMBER),
        personal_check_digit: Some(field(spans::PERSONAL_CHECK_DIGIT)),
        final_check_digit: Some(field(spans::FINAL_CHECK_DIGIT)),
    })
}

fn check_length(line: MrzLine, text: &str) -> Result<()> {
    let found = text.chars().count();
    if found != TD3_LINE_LEN {
        return Err(MrzError::Length {
            line: line.number(),
            expected: TD3_LINE_LEN,
            found,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE1: &str = "P<USASMITH<<JOHN<JAMES<<<<<<<<<<<<<<<<<<<<<<";
    const LINE2: &str = "1234567890USA9001011M2505015<<<<<<<<<<<<<<<8";

    #[test]
    fn decodes_usa_passport() {
        let record = decode(LINE1, LINE2).unwrap();
        assert_eq!(record.document_type, "P<");
        assert_eq!(record.issuing_country, "USA");
        assert_eq!(record.surname, "SMITH");
        assert_eq!(record.given_names, "JOHN JAMES");
        assert_eq!(record.passport_number, "123456789");
        assert_eq!(record.passport_check_digit.as_deref(), Some("0"));
        assert_eq!(record.nationality, "USA");
        assert_eq!(record.birth_date, "900101");
        assert_eq!(record.birth_check_digit.as_deref(), Some("1"));
        assert_eq!(record.gender, "M");
        assert_eq!(record.expiration_date, "250501");
        assert_eq!(record.expiration_check_digit.as_deref(), Some("5"));
        assert_eq!(record.personal_number, "<<<<<<<<<<<<<<");
        assert_eq!(record.personal_check_digit.as_deref(), Some("<"));
        assert_eq!(record.final_check_digit.as_deref(), Some("8"));
    }

    #[test]
    fn single_name_has_empty_given_names() {
        let line1 = format!("{:<<44}", "P<CANMADONNA");
        let record = decode(&line1, LINE2).unwrap();
        assert_eq!(record.surname, "MADONNA");
        assert_eq!(record.given_names, "");
    }

    #[test]
    fn length_checked_on_both_lines() {
        let short = &LINE1[..38];
        assert_eq!(
            decode(short, LINE2),
            Err(MrzError::Length {
                line: 1,
                expected: 44,
                found: 38
            })
        );
        let long = format!("{LINE2}99");
        assert!(matches!(
            decode(LINE1, &long),
            Err(MrzError::Length { line: 2, found: 46, .. })
        ));
        assert!(decode("", "").is_err());
    }

    #[test]
    fn length_error_message_names_the_kind() {
        let err = decode("P<", LINE2).unwrap_err();
        assert!(err.to_string().starts_with("LengthError"));
    }

    #[test]
    fn foreign_alphabet_passes_through() {
        let line2 = "ab34567890usa9001011x2505015<<<<<<<<<<<<<<<8";
        let record = decode(LINE1, line2).unwrap();
        assert_eq!(record.passport_number, "ab3456789");
        assert_eq!(record.gender, "x");
    }
}
