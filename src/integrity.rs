//! Cross-check decoded numeric fields against their declared check digits.

use serde::Serialize;

use crate::checksum::verhoeff_check_digit;
use crate::record::MrzRecord;

/// Outcome of checking one field against its check digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub field: &'static str,
    /// Value fed to the checksum (personal number with fillers as `0`).
    pub value: String,
    pub provided: String,
    /// `None` when the value is empty or not purely numeric.
    pub expected: Option<u8>,
}

impl FieldCheck {
    pub fn matches(&self) -> bool {
        self.expected
            .is_some_and(|digit| digit.to_string() == self.provided)
    }
}

/// Every field that carried a check digit, in reporting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub checks: Vec<FieldCheck>,
}

impl IntegrityReport {
    /// Run the checks over `record`.
    ///
    /// Order is fixed: passport number, birth date, expiration date, personal
    /// number. A field without a check digit is skipped rather than failed.
    pub fn for_record(record: &MrzRecord) -> Self {
        let candidates = [
            (
                "passport_number",
                record.passport_number.clone(),
                &record.passport_check_digit,
            ),
            (
                "birth_date",
                record.birth_date.clone(),
                &record.birth_check_digit,
            ),
            (
                "expiration_date",
                record.expiration_date.clone(),
                &record.expiration_check_digit,
            ),
            (
                "personal_number",
                record.personal_number_for_checksum(),
                &record.personal_check_digit,
            ),
        ];

        let checks = candidates
            .into_iter()
            .filter_map(|(field, value, provided)| {
                let provided = provided.as_ref()?.clone();
                let expected = verhoeff_check_digit(&value).ok();
                Some(FieldCheck {
                    field,
                    value,
                    provided,
                    expected,
                })
            })
            .collect();
        Self { checks }
    }

    pub fn mismatches(&self) -> Vec<&'static str> {
        self.checks
            .iter()
            .filter(|check| !check.matches())
            .map(|check| check.field)
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.checks.iter().all(FieldCheck::matches)
    }
}

/// Names of fields whose check digit does not match, in fixed order.
///
/// Non-numeric values count as mismatches; nothing here returns an error.
pub fn report_mismatches(record: &MrzRecord) -> Vec<&'static str> {
    let report = IntegrityReport::for_record(record);
    if !report.is_clean() {
        tracing::debug!(mismatches = ?report.mismatches(), "mrz check digit mismatch");
    }
    report.mismatches()
}
