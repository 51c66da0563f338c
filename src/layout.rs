//! Static TD3 field layout shared by the decoder, encoder, and `mrz layout`.

use serde::Serialize;

/// Characters per TD3 line.
pub const TD3_LINE_LEN: usize = 44;

/// ICAO filler character used for padding and name separators.
pub const FILLER: char = '<';

/// Which of the two MRZ lines a field lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MrzLine {
    First,
    Second,
}

impl MrzLine {
    pub fn number(self) -> u8 {
        match self {
            MrzLine::First => 1,
            MrzLine::Second => 2,
        }
    }
}

/// Zero-based, half-open character span of one named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpan {
    pub name: &'static str,
    pub line: MrzLine,
    pub start: usize,
    pub end: usize,
    pub label: &'static str,
}

impl FieldSpan {
    pub const fn width(&self) -> usize {
        self.end - self.start
    }
}

macro_rules! span {
    ($name:ident, $key:literal, $line:ident, $start:expr, $end:expr, $label:expr) => {
        pub const $name: FieldSpan = FieldSpan {
            name: $key,
            line: MrzLine::$line,
            start: $start,
            end: $end,
            label: $label,
        };
    };
}

/// Named spans, one per TD3 field.
pub mod spans {
    use super::{FieldSpan, MrzLine};

    span!(DOCUMENT_TYPE, "document_type", First, 0, 2, "Document code");
    span!(ISSUING_COUNTRY, "issuing_country", First, 2, 5, "Issuing state");
    span!(NAME, "name", First, 5, 44, "Surname<<Given<Names");
    span!(PASSPORT_NUMBER, "passport_number", Second, 0, 9, "Document number");
    span!(PASSPORT_CHECK_DIGIT, "passport_check_digit", Second, 9, 10, "Check digit (document number)");
    span!(NATIONALITY, "nationality", Second, 10, 13, "Nationality");
    span!(BIRTH_DATE, "birth_date", Second, 13, 19, "Date of birth (YYMMDD)");
    span!(BIRTH_CHECK_DIGIT, "birth_check_digit", Second, 19, 20, "Check digit (date of birth)");
    span!(GENDER, "gender", Second, 20, 21, "Sex");
    span!(EXPIRATION_DATE, "expiration_date", Second, 21, 27, "Date of expiry (YYMMDD)");
    span!(EXPIRATION_CHECK_DIGIT, "expiration_check_digit", Second, 27, 28, "Check digit (date of expiry)");
    span!(PERSONAL_NUMBER, "personal_number", Second, 28, 42, "Personal number");
    span!(PERSONAL_CHECK_DIGIT, "personal_check_digit", Second, 42, 43, "Check digit (personal number)");
    span!(FINAL_CHECK_DIGIT, "final_check_digit", Second, 43, 44, "Composite check digit");
}

static TD3_SPANS: &[FieldSpan] = &[
    spans::DOCUMENT_TYPE,
    spans::ISSUING_COUNTRY,
    spans::NAME,
    spans::PASSPORT_NUMBER,
    spans::PASSPORT_CHECK_DIGIT,
    spans::NATIONALITY,
    spans::BIRTH_DATE,
    spans::BIRTH_CHECK_DIGIT,
    spans::GENDER,
    spans::EXPIRATION_DATE,
    spans::EXPIRATION_CHECK_DIGIT,
    spans::PERSONAL_NUMBER,
    spans::PERSONAL_CHECK_DIGIT,
    spans::FINAL_CHECK_DIGIT,
];

/// Every TD3 field in line order.
pub fn td3_layout() -> &'static [FieldSpan] {
    TD3_SPANS
}
