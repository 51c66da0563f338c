use serde::{Deserialize, Serialize};

use crate::fields::{compose_name_block, filler_to_zero, split_name_block};

/// A raw TD3 line pair as produced by a scanner or typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzLines {
    pub line1: String,
    pub line2: String,
}

impl MrzLines {
    pub fn new<S: Into<String>, T: Into<String>>(line1: S, line2: T) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// Decode this pair; see [`crate::decode`].
    pub fn decode(&self) -> crate::error::Result<MrzRecord> {
        crate::decoder::decode(&self.line1, &self.line2)
    }
}

/// Fields extracted from a TD3 MRZ.
///
/// Values are passed through exactly as sliced; only the name block is
/// tokenized. Check digits are optional so partial records can be checked,
/// but the decoder always fills them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzRecord {
    pub document_type: String,
    pub issuing_country: String,
    pub surname: String,
    pub given_names: String,
    pub passport_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_check_digit: Option<String>,
    pub nationality: String,
    pub birth_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_check_digit: Option<String>,
    pub gender: String,
    pub expiration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_check_digit: Option<String>,
    /// Raw personal number, fillers kept.
    pub personal_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_check_digit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_check_digit: Option<String>,
}

impl MrzRecord {
    /// Personal number with fillers replaced by `0`, as fed to the checksum.
    pub fn personal_number_for_checksum(&self) -> String {
        filler_to_zero(&self.personal_number)
    }
}

/// Input to [`crate::encode`]. Every field is optional and defaults to empty.
///
/// Serialized keys follow the short option names accepted by the CLI
/// (`type`, `country`, `name`, `sex`, `*_check`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MrzFields {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Full name as `SURNAME<<GIVEN<NAMES`; spaces are accepted in place of fillers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_check: Option<String>,
}

impl MrzFields {
    /// Overlay every field set in `other` onto `self`.
    pub fn merge(&mut self, other: MrzFields) {
        overlay(&mut self.document_type, other.document_type);
        overlay(&mut self.country, other.country);
        overlay(&mut self.name, other.name);
        overlay(&mut self.passport_number, other.passport_number);
        overlay(&mut self.passport_check, other.passport_check);
        overlay(&mut self.nationality, other.nationality);
        overlay(&mut self.birth_date, other.birth_date);
        overlay(&mut self.birth_check, other.birth_check);
        overlay(&mut self.sex, other.sex);
        overlay(&mut self.expiration_date, other.expiration_date);
        overlay(&mut self.expiration_check, other.expiration_check);
        overlay(&mut self.personal_number, other.personal_number);
        overlay(&mut self.personal_check, other.personal_check);
        overlay(&mut self.final_check, other.final_check);
    }
}

fn overlay(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

impl From<&MrzRecord> for MrzFields {
    fn from(record: &MrzRecord) -> Self {
        Self {
            document_type: Some(record.document_type.clone()),
            country: Some(record.issuing_country.clone()),
            name: Some(compose_name_block(&record.surname, &record.given_names)),
            passport_number: Some(record.passport_number.clone()),
            passport_check: record.passport_check_digit.clone(),
            nationality: Some(record.nationality.clone()),
            birth_date: Some(record.birth_date.clone()),
            birth_check: record.birth_check_digit.clone(),
            sex: Some(record.gender.clone()),
            expiration_date: Some(record.expiration_date.clone()),
            expiration_check: record.expiration_check_digit.clone(),
            personal_number: Some(record.personal_number.clone()),
            personal_check: record.personal_check_digit.clone(),
            final_check: record.final_check_digit.clone(),
        }
    }
}

/// Builds a partial record, e.g. from a document lookup.
///
/// Absent check digits stay `None` so the integrity report skips them.
impl From<&MrzFields> for MrzRecord {
    fn from(fields: &MrzFields) -> Self {
        let owned = |value: &Option<String>| value.clone().unwrap_or_default();
        let (surname, given_names) = split_name_block(&owned(&fields.name).replace(' ', "<"));
        Self {
            document_type: owned(&fields.document_type),
            issuing_country: owned(&fields.country),
            surname,
            given_names,
            passport_number: owned(&fields.passport_number),
            passport_check_digit: fields.passport_check.clone(),
            nationality: owned(&fields.nationality),
            birth_date: owned(&fields.birth_date),
            birth_check_digit: fields.birth_check.clone(),
            gender: owned(&fields.sex),
            expiration_date: owned(&fields.expiration_date),
            expiration_check_digit: fields.expiration_check.clone(),
            personal_number: owned(&fields.personal_number),
            personal_check_digit: fields.personal_check.clone(),
            final_check_digit: fields.final_check.clone(),
        }
    }
}
