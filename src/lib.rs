//! Codec for the two-line TD3 machine-readable zone of ICAO 9303 passports.

mod checksum;
mod collaborators;
mod decoder;
mod encoder;
mod error;
mod fields;
mod integrity;
mod layout;
mod record;

pub use checksum::{ChecksumError, verhoeff_check_digit, verhoeff_validate, verify_field_with_verhoeff};
pub use collaborators::{
    DocumentLookup, EmptyDocumentStore, InMemoryDocumentStore, MrzScanner, UnavailableScanner,
    decode_from_scanner,
};
pub use decoder::decode;
pub use encoder::{EncodedMrz, encode, encode_with_report};
pub use error::{MrzError, Result};
pub use fields::{
    compose_name_block, filler_to_zero, normalize_name, pad_or_truncate, slice_exact,
    split_name_block,
};
pub use integrity::{FieldCheck, IntegrityReport, report_mismatches};
pub use layout::{FILLER, FieldSpan, MrzLine, TD3_LINE_LEN, spans, td3_layout};
pub use record::{MrzFields, MrzLines, MrzRecord};

/// Decode a line pair and list its check-digit mismatches in one call.
pub fn decode_and_check(line1: &str, line2: &str) -> Result<(MrzRecord, Vec<&'static str>)> {
    let record = decode(line1, line2)?;
    let mismatches = report_mismatches(&record);
    Ok((record, mismatches))
}
