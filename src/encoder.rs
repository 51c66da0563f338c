use serde::Serialize;

use crate::fields::{fit_slot, pad_or_truncate};
use crate::layout::{FILLER, TD3_LINE_LEN, spans};
use crate::record::{MrzFields, MrzLines};

/// Document code used when the input leaves the type empty.
const DEFAULT_DOCUMENT_TYPE: char = 'P';

/// Encoder output plus the input fields that did not fit their slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedMrz {
    #[serde(flatten)]
    pub lines: MrzLines,
    /// Input keys whose values were cut to fit, in line order.
    pub truncated: Vec<&'static str>,
}

impl EncodedMrz {
    pub fn was_truncated(&self) -> bool {
        !self.truncated.is_empty()
    }
}

/// Compose a TD3 line pair. Both lines are always 44 characters; overflow is dropped silently.
pub fn encode(fields: &MrzFields) -> (String, String) {
    let encoded = encode_with_report(fields);
    (encoded.lines.line1, encoded.lines.line2)
}

/// Same as [`encode`], also listing which inputs were truncated.
pub fn encode_with_report(fields: &MrzFields) -> EncodedMrz {
    let mut slots = SlotWriter::default();

    let doc_type = text(&fields.document_type)
        .to_uppercase()
        .chars()
        .next()
        .unwrap_or(DEFAULT_DOCUMENT_TYPE);
    let country = slots.fit(
        "country",
        &text(&fields.country).to_uppercase(),
        spans::ISSUING_COUNTRY.width(),
    );
    let name = text(&fields.name).to_uppercase().replace(' ', "<");
    let line1_raw = format!("{doc_type}{FILLER}{country}{name}");
    if line1_raw.chars().count() > TD3_LINE_LEN {
        slots.truncated.push("name");
    }
    let line1 = pad_or_truncate(&line1_raw, TD3_LINE_LEN, FILLER);

    let mut line2_raw = String::with_capacity(TD3_LINE_LEN);
    for (key, value, width, upper) in [
        ("passport_number", &fields.passport_number, spans::PASSPORT_NUMBER.width(), false),
        ("passport_check", &fields.passport_check, 1, false),
        ("nationality", &fields.nationality, spans::NATIONALITY.width(), true),
        ("birth_date", &fields.birth_date, spans::BIRTH_DATE.width(), false),
        ("birth_check", &fields.birth_check, 1, false),
        ("sex", &fields.sex, spans::GENDER.width(), true),
        ("expiration_date", &fields.expiration_date, spans::EXPIRATION_DATE.width(), false),
        ("expiration_check", &fields.expiration_check, 1, false),
        ("personal_number", &fields.personal_number, spans::PERSONAL_NUMBER.width(), false),
        ("personal_check", &fields.personal_check, 1, false),
        ("final_check", &fields.final_check, 1, false),
    ] {
        let slot = slots.fit(key, text(value), width);
        if upper {
            line2_raw.push_str(&slot.to_uppercase());
        } else {
            line2_raw.push_str(&slot);
        }
    }
    let line2 = pad_or_truncate(&line2_raw, TD3_LINE_LEN, FILLER);

    if !slots.truncated.is_empty() {
        tracing::debug!(fields = ?slots.truncated, "mrz input truncated to fit TD3 slots");
    }
    EncodedMrz {
        lines: MrzLines::new(line1, line2),
        truncated: slots.truncated,
    }
}

#[derive(Default)]
struct SlotWriter {
    truncated: Vec<&'static str>,
}

impl SlotWriter {
    fn fit(&mut self, key: &'static str, value: &str, width: usize) -> String {
        let (slot, cut) = fit_slot(value, width, FILLER);
        if cut {
            self.truncated.push(key);
        }
        slot
    }
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}
