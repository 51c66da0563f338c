//! Fixed-width slot primitives and name-block handling.

use crate::layout::FILLER;

/// Two consecutive fillers separate the surname from the given names.
const NAME_SEPARATOR: &str = "<<";

/// Take exactly `end - start` characters starting at character index `start`.
///
/// Callers guarantee the bounds; the line length is checked once upstream.
pub fn slice_exact(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end - start).collect()
}

/// Truncate `value` to `width` characters or right-pad it with `fill`.
pub fn pad_or_truncate(value: &str, width: usize, fill: char) -> String {
    let mut chars: Vec<char> = value.chars().take(width).collect();
    chars.resize(width, fill);
    chars.into_iter().collect()
}

/// Like [`pad_or_truncate`], also reporting whether input was dropped.
pub(crate) fn fit_slot(value: &str, width: usize, fill: char) -> (String, bool) {
    let truncated = value.chars().count() > width;
    (pad_or_truncate(value, width, fill), truncated)
}

/// Fillers become spaces, whitespace runs collapse, ends are trimmed.
pub fn normalize_name(raw: &str) -> String {
    raw.replace(FILLER, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a raw name block into `(surname, given_names)` on the first `<<`.
///
/// Without a separator the whole block is the surname and the given names are empty.
pub fn split_name_block(raw: &str) -> (String, String) {
    match raw.split_once(NAME_SEPARATOR) {
        Some((surname, given)) => (normalize_name(surname), normalize_name(given)),
        None => (normalize_name(raw), String::new()),
    }
}

/// Inverse of [`split_name_block`]: `SURNAME<<GIVEN<NAMES`, uppercased.
pub fn compose_name_block(surname: &str, given_names: &str) -> String {
    let surname = to_filler_words(surname);
    let given = to_filler_words(given_names);
    if given.is_empty() {
        surname
    } else {
        format!("{surname}{NAME_SEPARATOR}{given}")
    }
}

/// Checksum-ready form of a field: every filler becomes `0`.
pub fn filler_to_zero(s: &str) -> String {
    s.replace(FILLER, "0")
}

fn to_filler_words(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(FILLER.to_string().as_str())
}
