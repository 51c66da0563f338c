//! Seams for the scanner and document store that feed the codec.
//!
//! Neither is implemented here. The codec only consumes what they return.

use std::collections::HashMap;

use crate::error::Result;
use crate::record::{MrzFields, MrzLines, MrzRecord};

/// A device that reads the MRZ off a document.
pub trait MrzScanner {
    /// Returns `None` when no scan is available.
    fn scan(&self) -> Option<MrzLines>;
}

/// A store of travel documents keyed by identifier.
pub trait DocumentLookup {
    /// Returns `None` when the identifier is unknown.
    fn lookup(&self, document_id: &str) -> Option<MrzFields>;
}

/// Stand-in for missing scanner hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableScanner;

impl MrzScanner for UnavailableScanner {
    fn scan(&self) -> Option<MrzLines> {
        None
    }
}

/// Stand-in for a missing document database.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyDocumentStore;

impl DocumentLookup for EmptyDocumentStore {
    fn lookup(&self, _document_id: &str) -> Option<MrzFields> {
        None
    }
}

/// Fixed set of documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: HashMap<String, MrzFields>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<S: Into<String>>(&mut self, document_id: S, fields: MrzFields) {
        self.documents.insert(document_id.into(), fields);
    }
}

impl DocumentLookup for InMemoryDocumentStore {
    fn lookup(&self, document_id: &str) -> Option<MrzFields> {
        let found = self.documents.get(document_id).cloned();
        if found.is_none() {
            tracing::debug!(document_id, "document not found");
        }
        found
    }
}

/// Scan and decode in one step. An absent scan is `Ok(None)`, not an error.
pub fn decode_from_scanner<S: MrzScanner + ?Sized>(scanner: &S) -> Result<Option<MrzRecord>> {
    match scanner.scan() {
        Some(lines) => lines.decode().map(Some),
        None => {
            tracing::debug!("no MRZ scan available");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MrzError;

    struct FixedScanner(MrzLines);

    impl MrzScanner for FixedScanner {
        fn scan(&self) -> Option<MrzLines> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn unavailable_scanner_yields_no_record() {
        assert_eq!(decode_from_scanner(&UnavailableScanner), Ok(None));
    }

    #[test]
    fn scanned_lines_are_decoded() {
        let scanner = FixedScanner(MrzLines::new(
            "P<USASMITH<<JOHN<JAMES<<<<<<<<<<<<<<<<<<<<<<",
            "1234567890USA9001011M2505015<<<<<<<<<<<<<<<8",
        ));
        let record = decode_from_scanner(&scanner).unwrap().unwrap();
        assert_eq!(record.surname, "SMITH");
    }

    #[test]
    fn malformed_scan_surfaces_length_error() {
        let scanner = FixedScanner(MrzLines::new("P<USA", "123"));
        assert!(matches!(
            decode_from_scanner(&scanner),
            Err(MrzError::Length { line: 1, .. })
        ));
    }

    #[test]
    fn document_stores() {
        assert_eq!(EmptyDocumentStore.lookup("DOC456"), None);

        let mut store = InMemoryDocumentStore::new();
        store.insert(
            "DOC123",
            MrzFields {
                passport_number: Some("123456789".into()),
                name: Some("SMITH<<JOHN".into()),
                nationality: Some("USA".into()),
                ..MrzFields::default()
            },
        );
        let found = store.lookup("DOC123").unwrap();
        assert_eq!(found.passport_number.as_deref(), Some("123456789"));
        assert_eq!(store.lookup("DOC999"), None);
    }
}
