//! I provide [`ExtractionContext`],
//! which attributes events to the extractor run that produced them.
use crate::document::DocumentIri;
use std::fmt;

/// Identifies one run of an extractor on a document.
///
/// The [extractor name](ExtractionContext::extractor_name)
/// is the key under which sinks aggregate their counts;
/// several contexts may share the same extractor name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ExtractionContext {
    extractor_name: Box<str>,
    document: DocumentIri,
    local_id: Option<Box<str>>,
}

impl ExtractionContext {
    /// Build a context for `extractor_name` processing `document`.
    pub fn new<T: Into<Box<str>>>(extractor_name: T, document: DocumentIri) -> Self {
        ExtractionContext {
            extractor_name: extractor_name.into(),
            document,
            local_id: None,
        }
    }

    /// Distinguish this run from other runs of the same extractor on the same document.
    pub fn with_local_id<T: Into<Box<str>>>(mut self, local_id: T) -> Self {
        self.local_id = Some(local_id.into());
        self
    }

    /// The name of the extractor.
    pub fn extractor_name(&self) -> &str {
        &self.extractor_name
    }

    /// The document being processed.
    pub fn document(&self) -> &DocumentIri {
        &self.document
    }

    /// The local identifier of this run, if any.
    pub fn local_id(&self) -> Option<&str> {
        self.local_id.as_deref()
    }
}

impl fmt::Display for ExtractionContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.extractor_name, self.document)?;
        if let Some(id) = &self.local_id {
            write!(f, "#{}", id)?;
        }
        Ok(())
    }
}
