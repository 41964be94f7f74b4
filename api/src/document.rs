//! I provide [`DocumentIri`],
//! the identifier of the document an extraction driver is processing.
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// This error is raised when trying to build a [`DocumentIri`] from an invalid IRI.
#[derive(Debug, Error)]
#[error("The given IRI '{0}' is not valid according to RFC3987")]
pub struct InvalidIri(pub String);

/// An owned IRI identifying a document.
///
/// It is immutable, and sinks treat it as opaque:
/// it is only validated when built with [`DocumentIri::new`].
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DocumentIri(Box<str>);

impl DocumentIri {
    /// Build a new `DocumentIri`, checking that `iri` is an absolute IRI.
    pub fn new<T: Into<Box<str>>>(iri: T) -> Result<Self, InvalidIri> {
        let iri = iri.into();
        match oxiri::Iri::parse(&iri[..]) {
            Ok(_) => Ok(DocumentIri(iri)),
            Err(_) => Err(InvalidIri(iri.into())),
        }
    }

    /// Build a new `DocumentIri` from trusted data.
    pub fn new_unchecked<T: Into<Box<str>>>(iri: T) -> Self {
        DocumentIri(iri.into())
    }

    /// Borrow the underlying text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocumentIri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DocumentIri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for DocumentIri {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DocumentIri {
    fn eq(&self, other: &str) -> bool {
        &self.0[..] == other
    }
}

impl PartialEq<DocumentIri> for str {
    fn eq(&self, other: &DocumentIri) -> bool {
        self == &other.0[..]
    }
}

impl fmt::Display for DocumentIri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
