//! This crate aims to provide a toolkit
//! for relaying the output of [RDF] extractors in Rust.
//!
//! While an extraction driver processes a document,
//! it reports what it finds (namespaces, triples, extractor activity)
//! to a [`TripleSink`](api::sink::TripleSink).
//! Sinks can be stacked to log, count or duplicate those events
//! before they reach terminal sinks (serializers, triple stores...).
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//!
//! # Getting Started
//!
//! ```
//! use sluice::api::prelude::*;
//! use sluice::writer::{CompositeSink, LoggingSink, ReportingSink};
//!
//! # fn main() -> Result<(), SinkError> {
//! let terminals = CompositeSink::new();
//! let mut sink = LoggingSink::new(ReportingSink::new(terminals), Vec::<u8>::new());
//!
//! let doc = DocumentIri::new("http://example.org/doc.html").unwrap();
//! let ctx = ExtractionContext::new("html-title", doc.clone());
//! sink.start_document(&doc)?;
//! sink.receive_triple(
//!     &Term::iri("http://example.org/doc.html"),
//!     &Term::iri("http://purl.org/dc/terms/title"),
//!     &Term::literal("Hello"),
//!     &ctx,
//! )?;
//! sink.end_document(&doc)?;
//! assert_eq!(sink.wrapped().total_triples(), 1);
//!
//! let line = String::from_utf8(sink.destination().unwrap().clone()).unwrap();
//! assert!(line.ends_with("\ttrue\t[ html-title:1]\n"));
//! sink.close()?;
//! # Ok(())
//! # }
//! ```

pub use sluice_api as api;
pub use sluice_writer as writer;
