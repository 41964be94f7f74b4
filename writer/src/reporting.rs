//! A [`TripleSink`] decorator collecting statistics over a whole session.
use sluice_api::prelude::*;
use std::collections::BTreeSet;
use std::fmt;

/// A [`TripleSink`] decorator that collects information about the extraction process,
/// such as the extractors used and the total number of triples.
///
/// Counters are never reset: they cover every document seen since this sink was built.
/// All events are forwarded unchanged to the wrapped sink.
#[derive(Debug)]
pub struct ReportingSink<S> {
    wrapped: S,
    extractor_names: BTreeSet<Box<str>>,
    total_triples: usize,
    total_documents: usize,
}

impl<S: TripleSink> ReportingSink<S> {
    /// Build a new reporting sink wrapping `sink`.
    pub fn new(sink: S) -> Self {
        ReportingSink {
            wrapped: sink,
            extractor_names: BTreeSet::new(),
            total_triples: 0,
            total_documents: 0,
        }
    }

    /// The names of all the extractors that produced at least one triple, in alphabetical order.
    pub fn extractor_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.extractor_names.iter().map(|name| &name[..])
    }

    /// The number of triples received so far.
    pub fn total_triples(&self) -> usize {
        self.total_triples
    }

    /// The number of documents started so far.
    pub fn total_documents(&self) -> usize {
        self.total_documents
    }

    /// A snapshot of the statistics collected so far.
    pub fn report(&self) -> Report {
        Report {
            extractor_names: self.extractor_names.iter().map(|n| n.to_string()).collect(),
            total_triples: self.total_triples,
            total_documents: self.total_documents,
        }
    }

    /// Borrow the wrapped sink.
    pub fn wrapped(&self) -> &S {
        &self.wrapped
    }

    /// Unwrap this decorator to get the wrapped sink back.
    pub fn into_inner(self) -> S {
        self.wrapped
    }
}

impl<S: TripleSink> TripleSink for ReportingSink<S> {
    fn start_document(&mut self, document: &DocumentIri) -> SinkResult {
        self.total_documents += 1;
        self.wrapped.start_document(document)
    }

    fn open_context(&mut self, context: &ExtractionContext) -> SinkResult {
        self.wrapped.open_context(context)
    }

    fn close_context(&mut self, context: &ExtractionContext) -> SinkResult {
        self.wrapped.close_context(context)
    }

    fn receive_namespace(
        &mut self,
        prefix: &str,
        iri: &str,
        context: &ExtractionContext,
    ) -> SinkResult {
        self.wrapped.receive_namespace(prefix, iri, context)
    }

    fn receive_triple(
        &mut self,
        s: &Term,
        p: &Term,
        o: &Term,
        context: &ExtractionContext,
    ) -> SinkResult {
        let name = context.extractor_name();
        if !self.extractor_names.contains(name) {
            log::trace!("first triple from extractor {}", name);
            self.extractor_names.insert(name.into());
        }
        self.total_triples += 1;
        self.wrapped.receive_triple(s, p, o, context)
    }

    fn set_content_length(&mut self, length: u64) -> SinkResult {
        self.wrapped.set_content_length(length)
    }

    fn end_document(&mut self, document: &DocumentIri) -> SinkResult {
        self.wrapped.end_document(document)
    }

    fn close(&mut self) -> SinkResult {
        log::debug!("closing reporting sink: {}", self.report());
        self.wrapped.close()
    }
}

/// Statistics collected by a [`ReportingSink`] at a given time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Report {
    /// Names of the extractors that produced at least one triple.
    pub extractor_names: BTreeSet<String>,
    /// Number of triples received.
    pub total_triples: usize,
    /// Number of documents started.
    pub total_documents: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} documents, {} triples, extractors: [",
            self.total_documents, self.total_triples
        )?;
        for (i, name) in self.extractor_names.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        f.write_str("]")
    }
}
