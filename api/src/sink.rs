//! I define the [`TripleSink`] trait,
//! the callback contract through which an extraction driver
//! reports what it finds in a document.
//!
//! # Event order
//!
//! For each document, the driver calls
//! [`start_document`](TripleSink::start_document) once,
//! then any number of the other events,
//! then [`end_document`](TripleSink::end_document) once.
//! Contexts may be opened and closed several times, and may nest, inside that bracket.
//! [`set_content_length`](TripleSink::set_content_length) may be called at any time
//! before `end_document`; only the last value matters for that document.
//! Once the session is over, the driver calls [`close`](TripleSink::close) once.
//!
//! # Errors
//!
//! Every method returns a [`SinkResult`].
//! The first error interrupts the delivery of the current event,
//! and is handed back unchanged to the caller.
use crate::context::ExtractionContext;
use crate::document::DocumentIri;
use crate::error::SinkResult;
use crate::term::Term;

mod _foreign_impl;

/// A triple sink receives the events produced while extracting RDF from documents.
///
/// This trait is object-safe,
/// so that sinks of different types can be combined as `Box<dyn TripleSink>`.
pub trait TripleSink {
    /// Processing of `document` starts.
    fn start_document(&mut self, document: &DocumentIri) -> SinkResult;

    /// The extractor identified by `context` starts working.
    fn open_context(&mut self, context: &ExtractionContext) -> SinkResult;

    /// The extractor identified by `context` is done.
    fn close_context(&mut self, context: &ExtractionContext) -> SinkResult;

    /// The extractor identified by `context` bound `prefix` to the namespace `iri`.
    fn receive_namespace(
        &mut self,
        prefix: &str,
        iri: &str,
        context: &ExtractionContext,
    ) -> SinkResult;

    /// The extractor identified by `context` produced the triple (`s`, `p`, `o`).
    fn receive_triple(
        &mut self,
        s: &Term,
        p: &Term,
        o: &Term,
        context: &ExtractionContext,
    ) -> SinkResult;

    /// The current document is `length` bytes long.
    ///
    /// Sinks that do not need this information may ignore it,
    /// which is what the default implementation does.
    fn set_content_length(&mut self, length: u64) -> SinkResult {
        let _ = length;
        Ok(())
    }

    /// Processing of `document` is over.
    ///
    /// Implementations finalize any per-document state here.
    fn end_document(&mut self, document: &DocumentIri) -> SinkResult;

    /// The session is over: release any resource held by this sink.
    fn close(&mut self) -> SinkResult;
}
