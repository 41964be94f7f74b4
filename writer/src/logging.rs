//! A [`TripleSink`] decorator writing one summary line per document.
//!
//! Each line has five tab-separated fields:
//! the document IRI,
//! its content length (0 if never set),
//! the elapsed time in milliseconds,
//! whether any extractor produced at least one triple,
//! and the number of triples produced by each extractor, e.g.
//!
//! ```text
//! http://example.org/doc	1024	12	true	[ html-title:1 rdfa:7]
//! ```
use sluice_api::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};
use std::time::Instant;

/// [`LoggingSink`] configuration.
#[derive(Clone, Debug, Default)]
pub struct LoggingConfig {
    flush_each_document: bool,
}

impl LoggingConfig {
    /// Build the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the destination is flushed after each summary line.
    pub fn flush_each_document(&self) -> bool {
        self.flush_each_document
    }

    /// Flush the destination after each summary line (default: `false`).
    pub fn set_flush_each_document(&mut self, flush: bool) -> &mut Self {
        self.flush_each_document = flush;
        self
    }
}

/// This error is raised when building a [`LoggingSink`] without one of its collaborators.
#[derive(Debug, thiserror::Error)]
#[error("{0} cannot be missing")]
pub struct InvalidArgument(pub &'static str);

/// A [`TripleSink`] decorator that counts,
/// for each document, how many triples each extractor produced,
/// and writes a summary line to a destination when the document ends.
///
/// All events are forwarded to the wrapped sink.
/// The destination is owned by this sink,
/// and is flushed and released by [`close`](TripleSink::close).
pub struct LoggingSink<S, W: io::Write> {
    wrapped: S,
    destination: Option<W>,
    config: LoggingConfig,
    triple_counts: BTreeMap<Box<str>, usize>,
    start: Option<Instant>,
    content_length: u64,
}

impl<S, W> LoggingSink<S, W>
where
    S: TripleSink,
    W: io::Write,
{
    /// Build a new logging sink wrapping `sink` and writing to `destination`,
    /// with the default config.
    #[inline]
    pub fn new(sink: S, destination: W) -> Self {
        Self::new_with_config(sink, destination, LoggingConfig::default())
    }

    /// Build a new logging sink wrapping `sink` and writing to `destination`,
    /// with the given config.
    pub fn new_with_config(sink: S, destination: W, config: LoggingConfig) -> Self {
        LoggingSink {
            wrapped: sink,
            destination: Some(destination),
            config,
            triple_counts: BTreeMap::new(),
            start: None,
            content_length: 0,
        }
    }

    /// Start building a logging sink whose collaborators may not be known yet.
    pub fn builder() -> LoggingSinkBuilder<S, W> {
        LoggingSinkBuilder::new()
    }

    /// Borrow this sink's configuration.
    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Borrow the wrapped sink.
    pub fn wrapped(&self) -> &S {
        &self.wrapped
    }

    /// Borrow the destination, unless this sink has been closed.
    pub fn destination(&self) -> Option<&W> {
        self.destination.as_ref()
    }

    /// Unwrap this decorator to get the wrapped sink back.
    pub fn into_inner(self) -> S {
        self.wrapped
    }

    /// Build the summary of the current document, and reset per-document state.
    fn take_summary<'a>(&mut self, document: &'a DocumentIri) -> Summary<'a> {
        let elapsed_ms = self
            .start
            .take()
            .map(|start| start.elapsed().as_millis())
            .unwrap_or(0);
        let counts = std::mem::take(&mut self.triple_counts);
        Summary {
            document,
            content_length: std::mem::take(&mut self.content_length),
            elapsed_ms,
            success: counts.values().any(|&n| n > 0),
            counts,
        }
    }
}

impl<S, W> TripleSink for LoggingSink<S, W>
where
    S: TripleSink,
    W: io::Write,
{
    fn start_document(&mut self, document: &DocumentIri) -> SinkResult {
        self.wrapped.start_document(document)?;
        log::debug!("start logging {}", document);
        self.start = Some(Instant::now());
        Ok(())
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
        self.wrapped.receive_triple(s, p, o, context)?;
        let name = context.extractor_name();
        match self.triple_counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.triple_counts.insert(name.into(), 1);
            }
        }
        Ok(())
    }

    fn set_content_length(&mut self, length: u64) -> SinkResult {
        self.content_length = length;
        self.wrapped.set_content_length(length)
    }

    fn end_document(&mut self, document: &DocumentIri) -> SinkResult {
        let forwarded = self.wrapped.end_document(document);
        let summary = self.take_summary(document);
        forwarded?;
        log::debug!("end logging {} after {}ms", document, summary.elapsed_ms);
        let destination = self.destination.as_mut().ok_or(SinkError::Closed)?;
        writeln!(destination, "{}", summary)?;
        if self.config.flush_each_document {
            destination.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> SinkResult {
        let forwarded = self.wrapped.close();
        let released = match self.destination.take() {
            // the destination is dropped at the end of this arm
            Some(mut destination) => destination.flush(),
            None => {
                log::warn!("LoggingSink closed more than once");
                Ok(())
            }
        };
        forwarded?;
        released.map_err(SinkError::from)
    }
}

impl<S, W> fmt::Debug for LoggingSink<S, W>
where
    S: fmt::Debug,
    W: io::Write,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("LoggingSink")
            .field("wrapped", &self.wrapped)
            .field("closed", &self.destination.is_none())
            .field("config", &self.config)
            .field("triple_counts", &self.triple_counts)
            .field("content_length", &self.content_length)
            .finish()
    }
}

/// What [`LoggingSink`] writes for one document.
struct Summary<'a> {
    document: &'a DocumentIri,
    content_length: u64,
    elapsed_ms: u128,
    success: bool,
    counts: BTreeMap<Box<str>, usize>,
}

impl<'a> fmt::Display for Summary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t[",
            self.document, self.content_length, self.elapsed_ms, self.success
        )?;
        for (name, count) in &self.counts {
            write!(f, " {}:{}", name, count)?;
        }
        f.write_str("]")
    }
}

/// Builds a [`LoggingSink`], checking that all its collaborators were provided.
pub struct LoggingSinkBuilder<S, W> {
    sink: Option<S>,
    destination: Option<W>,
    config: LoggingConfig,
}

impl<S, W> Default for LoggingSinkBuilder<S, W> {
    fn default() -> Self {
        LoggingSinkBuilder {
            sink: None,
            destination: None,
            config: LoggingConfig::default(),
        }
    }
}

impl<S, W> LoggingSinkBuilder<S, W>
where
    S: TripleSink,
    W: io::Write,
{
    /// Build an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sink to wrap.
    pub fn sink(mut self, sink: S) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the destination of summary lines.
    pub fn destination(mut self, destination: W) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Set the configuration (default: [`LoggingConfig::default`]).
    pub fn config(mut self, config: LoggingConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the [`LoggingSink`].
    ///
    /// Fails if the wrapped sink or the destination is missing.
    pub fn build(self) -> Result<LoggingSink<S, W>, InvalidArgument> {
        let sink = self.sink.ok_or(InvalidArgument("wrapped sink"))?;
        let destination = self.destination.ok_or(InvalidArgument("destination"))?;
        Ok(LoggingSink::new_with_config(sink, destination, self.config))
    }
}
