//! Sinks and destinations for testing pipelines: [`RecordingSink`], [`FailingSink`] and [`SharedWriter`].
use sluice_api::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// An event received by a [`RecordingSink`], with the name of that sink.
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Event {
    StartDocument(&'static str, DocumentIri),
    OpenContext(&'static str, ExtractionContext),
    CloseContext(&'static str, ExtractionContext),
    Namespace(&'static str, String, String, ExtractionContext),
    Triple(&'static str, [Term; 3], ExtractionContext),
    ContentLength(&'static str, u64),
    EndDocument(&'static str, DocumentIri),
    Close(&'static str),
}

impl Event {
    /// The name of the sink that recorded this event.
    pub fn sink_name(&self) -> &'static str {
        use Event::*;
        match self {
            StartDocument(n, _)
            | OpenContext(n, _)
            | CloseContext(n, _)
            | Namespace(n, ..)
            | Triple(n, ..)
            | ContentLength(n, _)
            | EndDocument(n, _)
            | Close(n) => n,
        }
    }
}

/// A shared, ordered log of [`Event`]s.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Build an empty [`EventLog`].
pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// A sink appending every event it receives to an [`EventLog`].
///
/// Several recording sinks can share the same log,
/// which makes the relative order of their deliveries observable.
#[derive(Clone, Debug)]
pub struct RecordingSink {
    name: &'static str,
    log: EventLog,
}

impl RecordingSink {
    /// Build a recording sink called `name`, appending to `log`.
    pub fn new(name: &'static str, log: EventLog) -> Self {
        RecordingSink { name, log }
    }

    fn push(&self, event: Event) -> SinkResult {
        self.log.borrow_mut().push(event);
        Ok(())
    }
}

impl TripleSink for RecordingSink {
    fn start_document(&mut self, document: &DocumentIri) -> SinkResult {
        self.push(Event::StartDocument(self.name, document.clone()))
    }

    fn open_context(&mut self, context: &ExtractionContext) -> SinkResult {
        self.push(Event::OpenContext(self.name, context.clone()))
    }

    fn close_context(&mut self, context: &ExtractionContext) -> SinkResult {
        self.push(Event::CloseContext(self.name, context.clone()))
    }

    fn receive_namespace(
        &mut self,
        prefix: &str,
        iri: &str,
        context: &ExtractionContext,
    ) -> SinkResult {
        self.push(Event::Namespace(
            self.name,
            prefix.to_string(),
            iri.to_string(),
            context.clone(),
        ))
    }

    fn receive_triple(
        &mut self,
        s: &Term,
        p: &Term,
        o: &Term,
        context: &ExtractionContext,
    ) -> SinkResult {
        self.push(Event::Triple(
            self.name,
            [s.clone(), p.clone(), o.clone()],
            context.clone(),
        ))
    }

    fn set_content_length(&mut self, length: u64) -> SinkResult {
        self.push(Event::ContentLength(self.name, length))
    }

    fn end_document(&mut self, document: &DocumentIri) -> SinkResult {
        self.push(Event::EndDocument(self.name, document.clone()))
    }

    fn close(&mut self) -> SinkResult {
        self.push(Event::Close(self.name))
    }
}

/// A sink failing on every event, with a [`SinkError::Custom`] carrying its message.
#[derive(Clone, Debug)]
pub struct FailingSink(pub &'static str);

impl FailingSink {
    fn fail(&self) -> SinkResult {
        Err(SinkError::custom(self.0))
    }
}

impl TripleSink for FailingSink {
    fn start_document(&mut self, _: &DocumentIri) -> SinkResult {
        self.fail()
    }

    fn open_context(&mut self, _: &ExtractionContext) -> SinkResult {
        self.fail()
    }

    fn close_context(&mut self, _: &ExtractionContext) -> SinkResult {
        self.fail()
    }

    fn receive_namespace(&mut self, _: &str, _: &str, _: &ExtractionContext) -> SinkResult {
        self.fail()
    }

    fn receive_triple(&mut self, _: &Term, _: &Term, _: &Term, _: &ExtractionContext) -> SinkResult {
        self.fail()
    }

    fn set_content_length(&mut self, _: u64) -> SinkResult {
        self.fail()
    }

    fn end_document(&mut self, _: &DocumentIri) -> SinkResult {
        self.fail()
    }

    fn close(&mut self) -> SinkResult {
        self.fail()
    }
}

/// A document IRI under `http://example.org/`.
pub fn doc(name: &str) -> DocumentIri {
    DocumentIri::new_unchecked(format!("http://example.org/{}", name))
}

/// A context for `extractor` on `document`.
pub fn ctx(extractor: &str, document: &DocumentIri) -> ExtractionContext {
    ExtractionContext::new(extractor, document.clone())
}

/// An IRI term under `http://example.org/`.
pub fn ex(suffix: &str) -> Term {
    Term::iri(format!("http://example.org/{}", suffix))
}

/// Install `env_logger` for tests, ignoring repeated initialisation.
#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An in-memory [`Write`](std::io::Write) destination, observable through its clones.
#[derive(Clone, Debug, Default)]
pub struct SharedWriter {
    state: Rc<RefCell<WriterState>>,
}

#[derive(Debug, Default)]
struct WriterState {
    bytes: Vec<u8>,
    flushes: usize,
    failing_flush: bool,
}

impl SharedWriter {
    /// Build a writer whose `flush` always fails.
    pub fn failing_flush() -> Self {
        let w = Self::default();
        w.state.borrow_mut().failing_flush = true;
        w
    }

    /// The lines written so far.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.state.borrow().bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// How many times `flush` was called.
    pub fn flushes(&self) -> usize {
        self.state.borrow().flushes
    }

    /// Whether every other handle on this writer has been dropped.
    pub fn is_released(&self) -> bool {
        Rc::strong_count(&self.state) == 1
    }
}

impl std::io::Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.state.borrow_mut().bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let mut state = self.state.borrow_mut();
        state.flushes += 1;
        if state.failing_flush {
            Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "flush failed",
            ))
        } else {
            Ok(())
        }
    }
}
