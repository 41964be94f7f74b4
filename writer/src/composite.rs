//! A [`TripleSink`] dispatching every event to several sinks.
use sluice_api::prelude::*;

/// A [`TripleSink`] wrapping zero or more other sinks,
/// and dispatching every event to each of them.
///
/// Children receive events in the order they were registered.
/// Dispatch is fail-fast:
/// the first child returning an error stops the delivery of that event
/// to the following children, and the error is returned as is.
///
/// Children are not deduplicated;
/// a sink registered twice (e.g. through an `Rc<RefCell<_>>`) receives every event twice.
#[derive(Default)]
pub struct CompositeSink<'a> {
    children: Vec<Box<dyn TripleSink + 'a>>,
}

impl<'a> CompositeSink<'a> {
    /// Build a composite sink with no children.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a composite sink with the given children, in that order.
    pub fn with_children<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TripleSink + 'a>>,
    {
        CompositeSink {
            children: children.into_iter().collect(),
        }
    }

    /// Append `child` to the list of children.
    pub fn add_child<S: TripleSink + 'a>(&mut self, child: S) -> &mut Self {
        self.children.push(Box::new(child));
        self
    }

    /// The number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether this composite has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn dispatch<F>(&mut self, event: &str, mut f: F) -> SinkResult
    where
        F: FnMut(&mut (dyn TripleSink + 'a)) -> SinkResult,
    {
        log::trace!("dispatching {} to {} children", event, self.children.len());
        for (i, child) in self.children.iter_mut().enumerate() {
            if let Err(err) = f(child.as_mut()) {
                log::debug!("child #{} failed on {}: {}", i, event, err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl<'a> TripleSink for CompositeSink<'a> {
    fn start_document(&mut self, document: &DocumentIri) -> SinkResult {
        self.dispatch("start_document", |c| c.start_document(document))
    }

    fn open_context(&mut self, context: &ExtractionContext) -> SinkResult {
        self.dispatch("open_context", |c| c.open_context(context))
    }

    fn close_context(&mut self, context: &ExtractionContext) -> SinkResult {
        self.dispatch("close_context", |c| c.close_context(context))
    }

    fn receive_namespace(
        &mut self,
        prefix: &str,
        iri: &str,
        context: &ExtractionContext,
    ) -> SinkResult {
        self.dispatch("receive_namespace", |c| {
            c.receive_namespace(prefix, iri, context)
        })
    }

    fn receive_triple(
        &mut self,
        s: &Term,
        p: &Term,
        o: &Term,
        context: &ExtractionContext,
    ) -> SinkResult {
        self.dispatch("receive_triple", |c| c.receive_triple(s, p, o, context))
    }

    fn set_content_length(&mut self, length: u64) -> SinkResult {
        self.dispatch("set_content_length", |c| c.set_content_length(length))
    }

    fn end_document(&mut self, document: &DocumentIri) -> SinkResult {
        self.dispatch("end_document", |c| c.end_document(document))
    }

    fn close(&mut self) -> SinkResult {
        self.dispatch("close", |c| c.close())
    }
}

impl<'a> std::fmt::Debug for CompositeSink<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("CompositeSink")
            .field("children", &self.children.len())
            .finish()
    }
}
