use super::*;
use std::cell::RefCell;
use std::rc::Rc;

//
// foreign implementations
//

macro_rules! forward_triple_sink {
    ($this: ident => $target: expr) => {
        fn start_document(&mut self, document: &DocumentIri) -> SinkResult {
            let $this = self;
            $target.start_document(document)
        }

        fn open_context(&mut self, context: &ExtractionContext) -> SinkResult {
            let $this = self;
            $target.open_context(context)
        }

        fn close_context(&mut self, context: &ExtractionContext) -> SinkResult {
            let $this = self;
            $target.close_context(context)
        }

        fn receive_namespace(
            &mut self,
            prefix: &str,
            iri: &str,
            context: &ExtractionContext,
        ) -> SinkResult {
            let $this = self;
            $target.receive_namespace(prefix, iri, context)
        }

        fn receive_triple(
            &mut self,
            s: &Term,
            p: &Term,
            o: &Term,
            context: &ExtractionContext,
        ) -> SinkResult {
            let $this = self;
            $target.receive_triple(s, p, o, context)
        }

        fn set_content_length(&mut self, length: u64) -> SinkResult {
            let $this = self;
            $target.set_content_length(length)
        }

        fn end_document(&mut self, document: &DocumentIri) -> SinkResult {
            let $this = self;
            $target.end_document(document)
        }

        fn close(&mut self) -> SinkResult {
            let $this = self;
            $target.close()
        }
    };
}

// mutable reference to TripleSink

impl<'a, S: TripleSink + ?Sized> TripleSink for &'a mut S {
    forward_triple_sink!(this => (**this));
}

// Box<TripleSink>

impl<S: TripleSink + ?Sized> TripleSink for Box<S> {
    forward_triple_sink!(this => (**this));
}

// Rc<RefCell<TripleSink>>
//
// NB: the sink is borrowed for the duration of each call,
// so a sink must not re-enter itself through a shared handle.

impl<S: TripleSink + ?Sized> TripleSink for Rc<RefCell<S>> {
    forward_triple_sink!(this => this.borrow_mut());
}
