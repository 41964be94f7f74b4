//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are carried through sinks.
//!
//! Sinks never look inside a [`Term`]:
//! this type only exists so that extractors and terminal sinks agree on what they exchange.
use std::fmt;

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// A straightforward representation of an RDF term as an enum.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Term {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(Box<str>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(Box<str>),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal) with a datatype
    LiteralDatatype(Box<str>, Box<str>),
    /// An RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string)
    LiteralLanguage(Box<str>, Box<str>),
}

use Term::*;

impl Term {
    /// Build an IRI term.
    pub fn iri<T: Into<Box<str>>>(iri: T) -> Self {
        Iri(iri.into())
    }

    /// Build a blank node term.
    pub fn bnode<T: Into<Box<str>>>(id: T) -> Self {
        BlankNode(id.into())
    }

    /// Build a plain literal (`xsd:string`).
    pub fn literal<T: Into<Box<str>>>(lex: T) -> Self {
        LiteralDatatype(lex.into(), XSD_STRING.into())
    }

    /// Build a literal with the given datatype.
    pub fn literal_dt<T: Into<Box<str>>, U: Into<Box<str>>>(lex: T, datatype: U) -> Self {
        LiteralDatatype(lex.into(), datatype.into())
    }

    /// Build a language-tagged literal.
    pub fn literal_lang<T: Into<Box<str>>, U: Into<Box<str>>>(lex: T, tag: U) -> Self {
        LiteralLanguage(lex.into(), tag.into())
    }
}

/// Formats the term in N-Triples style.
///
/// NB: lexical forms are not escaped, so the output is for diagnostics only.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Iri(iri) => write!(f, "<{}>", iri),
            BlankNode(id) => write!(f, "_:{}", id),
            LiteralDatatype(lex, dt) if &dt[..] == XSD_STRING => write!(f, "{:?}", lex),
            LiteralDatatype(lex, dt) => write!(f, "{:?}^^<{}>", lex, dt),
            LiteralLanguage(lex, tag) => write!(f, "{:?}@{}", lex, tag),
        }
    }
}
