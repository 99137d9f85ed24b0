//! Parsing documents into statements.

use crate::error::{LoadError, LoadResult};
use crate::format::{LoadOptions, RdfFormat};
use sbolgraph_core::{Literal, Statement, Term};
use sbolgraph_graph::{StatementStore, StoreConfig};
use sophia_api::source::{StreamError, TripleSource};
use sophia_api::term::{Term as RdfTerm, TermKind};
use sophia_api::triple::Triple;
use sophia_turtle::parser::{nt, turtle};
use std::fs;
use std::path::Path;
use tracing::info;

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Parse a document held in memory.
pub fn load_str(text: &str, format: RdfFormat) -> LoadResult<Vec<Statement>> {
    let statements = match format {
        RdfFormat::NTriples => collect(nt::parse_str(text), format),
        RdfFormat::Turtle => collect(turtle::parse_str(text), format),
        RdfFormat::RdfXml => collect(sophia_xml::parser::parse_str(text), format),
    }?;
    info!(%format, statements = statements.len(), "loaded statements");
    Ok(statements)
}

/// Read and parse a file.
pub fn load_file(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<Vec<Statement>> {
    let path = path.as_ref();
    let format = options.resolve_format(path)?;
    let text = fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
    load_str(&text, format)
}

/// Read a file straight into a statement store.
pub fn load_store(
    path: impl AsRef<Path>,
    options: &LoadOptions,
    config: StoreConfig,
) -> LoadResult<StatementStore> {
    let statements = load_file(path, options)?;
    Ok(StatementStore::with_config(statements, config))
}

/// Parse an in-memory document straight into a statement store.
pub fn load_store_str(text: &str, format: RdfFormat, config: StoreConfig) -> LoadResult<StatementStore> {
    let statements = load_str(text, format)?;
    Ok(StatementStore::with_config(statements, config))
}

fn collect<S: TripleSource>(mut source: S, format: RdfFormat) -> LoadResult<Vec<Statement>> {
    let mut statements = Vec::new();
    source
        .try_for_each_triple(|triple| -> LoadResult<()> {
            statements.push(convert_triple(&triple)?);
            Ok(())
        })
        .map_err(|e| match e {
            StreamError::SourceError(e) => LoadError::parse(format.name(), e.to_string()),
            StreamError::SinkError(e) => e,
        })?;
    Ok(statements)
}

fn convert_triple<T: Triple>(triple: &T) -> LoadResult<Statement> {
    let subject = convert_term(triple.s(), "subject")?;
    let predicate = match convert_term(triple.p(), "predicate")? {
        Term::Iri(iri) => iri,
        other => return Err(LoadError::unsupported_term("predicate", other.to_string())),
    };
    let object = convert_term(triple.o(), "object")?;
    Ok(Statement::new(subject, predicate, object))
}

fn convert_term<T: RdfTerm>(term: T, position: &'static str) -> LoadResult<Term> {
    let converted = match term.kind() {
        TermKind::Iri => term.iri().map(|iri| Term::iri(iri.as_str())),
        TermKind::BlankNode => term.bnode_id().map(|id| Term::blank(id.as_str())),
        TermKind::Literal => convert_literal(&term).map(Term::Literal),
        _ => None,
    };
    converted.ok_or_else(|| LoadError::unsupported_term(position, format!("{:?}", term.kind())))
}

fn convert_literal<T: RdfTerm>(term: &T) -> Option<Literal> {
    let lexical = term.lexical_form()?.to_string();
    if let Some(tag) = term.language_tag() {
        return Some(Literal::lang(lexical, tag.as_str()));
    }
    match term.datatype() {
        Some(datatype) if datatype.as_str() != XSD_STRING => Some(Literal::typed(lexical, datatype.as_str())),
        _ => Some(Literal::new(lexical)),
    }
}
