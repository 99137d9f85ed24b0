//! Search patterns over statement positions.
//!
//! A pattern field is a wildcard, a single term, or a set of terms. Patterns
//! can be built directly or parsed from a compact text form:
//!
//! ```text
//! ?  or  *                 wildcard
//! <http://sbols.org/v2#component>
//! sbol:component           prefixed name (see sbolgraph_vocab::PREFIXES)
//! "42"                     plain literal
//! _:b0                     blank node
//! [sbol:component sbol:functionalComponent]
//! ```

use regex_lite::Regex;
use sbolgraph_core::{GraphError, GraphResult, Iri, Statement, Term};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Pattern for one statement position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermPattern {
    /// Match anything.
    Any,
    /// Match exactly one term.
    One(Term),
    /// Match any term of a non-empty set.
    AnyOf(BTreeSet<Term>),
}

impl TermPattern {
    pub fn any() -> Self {
        TermPattern::Any
    }

    pub fn one(term: impl Into<Term>) -> Self {
        TermPattern::One(term.into())
    }

    /// A set pattern. An empty set is rejected, since it could never match.
    pub fn any_of<T: Into<Term>>(terms: impl IntoIterator<Item = T>) -> GraphResult<Self> {
        let set: BTreeSet<Term> = terms.into_iter().map(Into::into).collect();
        if set.is_empty() {
            return Err(GraphError::invalid_pattern("[]", "empty term set"));
        }
        Ok(TermPattern::AnyOf(set))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, TermPattern::Any)
    }

    pub fn matches(&self, term: &Term) -> bool {
        match self {
            TermPattern::Any => true,
            TermPattern::One(t) => t == term,
            TermPattern::AnyOf(set) => set.contains(term),
        }
    }

    /// Match against a predicate IRI without building a term.
    pub fn matches_iri(&self, iri: &Iri) -> bool {
        match self {
            TermPattern::Any => true,
            TermPattern::One(t) => t.as_iri() == Some(iri),
            TermPattern::AnyOf(set) => set.iter().any(|t| t.as_iri() == Some(iri)),
        }
    }

    /// Parse one pattern field.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let text = text.trim();
        if text == "?" || text == "*" {
            return Ok(TermPattern::Any);
        }
        if let Some(inner) = text.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .ok_or_else(|| GraphError::invalid_pattern(text, "unterminated term set"))?;
            let terms = inner
                .split_whitespace()
                .map(|t| parse_term(t).map_err(|reason| GraphError::invalid_pattern(text, reason)))
                .collect::<GraphResult<Vec<Term>>>()?;
            return Self::any_of(terms).map_err(|_| GraphError::invalid_pattern(text, "empty term set"));
        }
        parse_term(text)
            .map(TermPattern::One)
            .map_err(|reason| GraphError::invalid_pattern(text, reason))
    }
}

impl From<Term> for TermPattern {
    fn from(term: Term) -> Self {
        TermPattern::One(term)
    }
}

impl From<&str> for TermPattern {
    fn from(iri: &str) -> Self {
        TermPattern::One(Term::iri(iri))
    }
}

/// A `(subject, predicate, object)` pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: TermPattern,
    pub predicate: TermPattern,
    pub object: TermPattern,
}

impl TriplePattern {
    pub fn new(
        subject: impl Into<TermPattern>,
        predicate: impl Into<TermPattern>,
        object: impl Into<TermPattern>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Parse `"<s> <p> <o>"` where each field uses the [`TermPattern`] syntax.
    pub fn parse(text: &str) -> GraphResult<Self> {
        let fields: Vec<&str> = cached_regex(&TOKEN_RE, TOKEN_PATTERN)?
            .find_iter(text)
            .map(|m| m.as_str())
            .collect();
        let [s, p, o] = fields.as_slice() else {
            return Err(GraphError::invalid_pattern(
                text,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        };
        Ok(Self {
            subject: TermPattern::parse(s)?,
            predicate: TermPattern::parse(p)?,
            object: TermPattern::parse(o)?,
        })
    }

    pub fn matches(&self, statement: &Statement) -> bool {
        self.subject.matches(statement.subject())
            && self.predicate.matches_iri(statement.predicate())
            && self.object.matches(statement.object())
    }
}

const TOKEN_PATTERN: &str = r#"\[[^\]]*\]?|<[^>]*>?|"[^"]*"?|\S+"#;
const PREFIXED_PATTERN: &str = r"^([A-Za-z][A-Za-z0-9_-]*):([^\s<>]*)$";

static TOKEN_RE: OnceLock<Result<Regex, String>> = OnceLock::new();
static PREFIXED_RE: OnceLock<Result<Regex, String>> = OnceLock::new();

/// Compile a fixed regex once and hand out the cached result.
fn cached_regex(
    cell: &'static OnceLock<Result<Regex, String>>,
    source: &'static str,
) -> GraphResult<&'static Regex> {
    cell.get_or_init(|| Regex::new(source).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| GraphError::invalid_pattern(source, e.clone()))
}

fn parse_term(text: &str) -> Result<Term, String> {
    if let Some(rest) = text.strip_prefix('<') {
        let iri = rest
            .strip_suffix('>')
            .ok_or_else(|| "unterminated IRI".to_string())?;
        if iri.is_empty() || iri.contains(char::is_whitespace) {
            return Err(format!("malformed IRI '{}'", iri));
        }
        return Ok(Term::iri(iri));
    }
    if let Some(rest) = text.strip_prefix('"') {
        let lexical = rest
            .strip_suffix('"')
            .ok_or_else(|| "unterminated literal".to_string())?;
        return Ok(Term::literal(lexical));
    }
    if let Some(label) = text.strip_prefix("_:") {
        if label.is_empty() {
            return Err("empty blank node label".to_string());
        }
        return Ok(Term::blank(label));
    }
    let caps = cached_regex(&PREFIXED_RE, PREFIXED_PATTERN)
        .map_err(|e| e.to_string())?
        .captures(text)
        .ok_or_else(|| format!("unrecognized term '{}'", text))?;
    let (prefix, local) = (&caps[1], &caps[2]);
    sbolgraph_vocab::expand(prefix, local)
        .map(Term::iri)
        .ok_or_else(|| format!("unknown prefix '{}'", prefix))
}
