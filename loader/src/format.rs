//! Input formats and load options.

use crate::error::{LoadError, LoadResult};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Serializations the loader can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfFormat {
    NTriples,
    Turtle,
    RdfXml,
}

impl RdfFormat {
    pub fn name(self) -> &'static str {
        match self {
            RdfFormat::NTriples => "N-Triples",
            RdfFormat::Turtle => "Turtle",
            RdfFormat::RdfXml => "RDF/XML",
        }
    }

    /// Guess the format from a file extension (without the dot).
    ///
    /// SBOL documents are usually RDF/XML saved as `.xml` or `.sbol`.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "nt" => Some(RdfFormat::NTriples),
            "ttl" => Some(RdfFormat::Turtle),
            "rdf" | "xml" | "owl" | "sbol" => Some(RdfFormat::RdfXml),
            _ => None,
        }
    }

    /// Guess the format from a path's extension.
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| LoadError::unsupported_format(path.display().to_string()))
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ntriples" | "n-triples" => Ok(RdfFormat::NTriples),
            "turtle" => Ok(RdfFormat::Turtle),
            "rdfxml" | "rdf/xml" => Ok(RdfFormat::RdfXml),
            other => Self::from_extension(other).ok_or_else(|| LoadError::unsupported_format(s)),
        }
    }
}

/// How to read a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Explicit format; guessed from the file extension when `None`.
    pub format: Option<RdfFormat>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: RdfFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// The format to read `path` with.
    pub fn resolve_format(&self, path: &Path) -> LoadResult<RdfFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => RdfFormat::from_path(path),
        }
    }
}
