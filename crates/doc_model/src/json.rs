//! Loader for the renderer's serialized annotation dump.
//!
//! Field names mirror the data attributes of the rendered document
//! (`data-kind`, `data-line`, `data-char`, `data-refNodeId`,
//! `data-error-target`), so a dump can be produced by the same pass that
//! writes the markup.

use crate::document::{BuildError, Document, DocumentBuilder};
use crate::types::{Annotation, SymbolRow};
use serde::Deserialize;
use std::fmt;

/// One node of the annotation dump; children nest as in the document.
#[derive(Debug, Deserialize)]
pub struct AnnotationRecord {
    pub id: String,
    pub kind: String,
    pub line: u32,
    #[serde(rename = "char")]
    pub column: u32,
    #[serde(default, rename = "refNodeId")]
    pub referenced: Option<String>,
    #[serde(default, rename = "errorTarget")]
    pub error_target: Option<String>,
    #[serde(default)]
    pub symbols: Vec<SymbolRecord>,
    #[serde(default)]
    pub children: Vec<AnnotationRecord>,
}

#[derive(Debug, Deserialize)]
pub struct SymbolRecord {
    pub name: String,
    pub describes: String,
}

#[derive(Debug)]
pub enum LoadError {
    Parse(serde_json::Error),
    Build(BuildError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "annotation dump is not valid JSON: {e}"),
            Self::Build(e) => write!(f, "annotation dump is not a valid document: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<BuildError> for LoadError {
    fn from(e: BuildError) -> Self {
        Self::Build(e)
    }
}

/// Build a [`Document`] from a JSON annotation dump (an array of roots).
pub fn document_from_json(input: &str) -> Result<Document, LoadError> {
    let roots: Vec<AnnotationRecord> = serde_json::from_str(input)?;
    let mut builder = Document::builder();
    for root in roots {
        add_record(&mut builder, root)?;
    }
    Ok(builder.finish()?)
}

fn add_record(builder: &mut DocumentBuilder, record: AnnotationRecord) -> Result<(), BuildError> {
    let mut annotation = Annotation::new(record.kind, record.line, record.column);
    if let Some(target) = record.referenced {
        annotation = annotation.with_reference(target.as_str());
    }
    if let Some(target) = record.error_target {
        annotation = annotation.with_error_target(target);
    }
    if !record.symbols.is_empty() {
        annotation = annotation.with_symbols(
            record
                .symbols
                .into_iter()
                .map(|s| SymbolRow::new(s.name, s.describes))
                .collect(),
        );
    }
    builder.open(record.id, annotation)?;
    for child in record.children {
        add_record(builder, child)?;
    }
    builder.close()
}
