//! # doc_model
//!
//! Read-only annotation model for the syntax-tree viewer.
//!
//! The external renderer bakes per-node annotations (kind, source position,
//! reference target, error grouping, symbol rows) into the rendered document.
//! This crate materializes those annotations once into an explicit in-memory
//! tree keyed by node identity, so parent and reference lookups are cheap and
//! independent of any rendering concern.
//!
//! The navigation core never mutates this model; everything selection-driven
//! (highlights, panel visibility) lives in the overlay state instead.

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;
#[cfg(feature = "json")]
pub mod json;

mod document;
mod types;

pub use crate::document::{BuildError, Document, DocumentBuilder};
pub use crate::types::{Annotation, NodeId, SymbolRow};
