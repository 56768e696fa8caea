//! Data model for outline extraction.
//!
//! This module defines the boundary types consumed from the document-parsing
//! collaborator (page dumps of positioned lines), the transient pipeline
//! types (paragraph units, feature vectors), and the output record emitted
//! to the serialization collaborator.

mod features;
mod geometry;
mod line;
mod outline;
mod page;
mod unit;

pub use features::FeatureVector;
pub use geometry::BoundingBox;
pub use line::{FontRun, RawLine};
pub use outline::{DocumentOutline, HeadingLevel, OutlineEntry};
pub use page::{DocumentContent, LineContent, PageContent};
pub use unit::ParagraphUnit;
