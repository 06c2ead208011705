//! The datashape intermediate representation.

mod format;
mod types;

pub use types::{DimSize, RecordField, RecordFields, ScalarKind, Shape};
