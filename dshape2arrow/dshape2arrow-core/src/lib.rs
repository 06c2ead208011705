//! Arrow-independent datashape type tree for `dshape2arrow`.
//!
//! This crate defines the [`Shape`] intermediate representation: an immutable
//! value tree describing scalars, optionals, dimensions, records, and
//! anonymous tuples in the datashape language. It carries no knowledge of the
//! columnar engine side; the Arrow mapping lives in `dshape2arrow-arrow`.

mod error;
mod shape;

pub use error::ShapeError;
pub use shape::{DimSize, RecordField, RecordFields, ScalarKind, Shape};
