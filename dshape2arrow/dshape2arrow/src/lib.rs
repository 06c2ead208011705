//! Bidirectional, structural translation between the datashape type language
//! and Arrow schemas, with a pluggable boundary to the columnar engine that
//! consumes the schemas.
//!
//! The translation itself lives in the member crates and is re-exported
//! here:
//! - [`shape_to_arrow`] / [`expr_to_arrow`] lower a shape (tree or
//!   expression string) into an Arrow `DataType`.
//! - [`arrow_to_shape`] / [`discover_shape`] lift Arrow types and schemas
//!   back into shapes.
//! - [`row_schema`] / [`row_schema_expr`] build a full Arrow `Schema` for a
//!   row shape, naming anonymous tuple columns.
//!
//! This crate adds the engine seam: [`SchemaSession`] abstracts
//! "hand the engine a raw row sequence plus a schema, get a typed table
//! back", and [`into_typed`] / [`into_typed_expr`] drive it. The translator
//! never constructs or inspects the typed table itself.
//!
//! ```rust
//! use dshape2arrow::row_schema_expr;
//!
//! let schema = row_schema_expr("var * {name: string, amount: ?int32}", None)?;
//! assert_eq!(schema.fields().len(), 2);
//! # Ok::<(), dshape2arrow::ShapeConvertError>(())
//! ```

mod session;

pub use dshape2arrow_arrow::{
    ShapeConvertError, arrow_to_scalar, arrow_to_shape, discover_shape, expr_to_arrow,
    row_schema, row_schema_expr, scalar_to_arrow, shape_to_arrow,
};
pub use dshape2arrow_core as core;
pub use dshape2arrow_core::{DimSize, RecordField, RecordFields, ScalarKind, Shape, ShapeError};
pub use dshape2arrow_expr::{ExprError, parse_shape};
pub use session::{IntoTypedError, SchemaSession, into_typed, into_typed_expr};
