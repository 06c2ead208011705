//! The boundary to the columnar engine.

use std::sync::Arc;

use arrow::datatypes::SchemaRef;
use dshape2arrow_arrow::{ShapeConvertError, row_schema};
use dshape2arrow_core::Shape;
use dshape2arrow_expr::parse_shape;
use thiserror::Error;

/// An active engine session that can type a raw row sequence.
///
/// Implementations wrap whatever context object the engine exposes. The
/// translator only calls [`apply_typed_schema`](Self::apply_typed_schema)
/// and treats the returned table as opaque.
pub trait SchemaSession {
    /// Untyped row sequence the engine accepts.
    type Rows;
    /// Opaque typed table handle the engine returns.
    type TypedTable;
    type Error: std::error::Error + Send + Sync + 'static;

    fn apply_typed_schema(
        &self,
        rows: Self::Rows,
        schema: SchemaRef,
    ) -> Result<Self::TypedTable, Self::Error>;
}

/// Error from [`into_typed`] / [`into_typed_expr`].
#[derive(Debug, Error)]
pub enum IntoTypedError<E: std::error::Error + Send + Sync + 'static> {
    #[error(transparent)]
    Convert(#[from] ShapeConvertError),
    #[error("engine rejected the typed schema: {0}")]
    Session(E),
}

/// Types `rows` on `session` according to `shape`.
///
/// `shape` may be a row shape or a table shape with one leading dimension;
/// anonymous tuple columns are named from `columns` or positionally (see
/// [`row_schema`]). Conversion errors propagate before the engine is ever
/// called.
pub fn into_typed<S: SchemaSession>(
    session: &S,
    rows: S::Rows,
    shape: &Shape,
    columns: Option<&[String]>,
) -> Result<S::TypedTable, IntoTypedError<S::Error>> {
    let schema = row_schema(shape, columns)?;
    session
        .apply_typed_schema(rows, Arc::new(schema))
        .map_err(IntoTypedError::Session)
}

/// String-form twin of [`into_typed`].
pub fn into_typed_expr<S: SchemaSession>(
    session: &S,
    rows: S::Rows,
    expr: &str,
    columns: Option<&[String]>,
) -> Result<S::TypedTable, IntoTypedError<S::Error>> {
    let shape = parse_shape(expr).map_err(ShapeConvertError::from)?;
    into_typed(session, rows, &shape, columns)
}
