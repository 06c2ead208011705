//! Bidirectional conversion between the datashape IR and Arrow schemas.
//!
//! This crate holds the whole structural translation:
//! - [`shape_to_arrow`] lowers a [`Shape`](dshape2arrow_core::Shape) into an
//!   Arrow [`DataType`](arrow::datatypes::DataType); optionality wrappers
//!   become nullable flags on the containing field slot.
//! - [`arrow_to_shape`] lifts an Arrow `DataType` back into a `Shape`;
//!   nullable flags become `?` wrappers.
//! - [`row_schema`] / [`row_schema_expr`] assemble a full Arrow `Schema`
//!   from a row (or table) shape, naming anonymous tuple columns
//!   positionally.
//! - [`discover_shape`] lifts a whole Arrow `Schema` as
//!   `var * {row record}`.
//!
//! Two mappings are lossy by design and not invertible:
//! - shape `time`, `date`, and `datetime` all lower to the single engine
//!   timestamp type, and every timestamp lifts back to `datetime`;
//! - fixed dimension lengths are dropped on lowering (Arrow list columns
//!   carry no static length here), so every list lifts back to `var * ...`.
//!
//! Both conversions are pure structural recursions over immutable trees; a
//! failure leaves no partially built output behind.

mod error;
mod lift;
mod lower;
mod scalar;

pub use error::ShapeConvertError;
pub use lift::{arrow_to_shape, discover_shape};
pub use lower::{expr_to_arrow, row_schema, row_schema_expr, shape_to_arrow};
pub use scalar::{arrow_to_scalar, scalar_to_arrow};

/// Field name Arrow conventionally uses for list elements.
pub(crate) const LIST_ITEM: &str = "item";
