//! The scalar lookup tables, both directions.
//!
//! The forward table is total over the ten supported shape scalar kinds and
//! sends `time`, `date`, and `datetime` to one engine timestamp type. The
//! reverse table is the literal inverse image of the forward table wherever
//! both are defined, which pins the collapsed timestamp to `datetime` on the
//! way back. Everything outside the tables fails with
//! [`ShapeConvertError::UnsupportedScalarKind`].

use arrow::datatypes::{DataType, TimeUnit};
use dshape2arrow_core::ScalarKind;

use crate::ShapeConvertError;

/// The single engine timestamp type that `time`, `date`, and `datetime` all
/// lower to. Microseconds match the resolution of Spark-style engines.
pub(crate) fn timestamp_type() -> DataType {
    DataType::Timestamp(TimeUnit::Microsecond, None)
}

/// Look up the Arrow type for a shape scalar kind.
pub fn scalar_to_arrow(kind: ScalarKind) -> Result<DataType, ShapeConvertError> {
    let data_type = match kind {
        ScalarKind::Int16 => DataType::Int16,
        ScalarKind::Int32 => DataType::Int32,
        ScalarKind::Int64 => DataType::Int64,
        ScalarKind::Float32 => DataType::Float32,
        ScalarKind::Float64 => DataType::Float64,
        ScalarKind::Bool => DataType::Boolean,
        ScalarKind::String => DataType::Utf8,
        // Three-to-one collapse; not reversible.
        ScalarKind::Time | ScalarKind::Date | ScalarKind::DateTime => timestamp_type(),
        other => {
            return Err(ShapeConvertError::UnsupportedScalarKind(
                other.type_name().to_string(),
            ));
        }
    };
    Ok(data_type)
}

/// Look up the shape scalar kind for an Arrow type.
pub fn arrow_to_scalar(data_type: &DataType) -> Result<ScalarKind, ShapeConvertError> {
    let kind = match data_type {
        DataType::Int16 => ScalarKind::Int16,
        DataType::Int32 => ScalarKind::Int32,
        DataType::Int64 => ScalarKind::Int64,
        DataType::Float32 => ScalarKind::Float32,
        DataType::Float64 => ScalarKind::Float64,
        DataType::Boolean => ScalarKind::Bool,
        DataType::Utf8 => ScalarKind::String,
        // Any timestamp lifts to datetime; the original time/date kind is
        // not recoverable.
        DataType::Timestamp(_, _) => ScalarKind::DateTime,
        other => {
            return Err(ShapeConvertError::UnsupportedScalarKind(other.to_string()));
        }
    };
    Ok(kind)
}
