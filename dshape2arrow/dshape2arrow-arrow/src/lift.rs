use arrow::datatypes::{DataType, Schema};
use dshape2arrow_core::{RecordField, RecordFields, Shape};

use crate::{ShapeConvertError, scalar::arrow_to_scalar};

/// Recursively lifts an Arrow [`DataType`] back into a [`Shape`].
///
/// Nullable flags on struct fields and list elements become `?` wrappers.
/// Every list lifts to a `var` dimension: Arrow list columns carry no static
/// length here, so a fixed length lost on lowering stays lost.
pub fn arrow_to_shape(data_type: &DataType) -> Result<Shape, ShapeConvertError> {
    match data_type {
        DataType::List(item) => {
            let element = wrap_optional(arrow_to_shape(item.data_type())?, item.is_nullable());
            Ok(Shape::var(element))
        }
        DataType::Struct(fields) => {
            let fields = fields
                .iter()
                .map(|field| {
                    let shape =
                        wrap_optional(arrow_to_shape(field.data_type())?, field.is_nullable());
                    Ok(RecordField::new(field.name(), shape))
                })
                .collect::<Result<Vec<_>, ShapeConvertError>>()?;
            // Arrow tolerates duplicate field names; the shape language does not.
            RecordFields::try_new(fields)
                .map(Shape::Record)
                .map_err(|e| ShapeConvertError::UnsupportedShapeConstruct(e.to_string()))
        }
        other => arrow_to_scalar(other).map(Shape::Scalar),
    }
}

fn wrap_optional(shape: Shape, nullable: bool) -> Shape {
    if nullable { Shape::option(shape) } else { shape }
}

/// Lifts a whole Arrow [`Schema`] as a table shape: a table is an unbounded
/// sequence of rows, so the lifted record is wrapped in `var * ...`.
pub fn discover_shape(schema: &Schema) -> Result<Shape, ShapeConvertError> {
    let row = arrow_to_shape(&DataType::Struct(schema.fields().clone()))?;
    Ok(Shape::var(row))
}
