use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};
use dshape2arrow_core::{RecordField, RecordFields, Shape};
use dshape2arrow_expr::parse_shape;

use crate::{LIST_ITEM, ShapeConvertError, scalar::scalar_to_arrow};

// ---------------------------------------------------------------------------
// Lower a shape into an Arrow data type
// ---------------------------------------------------------------------------

/// Recursively lowers a [`Shape`] into an Arrow [`DataType`].
///
/// Optionality never appears in the result as a type of its own: a field or
/// list-element `?` wrapper becomes the nullable flag of the containing slot.
/// A bare `Option` with no slot to carry it, and an anonymous `Tuple` (which
/// is only nameable at the row level, see [`row_schema`]), cannot be lowered.
pub fn shape_to_arrow(shape: &Shape) -> Result<DataType, ShapeConvertError> {
    match shape {
        Shape::Scalar(kind) => scalar_to_arrow(*kind),
        Shape::Record(fields) => {
            let fields = fields
                .iter()
                .map(record_field_to_arrow)
                .collect::<Result<Vec<Field>, _>>()?;
            Ok(DataType::Struct(fields.into()))
        }
        // The static length of a fixed dimension is dropped: the engine's
        // array columns are unsized.
        Shape::Dim(_, element) => {
            let element = unwrap_unary_tuple(element);
            let (inner, nullable) = element.strip_option();
            let item = Field::new(LIST_ITEM, shape_to_arrow(inner)?, nullable);
            Ok(DataType::List(Arc::new(item)))
        }
        Shape::Option(_) => Err(ShapeConvertError::UnsupportedShapeConstruct(
            "optional value outside a record field or array element".to_string(),
        )),
        Shape::Tuple(_) => Err(ShapeConvertError::UnsupportedShapeConstruct(
            "anonymous tuple without field names".to_string(),
        )),
    }
}

fn record_field_to_arrow(field: &RecordField) -> Result<Field, ShapeConvertError> {
    let (inner, nullable) = field.shape.strip_option();
    Ok(Field::new(&field.name, shape_to_arrow(inner)?, nullable))
}

/// An array element presented as a one-element tuple stands for the element
/// itself; unwrap one level before normalizing optionality.
fn unwrap_unary_tuple(shape: &Shape) -> &Shape {
    match shape {
        Shape::Tuple(items) if items.len() == 1 => &items[0],
        other => other,
    }
}

/// Parses `expr` and lowers the result; equivalent to
/// `shape_to_arrow(&parse_shape(expr)?)`.
pub fn expr_to_arrow(expr: &str) -> Result<DataType, ShapeConvertError> {
    shape_to_arrow(&parse_shape(expr)?)
}

// ---------------------------------------------------------------------------
// Assemble a full row schema, naming anonymous tuple columns
// ---------------------------------------------------------------------------

/// Builds the Arrow [`Schema`] for one row of data described by `shape`.
///
/// Accepts either a row shape (`{...}` or a tuple) or a table shape with one
/// leading dimension over it (`var * {...}`); the leading dimension is
/// stripped. A top-level anonymous tuple gets its columns named from
/// `columns`, or from the zero-based position (`"0"`, `"1"`, ...) when none
/// are supplied. Nested anonymous tuples stay unsupported.
pub fn row_schema(shape: &Shape, columns: Option<&[String]>) -> Result<Schema, ShapeConvertError> {
    let row = match shape {
        Shape::Dim(_, element) => element.as_ref(),
        other => other,
    };
    let named;
    let row = match row {
        Shape::Tuple(items) => {
            named = name_tuple_fields(items, columns)?;
            &named
        }
        other => other,
    };
    match shape_to_arrow(row)? {
        DataType::Struct(fields) => Ok(Schema::new(fields)),
        other => Err(ShapeConvertError::UnsupportedShapeConstruct(format!(
            "row shape must be a record, got {other}"
        ))),
    }
}

/// String-form twin of [`row_schema`].
pub fn row_schema_expr(
    expr: &str,
    columns: Option<&[String]>,
) -> Result<Schema, ShapeConvertError> {
    row_schema(&parse_shape(expr)?, columns)
}

fn name_tuple_fields(
    items: &[Shape],
    columns: Option<&[String]>,
) -> Result<Shape, ShapeConvertError> {
    if let Some(columns) = columns
        && columns.len() != items.len()
    {
        return Err(ShapeConvertError::UnsupportedShapeConstruct(format!(
            "{} column names supplied for a tuple of {} fields",
            columns.len(),
            items.len()
        )));
    }
    let fields = items
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let name = match columns {
                Some(columns) => columns[i].clone(),
                None => i.to_string(),
            };
            RecordField::new(name, shape.clone())
        })
        .collect();
    RecordFields::try_new(fields)
        .map(Shape::Record)
        .map_err(|e| ShapeConvertError::UnsupportedShapeConstruct(e.to_string()))
}
