use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use dshape2arrow_arrow::{ShapeConvertError, arrow_to_shape, discover_shape};
use dshape2arrow_core::{ScalarKind, Shape};

#[test]
fn lifts_scalars_through_the_reverse_table() {
    let cases = [
        (DataType::Int16, ScalarKind::Int16),
        (DataType::Int32, ScalarKind::Int32),
        (DataType::Int64, ScalarKind::Int64),
        (DataType::Float32, ScalarKind::Float32),
        (DataType::Float64, ScalarKind::Float64),
        (DataType::Boolean, ScalarKind::Bool),
        (DataType::Utf8, ScalarKind::String),
    ];
    for (data_type, expected) in cases {
        assert_eq!(
            arrow_to_shape(&data_type).unwrap(),
            Shape::scalar(expected)
        );
    }
}

#[test]
fn every_timestamp_lifts_to_datetime() {
    for unit in [
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Microsecond,
        TimeUnit::Nanosecond,
    ] {
        assert_eq!(
            arrow_to_shape(&DataType::Timestamp(unit, None)).unwrap(),
            Shape::scalar(ScalarKind::DateTime)
        );
    }
    assert_eq!(
        arrow_to_shape(&DataType::Timestamp(
            TimeUnit::Nanosecond,
            Some(Arc::from("+00:00"))
        ))
        .unwrap(),
        Shape::scalar(ScalarKind::DateTime)
    );
}

#[test]
fn unmapped_arrow_types_fail() {
    for data_type in [
        DataType::Int8,
        DataType::UInt32,
        DataType::Decimal128(38, 10),
        DataType::Date32,
        DataType::Binary,
        DataType::FixedSizeList(Arc::new(Field::new("item", DataType::Int32, false)), 4),
    ] {
        let err = arrow_to_shape(&data_type).unwrap_err();
        assert!(
            matches!(err, ShapeConvertError::UnsupportedScalarKind(_)),
            "unexpected error for {data_type}: {err}"
        );
    }
}

#[test]
fn list_lifts_to_var_dimension() {
    let data_type = DataType::List(Arc::new(Field::new("item", DataType::Int32, false)));
    assert_eq!(
        arrow_to_shape(&data_type).unwrap(),
        Shape::var(Shape::scalar(ScalarKind::Int32))
    );
}

#[test]
fn nullable_list_item_lifts_to_optional_element() {
    let data_type = DataType::List(Arc::new(Field::new("item", DataType::Int32, true)));
    assert_eq!(
        arrow_to_shape(&data_type).unwrap(),
        Shape::var(Shape::option(Shape::scalar(ScalarKind::Int32)))
    );
}

#[test]
fn struct_lifts_to_record_preserving_order_and_nullability() {
    let data_type = DataType::Struct(
        vec![
            Field::new("name", DataType::Utf8, false),
            Field::new("amount", DataType::Int32, true),
        ]
        .into(),
    );
    assert_eq!(
        arrow_to_shape(&data_type).unwrap(),
        Shape::record([
            ("name", Shape::scalar(ScalarKind::String)),
            ("amount", Shape::option(Shape::scalar(ScalarKind::Int32))),
        ])
    );
}

#[test]
fn duplicate_struct_field_names_cannot_be_lifted() {
    let data_type = DataType::Struct(
        vec![
            Field::new("x", DataType::Int32, false),
            Field::new("x", DataType::Int64, false),
        ]
        .into(),
    );
    assert!(matches!(
        arrow_to_shape(&data_type).unwrap_err(),
        ShapeConvertError::UnsupportedShapeConstruct(_)
    ));
}

#[test]
fn discover_shape_wraps_the_row_record_in_a_var_dimension() {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("score", DataType::Float64, true),
    ]);
    assert_eq!(
        discover_shape(&schema).unwrap(),
        Shape::var(Shape::record([
            ("id", Shape::scalar(ScalarKind::Int64)),
            ("score", Shape::option(Shape::scalar(ScalarKind::Float64))),
        ]))
    );
}
