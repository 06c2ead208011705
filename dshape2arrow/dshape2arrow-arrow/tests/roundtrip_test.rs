//! Round-trip properties across lowering and lifting, including the
//! intentionally lossy directions.

use dshape2arrow_arrow::{arrow_to_scalar, arrow_to_shape, scalar_to_arrow, shape_to_arrow};
use dshape2arrow_core::{ScalarKind, Shape};

#[test]
fn invertible_scalars_round_trip_exactly() {
    for kind in [
        ScalarKind::Int16,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Float32,
        ScalarKind::Float64,
        ScalarKind::Bool,
        ScalarKind::String,
        ScalarKind::DateTime,
    ] {
        let lowered = shape_to_arrow(&Shape::scalar(kind)).unwrap();
        assert_eq!(arrow_to_shape(&lowered).unwrap(), Shape::scalar(kind));
    }
}

#[test]
fn scalar_round_trip_lands_on_the_reverse_table_image() {
    // For every supported kind, lift(lower(k)) equals the composition of the
    // two tables, even where that differs from k.
    for kind in [
        ScalarKind::Int16,
        ScalarKind::Int32,
        ScalarKind::Int64,
        ScalarKind::Float32,
        ScalarKind::Float64,
        ScalarKind::Bool,
        ScalarKind::String,
        ScalarKind::Time,
        ScalarKind::Date,
        ScalarKind::DateTime,
    ] {
        let lowered = shape_to_arrow(&Shape::scalar(kind)).unwrap();
        let expected = arrow_to_scalar(&scalar_to_arrow(kind).unwrap()).unwrap();
        assert_eq!(arrow_to_shape(&lowered).unwrap(), Shape::scalar(expected));
    }
}

#[test]
fn time_and_date_round_trip_to_datetime() {
    for kind in [ScalarKind::Time, ScalarKind::Date] {
        let lowered = shape_to_arrow(&Shape::scalar(kind)).unwrap();
        assert_eq!(
            arrow_to_shape(&lowered).unwrap(),
            Shape::scalar(ScalarKind::DateTime)
        );
    }
}

#[test]
fn records_of_scalars_round_trip_exactly() {
    let record = Shape::record([
        ("name", Shape::scalar(ScalarKind::String)),
        ("amount", Shape::option(Shape::scalar(ScalarKind::Int32))),
        ("score", Shape::scalar(ScalarKind::Float64)),
    ]);
    let lowered = shape_to_arrow(&record).unwrap();
    assert_eq!(arrow_to_shape(&lowered).unwrap(), record);
}

#[test]
fn nested_records_round_trip_exactly() {
    let record = Shape::record([
        ("id", Shape::scalar(ScalarKind::Int64)),
        (
            "pos",
            Shape::option(Shape::record([
                ("x", Shape::scalar(ScalarKind::Float64)),
                ("y", Shape::scalar(ScalarKind::Float64)),
            ])),
        ),
    ]);
    let lowered = shape_to_arrow(&record).unwrap();
    assert_eq!(arrow_to_shape(&lowered).unwrap(), record);
}

#[test]
fn fixed_dimension_round_trips_to_var() {
    let shape = Shape::fixed(5, Shape::scalar(ScalarKind::Int32));
    let lowered = shape_to_arrow(&shape).unwrap();
    // The fixed length is never recoverable.
    assert_eq!(
        arrow_to_shape(&lowered).unwrap(),
        Shape::var(Shape::scalar(ScalarKind::Int32))
    );
}

#[test]
fn var_dimension_with_optional_element_round_trips_exactly() {
    let shape = Shape::var(Shape::option(Shape::scalar(ScalarKind::Int32)));
    let lowered = shape_to_arrow(&shape).unwrap();
    assert_eq!(arrow_to_shape(&lowered).unwrap(), shape);
}
