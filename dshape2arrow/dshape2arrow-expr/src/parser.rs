//! Datashape expression parser implementation using nom parser combinators.

use dshape2arrow_core::{DimSize, RecordField, RecordFields, ScalarKind, Shape};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{all_consuming, map, map_res, recognize, value},
    error::{Error, ErrorKind},
    multi::{many0, separated_list0, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair, terminated},
};

use crate::ExprError;

/// Parse a datashape expression into a [`Shape`].
pub fn parse_shape(input: &str) -> Result<Shape, ExprError> {
    match all_consuming(delimited(multispace0, shape_expr, multispace0))(input) {
        Ok((_, shape)) => Ok(shape),
        Err(e) => Err(format!("invalid shape expression '{input}': {e}").into()),
    }
}

/// Parse a full shape: zero or more `*`-separated dimensions and a measure.
fn shape_expr(input: &str) -> IResult<&str, Shape> {
    map(
        pair(many0(terminated(dim_size, star_sep)), measure),
        |(dims, measure)| {
            dims.into_iter()
                .rev()
                .fold(measure, |inner, size| Shape::dim(size, inner))
        },
    )(input)
}

/// Parse a measure: an optional, record, tuple/group, or scalar.
fn measure(input: &str) -> IResult<&str, Shape> {
    alt((optional, record, tuple_or_group, scalar))(input)
}

/// Parse `?measure`, including `?(...)` grouping for optional dimensions.
fn optional(input: &str) -> IResult<&str, Shape> {
    map(
        preceded(char('?'), preceded(multispace0, measure)),
        Shape::option,
    )(input)
}

/// Parse a record: `{name: shape, ...}`. Duplicate field names are rejected.
fn record(input: &str) -> IResult<&str, Shape> {
    map_res(
        delimited(
            terminated(char('{'), multispace0),
            separated_list0(list_sep, record_field),
            preceded(multispace0, char('}')),
        ),
        |fields| RecordFields::try_new(fields).map(Shape::Record),
    )(input)
}

fn record_field(input: &str) -> IResult<&str, RecordField> {
    map(
        separated_pair(
            identifier,
            delimited(multispace0, char(':'), multispace0),
            shape_expr,
        ),
        |(name, shape)| RecordField::new(name, shape),
    )(input)
}

/// Parse `(a, b, ...)`. A single parenthesized shape is grouping, not a
/// one-element tuple.
fn tuple_or_group(input: &str) -> IResult<&str, Shape> {
    map(
        delimited(
            terminated(char('('), multispace0),
            separated_list1(list_sep, shape_expr),
            preceded(multispace0, char(')')),
        ),
        |mut items| {
            if items.len() == 1 {
                items.remove(0)
            } else {
                Shape::Tuple(items)
            }
        },
    )(input)
}

/// Parse a scalar type name.
fn scalar(input: &str) -> IResult<&str, Shape> {
    let (rest, name) = identifier(input)?;
    match scalar_kind(name) {
        Some(kind) => Ok((rest, Shape::Scalar(kind))),
        None => Err(nom::Err::Error(Error::new(input, ErrorKind::Tag))),
    }
}

fn scalar_kind(name: &str) -> Option<ScalarKind> {
    let kind = match name {
        "bool" => ScalarKind::Bool,
        "int8" => ScalarKind::Int8,
        "int16" => ScalarKind::Int16,
        "int32" => ScalarKind::Int32,
        "int64" => ScalarKind::Int64,
        "int128" => ScalarKind::Int128,
        "uint8" => ScalarKind::UInt8,
        "uint16" => ScalarKind::UInt16,
        "uint32" => ScalarKind::UInt32,
        "uint64" => ScalarKind::UInt64,
        "float32" => ScalarKind::Float32,
        // `real` is the conventional datashape alias for float64.
        "float64" | "real" => ScalarKind::Float64,
        "decimal" => ScalarKind::Decimal,
        "string" => ScalarKind::String,
        "time" => ScalarKind::Time,
        "date" => ScalarKind::Date,
        "datetime" => ScalarKind::DateTime,
        _ => return None,
    };
    Some(kind)
}

/// Parse a dimension size: a number or the `var` keyword.
fn dim_size(input: &str) -> IResult<&str, DimSize> {
    alt((
        map_res(take_while1(|c: char| c.is_ascii_digit()), |s: &str| {
            s.parse().map(DimSize::Fixed)
        }),
        value(DimSize::Var, terminated(tag("var"), keyword_boundary)),
    ))(input)
}

/// Parse an identifier (alphanumeric + underscore, must start with alpha or _)
fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

fn star_sep(input: &str) -> IResult<&str, ()> {
    value((), delimited(multispace0, char('*'), multispace0))(input)
}

fn list_sep(input: &str) -> IResult<&str, ()> {
    value((), delimited(multispace0, char(','), multispace0))(input)
}

fn keyword_boundary(input: &str) -> IResult<&str, ()> {
    if input.chars().next().is_some_and(is_ident_continue) {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Verify)));
    }
    Ok((input, ()))
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
