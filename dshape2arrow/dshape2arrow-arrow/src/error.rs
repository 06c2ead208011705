use dshape2arrow_expr::ExprError;
use thiserror::Error;

/// Error raised by shape/schema conversion.
///
/// Every variant signals a hard schema incompatibility: conversion is a pure
/// deterministic function, so none of these are transient and retrying
/// changes nothing.
#[derive(Debug, Error)]
pub enum ShapeConvertError {
    /// A scalar kind has no counterpart in the target type system.
    #[error("unsupported scalar kind: {0}")]
    UnsupportedScalarKind(String),
    /// A structural construct cannot be translated (union-like constructs,
    /// anonymous tuples outside the row position, optionals outside a
    /// nullable slot, ...).
    #[error("unsupported shape construct: {0}")]
    UnsupportedShapeConstruct(String),
    /// A string input failed to parse as a shape expression.
    #[error("malformed shape expression: {0}")]
    MalformedShapeExpression(#[from] ExprError),
}
