use std::ops::Deref;

use crate::ShapeError;

/// Scalar measures of the datashape language.
///
/// This is the full scalar vocabulary the expression language can name, a
/// superset of the ten kinds the Arrow tables support. Kinds outside the
/// tables (e.g. [`Int128`](ScalarKind::Int128) or
/// [`Decimal`](ScalarKind::Decimal)) are representable here but rejected at
/// conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Decimal,
    String,
    Time,
    Date,
    DateTime,
}

impl ScalarKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::Int8 => "int8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Int128 => "int128",
            ScalarKind::UInt8 => "uint8",
            ScalarKind::UInt16 => "uint16",
            ScalarKind::UInt32 => "uint32",
            ScalarKind::UInt64 => "uint64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::Decimal => "decimal",
            ScalarKind::String => "string",
            ScalarKind::Time => "time",
            ScalarKind::Date => "date",
            ScalarKind::DateTime => "datetime",
        }
    }
}

/// Size of one dimension: a concrete length or the `var` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimSize {
    Fixed(usize),
    Var,
}

/// A datashape type tree.
///
/// Invariants:
/// - the tree is finite (each node owns its children; no cycles),
/// - `Option` never wraps another `Option` (use [`Shape::option`]),
/// - record field names are unique (use [`RecordFields::try_new`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Scalar(ScalarKind),
    Option(Box<Shape>),
    Dim(DimSize, Box<Shape>),
    Record(RecordFields),
    /// Anonymous tuple of unnamed fields. Only meaningful at the top level of
    /// a row shape, where columns can be named positionally; elsewhere it has
    /// no engine counterpart.
    Tuple(Vec<Shape>),
}

impl Shape {
    pub fn scalar(kind: ScalarKind) -> Self {
        Shape::Scalar(kind)
    }

    /// Wraps `inner` in `Option`, collapsing double wrapping.
    pub fn option(inner: Shape) -> Self {
        match inner {
            already @ Shape::Option(_) => already,
            other => Shape::Option(Box::new(other)),
        }
    }

    pub fn dim(size: DimSize, element: Shape) -> Self {
        Shape::Dim(size, Box::new(element))
    }

    /// A fixed-length dimension: `n * element`.
    pub fn fixed(len: usize, element: Shape) -> Self {
        Shape::dim(DimSize::Fixed(len), element)
    }

    /// A variable-length dimension: `var * element`.
    pub fn var(element: Shape) -> Self {
        Shape::dim(DimSize::Var, element)
    }

    /// Builds a record without checking name uniqueness; prefer
    /// [`RecordFields::try_new`] for untrusted input.
    pub fn record<N: Into<String>>(fields: impl IntoIterator<Item = (N, Shape)>) -> Self {
        Shape::Record(RecordFields::new(
            fields
                .into_iter()
                .map(|(name, shape)| RecordField::new(name, shape))
                .collect(),
        ))
    }

    pub fn tuple(items: Vec<Shape>) -> Self {
        Shape::Tuple(items)
    }

    /// Peels one level of `Option`, reporting whether it was present.
    ///
    /// This is the optionality normalization used before every scalar lookup:
    /// nullability on the engine side lives on the containing slot, so the
    /// wrapper must be stripped and remembered before the inner type is
    /// converted.
    pub fn strip_option(&self) -> (&Shape, bool) {
        match self {
            Shape::Option(inner) => (inner, true),
            other => (other, false),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::Scalar(kind) => kind.type_name(),
            Shape::Option(_) => "option",
            Shape::Dim(_, _) => "dim",
            Shape::Record(_) => "record",
            Shape::Tuple(_) => "tuple",
        }
    }
}

/// Typed collection of [`RecordField`] used for record bodies.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordFields(pub Vec<RecordField>);

impl RecordFields {
    pub fn new(fields: Vec<RecordField>) -> Self {
        Self(fields)
    }

    /// Builds the collection, rejecting duplicate field names.
    pub fn try_new(fields: Vec<RecordField>) -> Result<Self, ShapeError> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(ShapeError::DuplicateFieldName(field.name.clone()));
            }
        }
        Ok(Self(fields))
    }

    pub fn as_slice(&self) -> &[RecordField] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordField> {
        self.0.iter()
    }
}

impl From<Vec<RecordField>> for RecordFields {
    fn from(value: Vec<RecordField>) -> Self {
        Self(value)
    }
}

impl From<RecordFields> for Vec<RecordField> {
    fn from(value: RecordFields) -> Self {
        value.0
    }
}

impl AsRef<[RecordField]> for RecordFields {
    fn as_ref(&self) -> &[RecordField] {
        self.as_slice()
    }
}

impl Deref for RecordFields {
    type Target = [RecordField];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

/// One named field of a record shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub shape: Shape,
}

impl RecordField {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}
