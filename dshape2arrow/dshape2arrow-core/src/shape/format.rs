use std::fmt::{Display, Formatter, Result};

use super::{DimSize, RecordFields, ScalarKind, Shape};

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}

impl Display for DimSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DimSize::Fixed(n) => write!(f, "{n}"),
            DimSize::Var => f.write_str("var"),
        }
    }
}

/// Renders the shape in datashape expression syntax, e.g.
/// `var * {name: string, amount: ?int32}`. The output re-parses to an equal
/// tree through `dshape2arrow-expr`.
impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Shape::Scalar(kind) => f.write_str(kind.type_name()),
            // An optional dimension needs grouping parens to re-parse.
            Shape::Option(inner) => match inner.as_ref() {
                dim @ Shape::Dim(_, _) => write!(f, "?({dim})"),
                other => write!(f, "?{other}"),
            },
            Shape::Dim(size, element) => write!(f, "{size} * {element}"),
            Shape::Record(fields) => fields.fmt(f),
            Shape::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Display for RecordFields {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str("{")?;
        for (i, field) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", field.name, field.shape)?;
        }
        f.write_str("}")
    }
}
