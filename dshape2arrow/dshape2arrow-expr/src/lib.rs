//! Parser for the datashape expression string form.
//!
//! [`parse_shape`] is the single public entry point. The grammar covers the
//! subset of datashape the translator understands:
//!
//! - scalar names (`int32`, `string`, `datetime`, ..., plus the `real`
//!   alias for `float64`),
//! - `?` optionals (`?int32`, `?{...}`, `?(5 * int32)`),
//! - `*`-separated dimensions with fixed or `var` sizes (`10 * int32`,
//!   `var * ?float64`),
//! - records (`{name: string, amount: ?int32}`),
//! - anonymous tuples (`(string, int32)`); a parenthesized single shape is
//!   plain grouping.
//!
//! Unions and other datashape constructs outside this subset do not parse.

mod error;
mod parser;

pub use error::ExprError;
pub use parser::parse_shape;
