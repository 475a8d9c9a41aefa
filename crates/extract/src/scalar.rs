use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// The target type of a field conversion, reported in [`crate::FieldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Text,
    Integer,
    Decimal,
    Timestamp,
    Boolean,
    /// A caller-defined type read through `FromStr`.
    Other(&'static str),
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarKind::Text => f.write_str("text"),
            ScalarKind::Integer => f.write_str("integer"),
            ScalarKind::Decimal => f.write_str("decimal"),
            ScalarKind::Timestamp => f.write_str("timestamp"),
            ScalarKind::Boolean => f.write_str("boolean (Y/N)"),
            ScalarKind::Other(name) => f.write_str(name),
        }
    }
}

pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

/// OFX booleans are the single letters `Y` and `N`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "Y" | "y" => Some(true),
        "N" | "n" => Some(false),
        _ => None,
    }
}
