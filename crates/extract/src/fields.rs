use crate::config::ExtractConfig;
use crate::error::FieldError;
use crate::scalar::{ScalarKind, parse_bool, parse_decimal, parse_integer};
use crate::timestamp::parse_timestamp;
use chrono::{DateTime, FixedOffset};
use ofxtree_element::Element;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Typed access to the leaf children of an element.
///
/// Implemented for every [`Element`], so it works the same on tag-soup and
/// XML trees.
pub trait FieldReader<'a>: Element<'a> {
    /// The raw value of child `name`: `None` when there is no such child,
    /// `Some("")` when the child is an aggregate without a value.
    fn field(&self, name: &str, config: &ExtractConfig) -> Option<&'a str> {
        let child = self.child(name, &config.tag_comparer)?;
        let value = child.value().unwrap_or("");
        Some(if config.trim_values { value.trim() } else { value })
    }

    /// Looks up `first`, falling back to `second` when `first` is absent or
    /// blank. Returns the name that supplied the value.
    fn field_either<'n>(
        &self,
        first: &'n str,
        second: &'n str,
        config: &ExtractConfig,
    ) -> Option<(&'n str, &'a str)> {
        match self.field(first, config) {
            Some(value) if !value.trim().is_empty() => Some((first, value)),
            primary => match self.field(second, config) {
                Some(value) => Some((second, value)),
                None => primary.map(|value| (first, value)),
            },
        }
    }

    fn required_string(&self, name: &str, config: &ExtractConfig) -> Result<&'a str, FieldError> {
        self.field(name, config).ok_or_else(|| self.missing(name))
    }

    fn try_string(&self, name: &str, config: &ExtractConfig) -> Option<&'a str> {
        self.field(name, config)
    }

    /// Reads a field whose tag was renamed between schema versions.
    fn required_string_either(
        &self,
        first: &str,
        second: &str,
        config: &ExtractConfig,
    ) -> Result<&'a str, FieldError> {
        self.field_either(first, second, config)
            .map(|(_, value)| value)
            .ok_or_else(|| self.missing(&format!("{}|{}", first, second)))
    }

    fn try_string_either(&self, first: &str, second: &str, config: &ExtractConfig) -> Option<&'a str> {
        self.field_either(first, second, config).map(|(_, value)| value)
    }

    fn required_integer(&self, name: &str, config: &ExtractConfig) -> Result<i64, FieldError> {
        self.required_as(name, ScalarKind::Integer, parse_integer, config)
    }

    fn try_integer(&self, name: &str, config: &ExtractConfig) -> Option<i64> {
        self.field(name, config).and_then(parse_integer)
    }

    fn required_decimal(&self, name: &str, config: &ExtractConfig) -> Result<Decimal, FieldError> {
        self.required_as(name, ScalarKind::Decimal, parse_decimal, config)
    }

    fn try_decimal(&self, name: &str, config: &ExtractConfig) -> Option<Decimal> {
        self.field(name, config).and_then(parse_decimal)
    }

    /// Blank values are reported as unparsable, like every other scalar kind.
    fn required_timestamp(
        &self,
        name: &str,
        config: &ExtractConfig,
    ) -> Result<DateTime<FixedOffset>, FieldError> {
        self.required_as(name, ScalarKind::Timestamp, parse_timestamp, config)
    }

    fn try_timestamp(&self, name: &str, config: &ExtractConfig) -> Option<DateTime<FixedOffset>> {
        self.field(name, config).and_then(parse_timestamp)
    }

    fn required_bool(&self, name: &str, config: &ExtractConfig) -> Result<bool, FieldError> {
        self.required_as(name, ScalarKind::Boolean, parse_bool, config)
    }

    fn try_bool(&self, name: &str, config: &ExtractConfig) -> Option<bool> {
        self.field(name, config).and_then(parse_bool)
    }

    /// Reads an enumerated code or any other `FromStr` type.
    fn required_parsed<T: FromStr>(&self, name: &str, config: &ExtractConfig) -> Result<T, FieldError> {
        self.required_as(
            name,
            ScalarKind::Other(std::any::type_name::<T>()),
            |raw| raw.trim().parse().ok(),
            config,
        )
    }

    fn try_parsed<T: FromStr>(&self, name: &str, config: &ExtractConfig) -> Option<T> {
        self.field(name, config).and_then(|raw| raw.trim().parse().ok())
    }

    /// Required lookup through `parse`; the error names the field, its raw value and `kind`.
    fn required_as<T>(
        &self,
        name: &str,
        kind: ScalarKind,
        parse: impl Fn(&str) -> Option<T>,
        config: &ExtractConfig,
    ) -> Result<T, FieldError> {
        let raw = self.required_string(name, config)?;
        parse(raw).ok_or_else(|| self.unparsable(name, raw, kind))
    }

    /// Like [`FieldReader::required_as`], with the two-name fallback.
    fn required_as_either<T>(
        &self,
        first: &str,
        second: &str,
        kind: ScalarKind,
        parse: impl Fn(&str) -> Option<T>,
        config: &ExtractConfig,
    ) -> Result<T, FieldError> {
        let (name, raw) = self
            .field_either(first, second, config)
            .ok_or_else(|| self.missing(&format!("{}|{}", first, second)))?;
        parse(raw).ok_or_else(|| self.unparsable(name, raw, kind))
    }

    /// Like [`FieldReader::try_string_either`] for any scalar kind.
    fn try_as_either<T>(
        &self,
        first: &str,
        second: &str,
        parse: impl Fn(&str) -> Option<T>,
        config: &ExtractConfig,
    ) -> Option<T> {
        self.field_either(first, second, config)
            .and_then(|(_, raw)| parse(raw))
    }

    fn missing(&self, field: &str) -> FieldError {
        FieldError::Missing {
            field: field.to_string(),
            parent: self.path(),
        }
    }

    fn unparsable(&self, field: &str, raw: &str, target: ScalarKind) -> FieldError {
        log::debug!("{}/{} = '{}' is not a valid {}", self.path(), field, raw, target);
        FieldError::Unparsable {
            field: field.to_string(),
            parent: self.path(),
            raw: raw.to_string(),
            target,
        }
    }
}

impl<'a, E: Element<'a>> FieldReader<'a> for E {}
