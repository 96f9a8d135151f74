//! Errors raised when component options arrive as untyped data.

use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur while converting raw values into component options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("Invalid icon weight: {0} (expected 100, 200, ... 700)")]
    InvalidWeight(u16),

    #[error("Icon name must not be empty")]
    EmptyIconName,

    #[error("{field} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

/// Result type for component option parsing.
pub type Result<T> = std::result::Result<T, ComponentError>;

/// Parses a closed enumeration from its string form.
///
/// Unknown values are rejected rather than mapped to a default.
pub fn parse_variant<T: FromStr>(kind: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ComponentError::UnknownVariant {
            kind,
            value: value.to_string(),
        })
}

/// Routes serde through [`parse_variant`] for a string-form enum, so JSON
/// props fail with the same [`ComponentError`] as other untyped input.
macro_rules! impl_variant_conversions {
    ($ty:ty, $kind:literal) => {
        impl TryFrom<String> for $ty {
            type Error = $crate::ui::error::ComponentError;

            fn try_from(value: String) -> std::result::Result<Self, $crate::ui::error::ComponentError> {
                $crate::ui::error::parse_variant($kind, &value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.to_string()
            }
        }
    };
}

pub(crate) use impl_variant_conversions;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeColor;

    #[test]
    fn parse_known_variant() {
        let color: ThemeColor = parse_variant("color", " accent ").unwrap();
        assert_eq!(color, ThemeColor::Accent);
    }

    #[test]
    fn parse_unknown_variant() {
        let err = parse_variant::<ThemeColor>("color", "teal").unwrap_err();
        assert_eq!(
            err,
            ComponentError::UnknownVariant {
                kind: "color",
                value: "teal".to_string()
            }
        );
        assert_eq!(err.to_string(), "Unknown color: teal");
    }

    #[test]
    fn out_of_range_message() {
        let err = ComponentError::OutOfRange {
            field: "grade",
            value: 300,
            min: -25,
            max: 200,
        };
        assert_eq!(err.to_string(), "grade out of range: 300 (expected -25..=200)");
    }
}
