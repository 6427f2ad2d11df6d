//! Validation error types

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Validation error for request inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent, null, or blank
    MissingFields { fields: Vec<&'static str> },

    /// Numeric fields sent as text that does not parse as a number
    NotANumber { fields: Vec<&'static str> },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } if fields.len() == 1 => {
                write!(f, "{} is required", fields[0])
            }
            Self::MissingFields { fields } => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            Self::NotANumber { fields } => {
                write!(f, "not a valid number: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A number as sent by a client: JSON number or numeric text.
///
/// HTML forms hand every value over as a string, so `"199.50"` is as
/// acceptable as `199.5`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumericInput<T> {
    Number(T),
    Text(String),
}

/// Collects every missing or malformed required field of one input
/// before failing.
///
/// Fields are named as they appear on the wire so the error message
/// points at the JSON key the client has to fix.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
    not_numbers: Vec<&'static str>,
}

impl RequiredFields {
    /// Required text: absent, null, or whitespace-only counts as missing.
    /// Returns the trimmed value.
    pub fn text(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        let value = value
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    /// Required number: absent, null, or blank text counts as missing;
    /// text that does not parse is recorded separately.
    pub fn number<T: FromStr>(
        &mut self,
        field: &'static str,
        value: Option<NumericInput<T>>,
    ) -> Option<T> {
        match value {
            Some(NumericInput::Number(n)) => Some(n),
            Some(NumericInput::Text(text)) if !text.trim().is_empty() => {
                let parsed = text.trim().parse().ok();
                if parsed.is_none() {
                    self.not_numbers.push(field);
                }
                parsed
            }
            _ => {
                self.missing.push(field);
                None
            }
        }
    }

    /// Missing fields are reported ahead of malformed ones.
    pub fn into_error(self) -> ValidationError {
        if self.missing.is_empty() && !self.not_numbers.is_empty() {
            ValidationError::NotANumber {
                fields: self.not_numbers,
            }
        } else {
            ValidationError::MissingFields {
                fields: self.missing,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_display() {
        let err = ValidationError::MissingFields {
            fields: vec!["nombre"],
        };
        assert_eq!(err.to_string(), "nombre is required");
    }

    #[test]
    fn multiple_fields_display() {
        let err = ValidationError::MissingFields {
            fields: vec!["nombre", "telefono"],
        };
        assert_eq!(
            err.to_string(),
            "missing required fields: nombre, telefono"
        );
    }

    #[test]
    fn blank_text_is_missing() {
        let mut req = RequiredFields::default();
        assert_eq!(req.text("nombre", Some("   ".into())), None);
        assert_eq!(req.text("marca", None), None);
        assert_eq!(req.text("calle", Some("  Juarez ".into())), Some("Juarez".into()));
        assert_eq!(
            req.into_error(),
            ValidationError::MissingFields {
                fields: vec!["nombre", "marca"]
            }
        );
    }

    #[test]
    fn zero_is_a_present_value() {
        let mut req = RequiredFields::default();
        assert_eq!(req.number("stock", Some(NumericInput::Number(0))), Some(0));
        assert_eq!(req.into_error(), ValidationError::MissingFields { fields: vec![] });
    }

    #[test]
    fn numeric_text_is_parsed() {
        let mut req = RequiredFields::default();
        assert_eq!(
            req.number::<f64>("precio", Some(NumericInput::Text(" 199.50 ".into()))),
            Some(199.5)
        );
        assert_eq!(
            req.number::<i32>("stock", Some(NumericInput::Text("3".into()))),
            Some(3)
        );
    }

    #[test]
    fn non_numeric_text_is_reported() {
        let mut req = RequiredFields::default();
        assert_eq!(
            req.number::<i32>("stock", Some(NumericInput::Text("tres".into()))),
            None
        );
        assert_eq!(
            req.number::<i32>("categoria_id", Some(NumericInput::Text("".into()))),
            None
        );
        // Missing wins over malformed.
        assert_eq!(
            req.into_error(),
            ValidationError::MissingFields {
                fields: vec!["categoria_id"]
            }
        );

        let mut req = RequiredFields::default();
        req.number::<f64>("precio", Some(NumericInput::Text("caro".into())));
        let err = req.into_error();
        assert_eq!(err, ValidationError::NotANumber { fields: vec!["precio"] });
        assert_eq!(err.to_string(), "not a valid number: precio");
    }

    #[test]
    fn numeric_input_accepts_number_or_string() {
        let n: NumericInput<i32> = serde_json::from_str("3").unwrap();
        assert_eq!(n, NumericInput::Number(3));
        let t: NumericInput<i32> = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(t, NumericInput::Text("3".into()));
    }
}
