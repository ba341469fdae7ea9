//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;
use uuid::Uuid;

use crate::domain::{Error, Identity};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidNumber,
    InvalidIdentity,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidNumber => "invalid_number",
            ErrorCode::InvalidIdentity => "invalid_identity",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn parse_uuid(value: String, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(&value).map_err(|_| invalid_uuid_error(field, &value))
}

pub(crate) fn parse_identity(value: String, field: FieldName) -> Result<Identity, Error> {
    Identity::new(value.clone()).map_err(|_| {
        let field = field.as_str();
        ValidationError::new(field, format!("{field} must be an email-like identity"))
            .with_value(ErrorCode::InvalidIdentity, value)
    })
}

/// Parse a required positive integer query parameter.
///
/// Absent, non-numeric, and zero values are all rejected so pagination
/// failures surface as 400s instead of silently scanning nothing.
pub(crate) fn parse_positive_int(value: Option<String>, field: FieldName) -> Result<u32, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    let invalid = |raw: &str| {
        let field = field.as_str();
        ValidationError::new(field, format!("{field} must be a positive integer"))
            .with_value(ErrorCode::InvalidNumber, raw)
    };
    let parsed: u32 = raw.parse().map_err(|_| invalid(&raw))?;
    if parsed == 0 {
        return Err(invalid(&raw));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parse_positive_int_accepts_plain_numbers() {
        let parsed = parse_positive_int(Some("12".to_owned()), FieldName::new("page"))
            .expect("valid number");
        assert_eq!(parsed, 12);
    }

    #[rstest]
    #[case(None)]
    #[case(Some("".to_owned()))]
    #[case(Some("abc".to_owned()))]
    #[case(Some("-1".to_owned()))]
    #[case(Some("0".to_owned()))]
    #[case(Some("1.5".to_owned()))]
    fn parse_positive_int_rejects_bad_input(#[case] value: Option<String>) {
        let error =
            parse_positive_int(value, FieldName::new("size")).expect_err("should be rejected");
        assert_eq!(error.code(), crate::domain::ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn parse_uuid_reports_the_field() {
        let error =
            parse_uuid("not-a-uuid".to_owned(), FieldName::new("jobId")).expect_err("rejected");
        let details = error.details().expect("details attached");
        assert_eq!(details["field"], "jobId");
        assert_eq!(details["code"], "invalid_uuid");
    }

    #[rstest]
    fn parse_identity_rejects_malformed_values() {
        let error = parse_identity("not-an-email".to_owned(), FieldName::new("email"))
            .expect_err("rejected");
        assert_eq!(error.code(), crate::domain::ErrorCode::InvalidRequest);
    }
}
