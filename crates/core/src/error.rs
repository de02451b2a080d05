//! Error model for input binding and response shaping.

use serde::Serialize;
use thiserror::Error;

/// Result type used by the binding layer.
pub type BindResult<T> = Result<T, ValidationError>;

/// Machine-readable category of a validation failure.
///
/// Serialized as the `type` field of an error detail entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// A value that should be an integer could not be parsed as one.
    IntParsing,
    /// A string exceeded its maximum length.
    StringTooLong,
    /// A value is not one of the members of a closed enumeration.
    Enum,
    /// A required field was absent.
    Missing,
    /// The body was not syntactically valid JSON.
    JsonInvalid,
    /// The body was valid JSON but did not match the expected shape.
    JsonType,
    /// The request did not declare a JSON content type.
    ContentType,
    /// Any other malformed value (e.g. an undecodable path segment).
    ValueError,
}

impl ValidationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IntParsing => "int_parsing",
            Self::StringTooLong => "string_too_long",
            Self::Enum => "enum",
            Self::Missing => "missing",
            Self::JsonInvalid => "json_invalid",
            Self::JsonType => "json_type",
            Self::ContentType => "content_type",
            Self::ValueError => "value_error",
        }
    }
}

/// Malformed or out-of-range caller input.
///
/// Carries the location of the offending value (`["path", "item_id"]`,
/// `["body"]`, ...) so the HTTP layer can describe the failure per field.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("{}: {msg}", .loc.join("."))]
pub struct ValidationError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: ValidationKind,
}

impl ValidationError {
    pub fn new(
        loc: impl IntoIterator<Item = impl Into<String>>,
        msg: impl Into<String>,
        kind: ValidationKind,
    ) -> Self {
        Self {
            loc: loc.into_iter().map(Into::into).collect(),
            msg: msg.into(),
            kind,
        }
    }

    /// Failure of a single path parameter.
    pub fn path(field: &str, msg: impl Into<String>, kind: ValidationKind) -> Self {
        Self::new(["path", field], msg, kind)
    }

    /// Failure of a single query parameter.
    pub fn query(field: &str, msg: impl Into<String>, kind: ValidationKind) -> Self {
        Self::new(["query", field], msg, kind)
    }

    /// Failure of the request body as a whole.
    pub fn body(msg: impl Into<String>, kind: ValidationKind) -> Self {
        Self::new(["body"], msg, kind)
    }
}

/// Failure while converting a record to its wire mapping.
///
/// Only reachable when a shape does not serialize to a JSON object.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
