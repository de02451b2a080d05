//! Binding of raw path segments and query values to typed values.
//!
//! These run at the request boundary, before any handler logic.

use crate::error::{BindResult, ValidationError, ValidationKind};
use crate::transport::TransportKind;

/// Maximum length, in characters, of a user identifier.
pub const USER_ID_MAX_LEN: usize = 50;

/// Where a raw value came from; decides the error location prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Source {
    Path,
    Query,
}

impl Source {
    fn error(self, field: &str, msg: String, kind: ValidationKind) -> ValidationError {
        match self {
            Self::Path => ValidationError::path(field, msg, kind),
            Self::Query => ValidationError::query(field, msg, kind),
        }
    }
}

/// Parse a signed integer.
pub fn bind_int(source: Source, field: &str, raw: &str) -> BindResult<i64> {
    raw.parse::<i64>().map_err(|_| {
        source.error(
            field,
            "Input should be a valid integer, unable to parse string as an integer".to_string(),
            ValidationKind::IntParsing,
        )
    })
}

/// Accept a string of at most `max_len` characters.
pub fn bind_bounded_str(source: Source, field: &str, raw: &str, max_len: usize) -> BindResult<String> {
    let len = raw.chars().count();
    if len > max_len {
        return Err(source.error(
            field,
            format!("String should have at most {max_len} characters"),
            ValidationKind::StringTooLong,
        ));
    }
    Ok(raw.to_string())
}

/// Parse a transport ordinal.
pub fn bind_transport(source: Source, field: &str, raw: &str) -> BindResult<TransportKind> {
    raw.parse::<TransportKind>().map_err(|_| {
        let allowed: Vec<String> = TransportKind::ALL
            .iter()
            .map(|k| format!("'{}'", k.ordinal()))
            .collect();
        source.error(
            field,
            format!("Input should be {}", join_alternatives(&allowed)),
            ValidationKind::Enum,
        )
    })
}

fn join_alternatives(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}
