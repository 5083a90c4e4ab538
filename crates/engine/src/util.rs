use uuid::Uuid;

use crate::{EngineError, ResultEngine};

/// Parses an optional uuid column, dropping values that do not parse.
pub(crate) fn parse_optional_uuid(value: Option<String>) -> Option<Uuid> {
    value.and_then(|s| Uuid::parse_str(&s).ok())
}

/// Parses a required uuid column.
pub(crate) fn parse_uuid(value: &str, label: &str) -> ResultEngine<Uuid> {
    Uuid::parse_str(value).map_err(|_| EngineError::NotFound(format!("{label} not exists")))
}
