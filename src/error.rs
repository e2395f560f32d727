use crate::decode::EventKind;

/// Errors that abort decoding of an entire sync response.
///
/// Recoverable conditions (oversized identifiers, individual presence-event
/// failures) never surface here; they are logged and the offending record is
/// dropped.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{field}` is not {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("{0} event is not a JSON object")]
    MalformedEvent(EventKind),

    #[error("invalid JSON structure: {0}")]
    Json(#[from] serde_json::Error),
}
