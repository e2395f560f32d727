use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Basic event shell: a type tag plus polymorphic content.
///
/// Used for the collections whose events carry little context of their own
/// (ephemeral, account data, to-device, presence). `sender` is absent for
/// some of those, so it defaults to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event<C> {
    /// Event type
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event content
    pub content: C,

    /// User ID of the sender
    #[serde(default)]
    pub sender: String,
}

/// Event shell for room state events, in the timeline or the state
/// section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateEvent<C> {
    /// Event type
    #[serde(rename = "type")]
    pub event_type: String,

    /// Event content
    pub content: C,

    /// Unique event identifier
    pub event_id: String,

    /// User ID of the sender
    pub sender: String,

    /// Server timestamp when the event was created, in milliseconds
    pub origin_server_ts: i64,

    /// State key this event addresses
    pub state_key: String,

    /// Unsigned event metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsigned: Option<Value>,
}

/// Minimal state event visible before full membership (invite and knock
/// previews).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrippedEvent<C> {
    /// Event content
    pub content: C,

    /// User ID of the sender
    pub sender: String,

    /// State key this event addresses
    pub state_key: String,

    /// Event type
    #[serde(rename = "type")]
    pub event_type: String,
}
