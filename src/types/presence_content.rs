use serde::{Deserialize, Serialize};

/// Content of an `m.presence` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceContent {
    /// Presence state (online, offline, unavailable)
    pub presence: String,

    /// Status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_msg: Option<String>,

    /// Milliseconds since the user last performed some action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active_ago: Option<u64>,

    /// Whether the user is currently active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currently_active: Option<bool>,

    /// Current avatar URL for this user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Current display name for this user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayname: Option<String>,
}
