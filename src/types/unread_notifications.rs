use serde::{Deserialize, Serialize};

/// Unread notification counters of a joined room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnreadNotifications {
    /// Number of unread notifications with a highlight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_count: Option<u64>,

    /// Total number of unread notifications
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_count: Option<u64>,
}
