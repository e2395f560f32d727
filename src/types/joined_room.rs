use crate::types::{AccountData, Ephemeral, State, Timeline, UnreadNotifications};
use serde::Serialize;

/// Sync section for a room the user has joined.
///
/// Every field is optional in the wire format; absence decodes to the empty
/// default.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct JoinedRoom {
    /// State events between the previous sync and the start of the timeline
    pub state: State,

    /// Timeline of messages and state changes
    pub timeline: Timeline,

    /// Unread notification counters
    pub unread_notifications: UnreadNotifications,

    /// Ephemeral events (typing, receipts)
    pub ephemeral: Ephemeral,

    /// Room-scoped account data
    pub account_data: AccountData,
}
