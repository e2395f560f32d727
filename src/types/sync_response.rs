use crate::types::{AccountData, DeviceLists, Event, PresenceContent, Rooms, ToDevice};
use serde::Serialize;
use std::collections::HashMap;

/// A fully decoded `/sync` response.
///
/// Apart from `next_batch`, every field is optional in the wire format and
/// decodes to its empty default when absent; after decoding, "absent" and
/// "empty" are indistinguishable for those fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SyncResponse {
    /// Continuation token to resume the next sync from
    pub next_batch: String,

    /// Room sections, partitioned by membership category
    pub rooms: Rooms,

    /// Device list changes since the previous sync
    pub device_lists: DeviceLists,

    /// Messages sent directly to this device
    pub to_device: ToDevice,

    /// Remaining one-time keys per algorithm
    pub device_one_time_keys_count: HashMap<String, u16>,

    /// Unused fallback key algorithms; `Some` only if the server sent an
    /// array for this field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_unused_fallback_key_types: Option<Vec<String>>,

    /// Presence updates, decoded best-effort
    pub presence: Vec<Event<PresenceContent>>,

    /// Global account data
    pub account_data: AccountData,
}
