use serde::{Deserialize, Serialize};

/// Content of an `m.room.avatar` state event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomAvatarContent {
    /// MXC URI of the room avatar
    #[serde(default)]
    pub url: String,
}

impl RoomAvatarContent {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}
