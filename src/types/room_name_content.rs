use serde::{Deserialize, Serialize};

/// Content of an `m.room.name` state event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomNameContent {
    /// Human-readable room name
    #[serde(default)]
    pub name: String,
}

impl RoomNameContent {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}
