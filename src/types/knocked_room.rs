use crate::types::collections::{preview_avatar, preview_name};
use crate::types::AnyStrippedEvent;
use serde::Serialize;

/// Sync section for a room the user has knocked on.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct KnockedRoom {
    /// Stripped state events visible while the knock is pending
    pub knock_state: Vec<AnyStrippedEvent>,
}

impl KnockedRoom {
    /// Display name of the room, derived like [`crate::InvitedRoom::name`].
    pub fn name(&self) -> String {
        preview_name(&self.knock_state)
    }

    /// Avatar URL of the room.
    pub fn avatar(&self) -> String {
        preview_avatar(&self.knock_state)
    }
}
