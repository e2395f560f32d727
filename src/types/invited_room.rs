use crate::types::collections::{preview_avatar, preview_name};
use crate::types::AnyStrippedEvent;
use serde::Serialize;

/// Sync section for a room the user has been invited to: a stripped-state
/// preview of the room.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InvitedRoom {
    /// Stripped state events visible before joining
    pub invite_state: Vec<AnyStrippedEvent>,
}

impl InvitedRoom {
    /// Display name of the room, derived from the preview: a canonical
    /// `m.room.name` event wins, otherwise the first membership display
    /// name seen. Empty if the preview carries neither.
    pub fn name(&self) -> String {
        preview_name(&self.invite_state)
    }

    /// Avatar URL of the room, same precedence as [`InvitedRoom::name`].
    pub fn avatar(&self) -> String {
        preview_avatar(&self.invite_state)
    }
}
