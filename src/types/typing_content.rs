use serde::{Deserialize, Serialize};

/// Content of an `m.typing` ephemeral event: the users currently typing in
/// a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingContent {
    /// The list of user IDs typing in this room, if any
    pub user_ids: Vec<String>,
}
