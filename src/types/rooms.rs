use crate::types::{InvitedRoom, JoinedRoom, KnockedRoom, LeftRoom};
use indexmap::IndexMap;
use serde::Serialize;

/// Room sections of a sync response, partitioned by membership category.
///
/// The maps preserve document order, so re-iteration is deterministic and
/// matches arrival order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Rooms {
    /// Rooms the user has joined
    pub join: IndexMap<String, JoinedRoom>,

    /// Rooms the user has been invited to
    pub invite: IndexMap<String, InvitedRoom>,

    /// Rooms the user has left
    pub leave: IndexMap<String, LeftRoom>,

    /// Rooms the user has knocked on
    pub knock: IndexMap<String, KnockedRoom>,
}
