use crate::types::AnyEphemeralEvent;
use serde::Serialize;

/// Ephemeral (non-persisted) events of a joined room, such as typing
/// notifications and read receipts.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Ephemeral {
    pub events: Vec<AnyEphemeralEvent>,
}
