use crate::types::AnyAccountDataEvent;
use serde::Serialize;

/// Account data events, either global or scoped to one room.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct AccountData {
    pub events: Vec<AnyAccountDataEvent>,
}
