use crate::types::AnyStateEvent;
use serde::Serialize;

/// State section of a joined or left room.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct State {
    pub events: Vec<AnyStateEvent>,
}
