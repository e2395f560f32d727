use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Content of an `m.direct` account data event: user ID to the rooms
/// considered direct chats with that user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectContent(pub HashMap<String, Vec<String>>);
