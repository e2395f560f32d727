use serde::Serialize;

/// Diff of users whose device lists changed since the previous sync.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeviceLists {
    /// Users whose device lists have changed
    pub changed: Vec<String>,

    /// Users the client no longer shares an encrypted room with
    pub left: Vec<String>,
}
