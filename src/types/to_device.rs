use crate::types::AnyToDeviceEvent;
use serde::Serialize;

/// Messages sent directly to this device.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ToDevice {
    pub events: Vec<AnyToDeviceEvent>,
}
