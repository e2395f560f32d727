//! Top-level sync response decoding.
//!
//! [`decode_sync`] is a pure, single-pass function from a borrowed raw
//! document to a [`SyncResponse`] or a [`DecodeError`]. The only condition
//! that aborts the whole decode besides malformed load-bearing structure is
//! a missing or invalid `next_batch` token; everything optional resolves to
//! its default when absent.

pub mod catalog;
pub mod events;
pub mod rooms;

pub use events::{DecodePolicy, EventKind};

use crate::error::DecodeError;
use crate::log::{DecodeLog, TracingLog};
use crate::types::{AccountData, DeviceLists, Rooms, SyncResponse, ToDevice};
use events::{decode_presence_events, decode_to_device_events};
use rooms::MAX_ID_LEN;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

impl DeviceLists {
    fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut lists = DeviceLists::default();
        if let Some(changed) = raw.get("changed") {
            lists.changed = Vec::<String>::deserialize(changed)?;
            lists.changed.retain(|user| {
                if user.len() > MAX_ID_LEN {
                    log.warn("invalid user id in device list changed");
                    false
                } else {
                    true
                }
            });
        }
        if let Some(left) = raw.get("left") {
            lists.left = Vec::<String>::deserialize(left)?;
            lists.left.retain(|user| {
                if user.len() > MAX_ID_LEN {
                    log.warn("invalid user id in device list left");
                    false
                } else {
                    true
                }
            });
        }
        Ok(lists)
    }
}

impl ToDevice {
    fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut to_device = ToDevice::default();
        if let Some(events) = raw.get("events") {
            to_device.events = decode_to_device_events(events, log)?;
        }
        Ok(to_device)
    }
}

impl AccountData {
    pub(crate) fn decode(raw: &Value, log: &dyn DecodeLog) -> Result<Self, DecodeError> {
        let mut account_data = AccountData::default();
        if let Some(events) = raw.get("events") {
            account_data.events = events::decode_account_data_events(events, log)?;
        }
        Ok(account_data)
    }
}

/// Decodes a full sync response document, emitting warnings for dropped
/// records through `log`.
pub fn decode_sync(raw: &Value, log: &dyn DecodeLog) -> Result<SyncResponse, DecodeError> {
    let obj = raw.as_object().ok_or(DecodeError::InvalidField {
        field: "sync response",
        expected: "an object",
    })?;

    let next_batch = obj
        .get("next_batch")
        .ok_or(DecodeError::MissingField("next_batch"))?
        .as_str()
        .ok_or(DecodeError::InvalidField {
            field: "next_batch",
            expected: "a string",
        })?;
    if next_batch.is_empty() {
        return Err(DecodeError::InvalidField {
            field: "next_batch",
            expected: "a non-empty string",
        });
    }

    let mut response = SyncResponse {
        next_batch: next_batch.to_owned(),
        ..SyncResponse::default()
    };

    if let Some(rooms) = obj.get("rooms") {
        response.rooms = Rooms::decode(rooms, log)?;
    }
    if let Some(device_lists) = obj.get("device_lists") {
        response.device_lists = DeviceLists::decode(device_lists, log)?;
    }
    if let Some(to_device) = obj.get("to_device") {
        response.to_device = ToDevice::decode(to_device, log)?;
    }
    if let Some(counts) = obj.get("device_one_time_keys_count") {
        response.device_one_time_keys_count = HashMap::<String, u16>::deserialize(counts)?;
    }
    // Decoded only when present and an array; any other shape is treated
    // as absent.
    if let Some(fallback_keys) = obj.get("device_unused_fallback_key_types") {
        if fallback_keys.is_array() {
            response.device_unused_fallback_key_types =
                Some(Vec::<String>::deserialize(fallback_keys)?);
        }
    }
    if let Some(events) = obj.get("presence").and_then(|presence| presence.get("events")) {
        response.presence = decode_presence_events(events, log)?;
    }
    if let Some(account_data) = obj.get("account_data") {
        if account_data.get("events").is_some() {
            response.account_data = AccountData::decode(account_data, log)?;
        }
    }

    Ok(response)
}

impl SyncResponse {
    /// Decodes a raw document, logging warnings through `tracing`.
    pub fn from_value(raw: &Value) -> Result<Self, DecodeError> {
        decode_sync(raw, &TracingLog)
    }
}

impl FromStr for SyncResponse {
    type Err = DecodeError;

    fn from_str(body: &str) -> Result<Self, Self::Err> {
        let raw: Value = serde_json::from_str(body)?;
        decode_sync(&raw, &TracingLog)
    }
}
