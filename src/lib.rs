//! Decoding of Matrix client-server `/sync` responses.
//!
//! A sync response is a large, heterogeneous JSON document: rooms keyed by
//! membership category, polymorphic event lists distinguished by a `type`
//! tag, device-list diffs and encryption key bookkeeping. This crate turns
//! one such document into a strongly typed [`SyncResponse`], enforcing the
//! protocol's identifier limits defensively and never letting a single
//! malformed record abort decoding of the rest of the payload where the
//! protocol allows dropping it.
//!
//! Decoding is a pure function over a borrowed [`serde_json::Value`]; no
//! state is held across invocations. Warnings about dropped records go to an
//! injected [`DecodeLog`] sink, by default forwarded to `tracing`.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod decode;
pub mod error;
pub mod log;
pub mod types;

pub use decode::{decode_sync, DecodePolicy, EventKind};
pub use error::DecodeError;
pub use log::{DecodeLog, TracingLog};
pub use types::*;
