use serde::{Deserialize, Serialize};

/// One ciphertext blob inside an encrypted to-device message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CipherText {
    pub body: String,
    #[serde(rename = "type")]
    pub message_type: u8,
}

impl CipherText {
    pub fn new(body: String, message_type: u8) -> Self {
        Self { body, message_type }
    }
}
