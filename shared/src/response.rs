//! Uniform Action Response
//!
//! All booking lifecycle operations return this envelope instead of
//! propagating errors: the UI layer displays `message` directly and does
//! no error translation of its own.

use serde::{Deserialize, Serialize};

/// Result envelope for lifecycle operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    /// Human-readable outcome, suitable for direct display
    pub message: String,
    /// Id of the booking the operation acted on / created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    /// Outcome of a best-effort side effect (e.g. email delivery), attached
    /// to an otherwise-successful result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            booking_id: None,
            notice: None,
        }
    }

    pub fn ok_with_id(message: impl Into<String>, booking_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            booking_id: Some(booking_id.into()),
            notice: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            booking_id: None,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}
