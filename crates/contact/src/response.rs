use serde::{Deserialize, Serialize};

/// Message used when the contact endpoint is unreachable and the demo
/// acknowledgement is synthesized locally.
pub const DEMO_ACKNOWLEDGEMENT: &str =
    "Thank you for your message! We'll get back to you within 24 hours.";

/// Envelope returned by write endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Default> ApiResponse<T> {
    /// The locally synthesized success acknowledgement (demo behavior), with
    /// empty `data`.
    pub fn demo_acknowledgement() -> Self {
        Self {
            data: T::default(),
            message: DEMO_ACKNOWLEDGEMENT.to_string(),
            success: true,
        }
    }
}
