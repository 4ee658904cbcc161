use serde::{Deserialize, Serialize};

/// Fallback notice when the backend answers with neither field set.
pub const NO_STATUS_FEEDBACK: &str = "The camera backend returned no status.";

/// Response body of the camera action endpoints. The backend sets exactly one
/// of the two fields on a well-behaved reply, but both may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionStatus {
    pub status: Option<String>,
    pub error: Option<String>,
}

impl ActionStatus {
    /// The message shown to the user: `status` wins over `error`.
    pub fn feedback(&self) -> &str {
        self.status
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(NO_STATUS_FEEDBACK)
    }
}
