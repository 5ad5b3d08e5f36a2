use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Struct that represents the current status of the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthData {
    /// Always `"OK"` while the server is serving requests.
    pub message: String,
}

impl HealthData {
    /// The healthy status.
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}
