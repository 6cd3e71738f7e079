use serde::{Deserialize, Serialize};

/// Request body for `POST /watch/attach` on the inspection service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchAttachRequest {
    pub shift_title: String,
    pub watch_directory: String,
}

/// The shell's view of the attached workspace directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceStatus {
    pub path: String,
    pub is_active: bool,
}
