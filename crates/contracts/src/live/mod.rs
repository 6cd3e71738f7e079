//! Wire format of the inspection service's WebSocket feed.
//!
//! The service pushes one JSON object per text frame, discriminated by the
//! `type` field. Unknown or malformed frames are dropped by the channel, so
//! adding variants here is backward compatible for older services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveMessage {
    /// A single shell finished analysis.
    ShellAnalyzed(ShellAnalyzed),
    /// Running totals for a shift changed.
    ShiftProgress(ShiftProgress),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellAnalyzed {
    pub shift_no: String,
    pub shell_id: String,
    pub verdict: Verdict,
    pub captured_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    Defect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftProgress {
    pub shift_no: String,
    pub total_analyze: u32,
    pub approved: u32,
    pub defect: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_shell_analyzed_frame() {
        let frame = r#"{
            "type": "shell_analyzed",
            "shiftNo": "S003",
            "shellId": "SH-0042",
            "verdict": "defect",
            "capturedAt": "2026-08-28T07:15:00Z"
        }"#;
        let msg: LiveMessage = serde_json::from_str(frame).unwrap();
        match msg {
            LiveMessage::ShellAnalyzed(ev) => {
                assert_eq!(ev.shift_no, "S003");
                assert_eq!(ev.verdict, Verdict::Defect);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn decodes_shift_progress_frame() {
        let frame = r#"{
            "type": "shift_progress",
            "shiftNo": "S003",
            "totalAnalyze": 40,
            "approved": 33,
            "defect": 7
        }"#;
        let msg: LiveMessage = serde_json::from_str(frame).unwrap();
        assert_eq!(
            msg,
            LiveMessage::ShiftProgress(ShiftProgress {
                shift_no: "S003".to_string(),
                total_analyze: 40,
                approved: 33,
                defect: 7,
            })
        );
    }

    #[test]
    fn rejects_unknown_message_type() {
        let frame = r#"{"type": "heartbeat"}"#;
        assert!(serde_json::from_str::<LiveMessage>(frame).is_err());
    }
}
