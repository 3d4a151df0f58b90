use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobState {
    Pending,
    Processing,
    Complete,
    Failed,
    #[serde(other)]
    Unknown,
}

impl JobState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

/// Ad generation job as reported by the backend status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub job_id: String,
    pub status: JobState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
}

impl JobRecord {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }

    pub fn updated_at_utc(&self) -> Option<DateTime<Utc>> {
        self.updated_at
            .and_then(|seconds| DateTime::from_timestamp(seconds, 0))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_completed_job() {
        let record: JobRecord = serde_json::from_value(json!({
            "jobId": "5d1c",
            "status": "COMPLETE",
            "finalVideoUrl": "https://cdn.example/ad.mp4",
            "createdAt": 1_750_000_000,
            "updatedAt": 1_750_000_090,
            "requestBody": {"sku": "PROD-S24ULTRA"}
        }))
        .expect("record should parse");

        assert_eq!(record.status, JobState::Complete);
        assert!(record.status.is_terminal());
        assert_eq!(
            record.final_video_url.as_deref(),
            Some("https://cdn.example/ad.mp4")
        );
        assert_eq!(
            record.created_at_utc().map(|at| at.timestamp()),
            Some(1_750_000_000)
        );
    }

    #[test]
    fn tolerates_unknown_states() {
        let record: JobRecord =
            serde_json::from_value(json!({"jobId": "x", "status": "RENDERING"}))
                .expect("record should parse");

        assert_eq!(record.status, JobState::Unknown);
        assert!(!record.status.is_terminal());
        assert_eq!(record.updated_at_utc(), None);
    }

    #[test]
    fn pending_job_is_not_terminal() {
        assert!(!JobState::Pending.is_terminal());
        assert!(!JobState::Processing.is_terminal());
        assert!(JobState::Failed.is_terminal());
    }
}
