use ad_forge_core::job::JobRecord;
use tracing::{info, warn};

use crate::adapters::forge_backend::{ForgeBackend, ForgeClientError};

const COMPONENT: &str = "job_status";

/// Fetch the current state of a forge job. Blank ids are rejected without
/// contacting the backend.
pub fn lookup_job_status(
    job_id: &str,
    backend: &impl ForgeBackend,
) -> Result<JobRecord, ForgeClientError> {
    let job_id = job_id.trim();
    if job_id.is_empty() {
        return Err(ForgeClientError::Api("job id cannot be empty".to_string()));
    }

    match backend.fetch_job(job_id) {
        Ok(record) => {
            info!(
                component = COMPONENT,
                event = "job_fetched",
                job_id = %record.job_id,
                status = ?record.status
            );
            Ok(record)
        }
        Err(err) => {
            warn!(
                component = COMPONENT,
                event = "job_fetch_failed",
                job_id = %job_id,
                error = %err
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use ad_forge_core::contract::{ForgeAccepted, ForgeRequest};
    use ad_forge_core::job::JobState;

    use super::*;

    struct RecordingBackend {
        known_job: Option<JobRecord>,
        lookups: Mutex<Vec<String>>,
    }

    impl RecordingBackend {
        fn with_job(record: Option<JobRecord>) -> Self {
            Self {
                known_job: record,
                lookups: Mutex::new(Vec::new()),
            }
        }

        fn lookups(&self) -> Vec<String> {
            self.lookups.lock().expect("poisoned mutex").clone()
        }
    }

    impl ForgeBackend for RecordingBackend {
        fn submit_job(&self, _request: &ForgeRequest) -> Result<ForgeAccepted, ForgeClientError> {
            Err(ForgeClientError::Api("submissions are not expected here".to_string()))
        }

        fn fetch_job(&self, job_id: &str) -> Result<JobRecord, ForgeClientError> {
            self.lookups
                .lock()
                .expect("poisoned mutex")
                .push(job_id.to_string());
            self.known_job
                .clone()
                .filter(|record| record.job_id == job_id)
                .ok_or_else(|| ForgeClientError::NotFound(job_id.to_string()))
        }
    }

    fn processing_job(job_id: &str) -> JobRecord {
        JobRecord {
            job_id: job_id.to_string(),
            status: JobState::Processing,
            final_video_url: None,
            error_message: None,
            created_at: Some(1_750_000_000),
            updated_at: None,
            request_body: None,
        }
    }

    #[test]
    fn blank_id_is_rejected_without_lookup() {
        let backend = RecordingBackend::with_job(None);

        let error = lookup_job_status("   ", &backend).expect_err("blank id should fail");

        assert_eq!(error.to_string(), "job id cannot be empty");
        assert!(backend.lookups().is_empty());
    }

    #[test]
    fn returns_record_for_trimmed_id() {
        let backend = RecordingBackend::with_job(Some(processing_job("job-7")));

        let record = lookup_job_status(" job-7 ", &backend).expect("job should exist");

        assert_eq!(record.status, JobState::Processing);
        assert_eq!(backend.lookups(), vec!["job-7".to_string()]);
    }

    #[test]
    fn unknown_job_surfaces_not_found() {
        let backend = RecordingBackend::with_job(Some(processing_job("job-7")));

        let error = lookup_job_status("job-8", &backend).expect_err("job should be missing");

        assert!(matches!(error, ForgeClientError::NotFound(ref id) if id == "job-8"));
        assert_eq!(error.to_string(), "job 'job-8' not found");
    }
}
