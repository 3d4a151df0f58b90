use std::error::Error as StdError;

use ad_forge_core::contract::{ForgeAccepted, ForgeRequest};
use ad_forge_core::job::JobRecord;
use thiserror::Error;

/// Calls against the forge backend. Each method issues exactly one request.
pub trait ForgeBackend {
    fn submit_job(&self, request: &ForgeRequest) -> Result<ForgeAccepted, ForgeClientError>;

    fn fetch_job(&self, job_id: &str) -> Result<JobRecord, ForgeClientError>;
}

impl<T: ForgeBackend + ?Sized> ForgeBackend for &T {
    fn submit_job(&self, request: &ForgeRequest) -> Result<ForgeAccepted, ForgeClientError> {
        (**self).submit_job(request)
    }

    fn fetch_job(&self, job_id: &str) -> Result<JobRecord, ForgeClientError> {
        (**self).fetch_job(job_id)
    }
}

/// Errors surfaced while talking to the forge backend.
///
/// The display text carries the full cause chain so it can be shown to the
/// user as-is.
#[derive(Debug, Error)]
pub enum ForgeClientError {
    #[error("{}", describe_chain(.0))]
    Http(#[from] reqwest::Error),
    #[error("backend responded with HTTP {status}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {}", describe_chain(.0))]
    Json(#[source] reqwest::Error),
    #[error("job '{0}' not found")]
    NotFound(String),
    #[error("{0}")]
    Api(String),
}

/// Join an error with its sources, e.g. `error sending request: connection
/// refused`. Sources whose text is already shown are skipped.
pub fn describe_chain(error: &(dyn StdError + 'static)) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !cause_text.is_empty() && !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
