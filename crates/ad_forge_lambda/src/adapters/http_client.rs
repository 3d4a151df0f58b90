//! Blocking HTTP client for the forge backend.
//!
//! No timeout or retry policy is configured; whatever `reqwest` does by
//! default applies.

use ad_forge_core::contract::{ForgeAccepted, ForgeRequest};
use ad_forge_core::job::JobRecord;
use reqwest::blocking::{Client, Response};
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde_json::Value;

use super::forge_backend::{ForgeBackend, ForgeClientError};
use crate::config::ForgeConfig;

#[derive(Debug, Clone)]
pub struct HttpForgeClient {
    client: Client,
    config: ForgeConfig,
}

impl HttpForgeClient {
    pub fn new(config: ForgeConfig) -> Result<Self, ForgeClientError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    fn job_url(&self, job_id: &str) -> Result<Url, ForgeClientError> {
        let mut url = Url::parse(&self.config.status_url())
            .map_err(|err| ForgeClientError::Api(format!("failed to build status URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| ForgeClientError::Api("status URL cannot carry a job id".to_string()))?
            .push(job_id);
        Ok(url)
    }
}

impl ForgeBackend for HttpForgeClient {
    fn submit_job(&self, request: &ForgeRequest) -> Result<ForgeAccepted, ForgeClientError> {
        let response = self
            .client
            .post(self.config.forge_url())
            .header(ACCEPT, "application/json")
            .json(request)
            .send()?;

        let body = read_json_body(response)?;
        Ok(ForgeAccepted::from_body(&body))
    }

    fn fetch_job(&self, job_id: &str) -> Result<JobRecord, ForgeClientError> {
        let url = self.job_url(job_id)?;
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ForgeClientError::NotFound(job_id.to_string()));
        }

        let body = read_json_body(response)?;
        serde_json::from_value(body)
            .map_err(|err| ForgeClientError::Api(format!("unexpected job record: {err}")))
    }
}

fn read_json_body(response: Response) -> Result<Value, ForgeClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(ForgeClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    response.json::<Value>().map_err(ForgeClientError::Json)
}
