//! Client for the scholarship service's JSON endpoints.
//!
//! Two endpoints are consumed: `POST /submit-info` with the applicant record
//! and `POST /chat` with a question plus that record. Both answer with a
//! `status` field; anything other than `"success"` is a rejection. The HTTP
//! status code itself is not inspected, only the body.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::record::ApplicantRecord;

pub const SUBMIT_INFO_PATH: &str = "/submit-info";
pub const CHAT_PATH: &str = "/chat";
pub const STATUS_SUCCESS: &str = "success";

/// Response from POST /submit-info
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubmitResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub doc_id: Option<String>,
}

impl SubmitResponse {
    /// Success yields the stored document id, if the service returned one.
    pub fn into_result(self) -> Result<Option<String>, ApiError> {
        if self.status == STATUS_SUCCESS {
            Ok(self.doc_id)
        } else {
            Err(ApiError::Rejected {
                status: self.status,
                message: self.message.unwrap_or_default(),
            })
        }
    }
}

/// Request body for POST /chat
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub student_info: &'a ApplicantRecord,
}

/// Response from POST /chat
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatResponse {
    pub status: String,
    #[serde(default)]
    pub response: String,
}

impl ChatResponse {
    /// Success yields the reply text; a rejection carries it as the message.
    pub fn into_result(self) -> Result<String, ApiError> {
        if self.status == STATUS_SUCCESS {
            Ok(self.response)
        } else {
            Err(ApiError::Rejected {
                status: self.status,
                message: self.response,
            })
        }
    }
}

/// The service as seen by the backend handlers.
#[allow(async_fn_in_trait)]
pub trait ScholarshipApi {
    async fn submit_info(&self, record: &ApplicantRecord) -> Result<SubmitResponse, ApiError>;

    async fn chat(&self, message: &str, record: &ApplicantRecord)
        -> Result<ChatResponse, ApiError>;
}

/// HTTP implementation backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self.client.post(&url).json(body).send().await?;
        let http_status = response.status();
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%url, %http_status, error = %e, "undecodable response body");
            ApiError::Transport(format!("invalid response from {}: {}", url, e))
        })
    }
}

impl ScholarshipApi for HttpApi {
    async fn submit_info(&self, record: &ApplicantRecord) -> Result<SubmitResponse, ApiError> {
        self.post_json(SUBMIT_INFO_PATH, record).await
    }

    async fn chat(
        &self,
        message: &str,
        record: &ApplicantRecord,
    ) -> Result<ChatResponse, ApiError> {
        let request = ChatRequest {
            message,
            student_info: record,
        };
        self.post_json(CHAT_PATH, &request).await
    }
}
