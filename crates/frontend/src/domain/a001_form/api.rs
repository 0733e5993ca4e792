use async_trait::async_trait;
use contracts::domain::a001_form::aggregate::{FormCreate, FormCreated, FormSummary};
use gloo_net::http::Request;

use crate::shared::api_error::{read_json, ApiError};
use crate::shared::api_utils::api_url;

const FORMS_PATH: &str = "/api/forms/";

/// Backend operations used by the form builder
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait FormsApi {
    /// `POST /api/forms/`
    async fn create_form(&self, payload: &FormCreate) -> Result<FormCreated, ApiError>;

    /// `GET /api/forms/` (existing forms, offered as templates)
    async fn list_forms(&self) -> Result<Vec<FormSummary>, ApiError>;
}

/// [`FormsApi`] over `fetch`
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFormsApi;

#[async_trait(?Send)]
impl FormsApi for HttpFormsApi {
    async fn create_form(&self, payload: &FormCreate) -> Result<FormCreated, ApiError> {
        let response = Request::post(&api_url(FORMS_PATH))
            .json(payload)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        read_json::<FormCreated>(response).await
    }

    async fn list_forms(&self) -> Result<Vec<FormSummary>, ApiError> {
        let response = Request::get(&api_url(FORMS_PATH))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        read_json::<Vec<FormSummary>>(response).await
    }
}
