use async_trait::async_trait;
use contracts::domain::a002_person::aggregate::{Person, PersonCreate};
use gloo_net::http::Request;

use crate::shared::api_error::{read_json, ApiError};
use crate::shared::api_utils::api_url;

const PEOPLE_PATH: &str = "/api/people/";

#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait PeopleApi {
    /// `POST /api/people/`
    async fn create_person(&self, dto: &PersonCreate) -> Result<Person, ApiError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPeopleApi;

#[async_trait(?Send)]
impl PeopleApi for HttpPeopleApi {
    async fn create_person(&self, dto: &PersonCreate) -> Result<Person, ApiError> {
        let response = Request::post(&api_url(PEOPLE_PATH))
            .json(dto)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        read_json::<Person>(response).await
    }
}
