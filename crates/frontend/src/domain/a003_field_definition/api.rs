use contracts::domain::a003_field_definition::aggregate::{
    CustomFieldDefinition, CustomFieldDefinitionCreate,
};
use gloo_net::http::Request;

use crate::shared::api_error::{read_json, ApiError};
use crate::shared::api_utils::api_url;

/// Active definitions for an entity type (`GET /api/fields/{entity_type}`)
pub async fn fetch_definitions(entity_type: &str) -> Result<Vec<CustomFieldDefinition>, String> {
    let url = api_url(&format!(
        "/api/fields/{}",
        urlencoding::encode(entity_type)
    ));
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json::<Vec<CustomFieldDefinition>>(response)
        .await
        .map_err(|e| e.to_string())
}

/// `POST /api/fields/`
pub async fn create_definition(
    dto: &CustomFieldDefinitionCreate,
) -> Result<CustomFieldDefinition, ApiError> {
    let response = Request::post(&api_url("/api/fields/"))
        .json(dto)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    read_json::<CustomFieldDefinition>(response).await
}
