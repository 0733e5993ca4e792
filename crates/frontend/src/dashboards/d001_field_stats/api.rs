use contracts::dashboards::d001_field_stats::dto::FieldStatsResponse;
use gloo_net::http::Request;

use crate::shared::api_error::read_json;
use crate::shared::api_utils::api_url;

/// Aggregated answers of all active custom fields
pub async fn get_field_stats() -> Result<FieldStatsResponse, String> {
    let response = Request::get(&api_url("/api/analytics/field-stats"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    read_json::<FieldStatsResponse>(response)
        .await
        .map_err(|e| e.to_string())
}
