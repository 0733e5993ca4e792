use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the backend: `{ "detail": ... }`.
///
/// `detail` is a plain string for business errors (e.g. duplicate email,
/// duplicate form name) and a list of `{ loc, msg, type }` objects for
/// request validation errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ApiErrorBody {
    /// Human readable message carried by `detail`, if any
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let msgs: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if msgs.is_empty() {
                    None
                } else {
                    Some(msgs.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_is_verbatim() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail":"A person with this email already exists."}"#)
                .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("A person with this email already exists.")
        );
    }

    #[test]
    fn test_validation_list_joins_messages() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","name"],"msg":"field required","type":"value_error.missing"},{"loc":["body","email"],"msg":"field required","type":"value_error.missing"}]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("field required; field required")
        );
    }

    #[test]
    fn test_missing_or_blank_detail() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
        let body: ApiErrorBody = serde_json::from_str(r#"{"detail":"  "}"#).unwrap();
        assert_eq!(body.message(), None);
        let body: ApiErrorBody = serde_json::from_str(r#"{"detail":42}"#).unwrap();
        assert_eq!(body.message(), None);
    }
}
