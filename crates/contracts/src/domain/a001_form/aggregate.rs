use serde::{Deserialize, Serialize};

use crate::enums::field_type::FieldType;

// ============================================================================
// Create request (submission payload)
// ============================================================================

/// Body of `POST /api/forms/`.
///
/// Built fresh from the builder's draft on every submit attempt; section and
/// field order follow authoring order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormCreate {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub sections: Vec<SectionCreate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCreate {
    pub name: String,

    /// Position of the section inside the form
    #[serde(default)]
    pub order_index: u32,

    #[serde(default)]
    pub fields: Vec<FieldCreate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCreate {
    pub label: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,
}

// ============================================================================
// Responses
// ============================================================================

/// Successful create response; only the identifier is relied upon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormCreated {
    pub id: i64,
}

/// Entry of `GET /api/forms/` (form templates)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSummary {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_wire_shape() {
        let payload = FormCreate {
            name: "Test Form".to_string(),
            description: None,
            sections: vec![SectionCreate {
                name: "Section A".to_string(),
                order_index: 0,
                fields: vec![FieldCreate {
                    label: "Age".to_string(),
                    field_type: FieldType::Number,
                }],
            }],
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Test Form",
                "sections": [
                    {
                        "name": "Section A",
                        "order_index": 0,
                        "fields": [ { "label": "Age", "type": "number" } ]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_backend_form_response_parses_as_summary() {
        let json = r#"{"id":7,"name":"Onboarding","description":null,"fields":[]}"#;
        let summary: FormSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.name, "Onboarding");

        let created: FormCreated = serde_json::from_str(json).unwrap();
        assert_eq!(created, FormCreated { id: 7 });
    }
}
