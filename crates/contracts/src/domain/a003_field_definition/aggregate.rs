use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enums::field_type::FieldType;

/// Entity types that can carry custom fields
pub const ENTITY_PERSON: &str = "person";
pub const ENTITY_ADDRESS: &str = "address";

/// Custom field definition as returned by `/api/fields/{entity_type}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldDefinition {
    pub id: i64,
    pub entity_type: String,
    pub key_name: String,
    pub label: String,
    pub field_type: FieldType,

    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub validation_rules: Value,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl CustomFieldDefinition {
    /// `validation_rules.required == true`
    pub fn is_required(&self) -> bool {
        self.validation_rules
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

/// Body of `POST /api/fields/`.
///
/// `options` and `validation_rules` travel as JSON-encoded strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldDefinitionCreate {
    pub entity_type: String,
    pub key_name: String,
    pub label: String,
    pub field_type: FieldType,
    pub options: String,
    pub validation_rules: String,
    pub is_active: bool,
}

/// Editable form data for a new definition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomFieldDefinitionDto {
    pub entity_type: String,
    pub key_name: String,
    pub label: String,
    pub field_type: FieldType,
    /// Comma separated option list
    pub options: String,
    pub required: bool,
}

impl CustomFieldDefinitionDto {
    pub fn new_for(entity_type: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            ..Default::default()
        }
    }

    /// Non-empty, trimmed option values in input order
    pub fn option_list(&self) -> Vec<String> {
        self.options
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn to_create(&self) -> CustomFieldDefinitionCreate {
        let options = if self.field_type.has_options() {
            self.option_list()
        } else {
            Vec::new()
        };
        let rules = if self.required {
            serde_json::json!({ "required": true })
        } else {
            serde_json::json!({})
        };

        CustomFieldDefinitionCreate {
            entity_type: self.entity_type.clone(),
            key_name: self.key_name.trim().to_string(),
            label: self.label.trim().to_string(),
            field_type: self.field_type,
            options: Value::from(options).to_string(),
            validation_rules: rules.to_string(),
            is_active: true,
        }
    }
}
