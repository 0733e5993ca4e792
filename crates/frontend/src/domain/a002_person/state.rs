//! Form state of the "create person" page, including values of the
//! dynamic fields defined for `person`.

use crate::shared::api_error::ApiError;
use contracts::domain::a002_person::aggregate::{Person, PersonCreate};
use contracts::domain::a003_field_definition::aggregate::CustomFieldDefinition;
use contracts::enums::field_type::FieldType;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const GENERIC_SAVE_ERROR: &str = "Failed to create person. Please try again.";

#[derive(Debug, Clone, Default)]
pub struct PersonCreateState {
    pub name: String,
    pub email: String,
    /// Active custom fields for `person`
    pub definitions: Vec<CustomFieldDefinition>,
    /// Raw input per single-valued custom field, keyed by `key_name`
    pub values: BTreeMap<String, String>,
    /// Checked options per multiselect field, in click order
    pub multi_values: BTreeMap<String, Vec<String>>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub is_submitting: bool,
}

/// Convert raw input of a custom field into its JSON value; `None` when unanswered
pub fn custom_value(field_type: FieldType, raw: &str) -> Option<Value> {
    let raw = raw.trim();
    match field_type {
        FieldType::Checkbox => Some(Value::Bool(raw == "true")),
        _ if raw.is_empty() => None,
        FieldType::Number => Some(
            raw.parse::<i64>()
                .map(Value::from)
                .or_else(|_| raw.parse::<f64>().map(Value::from))
                .unwrap_or_else(|_| Value::from(raw)),
        ),
        _ => Some(Value::from(raw)),
    }
}

impl PersonCreateState {
    pub fn value(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    pub fn set_value(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    pub fn is_option_checked(&self, key: &str, option: &str) -> bool {
        self.multi_values
            .get(key)
            .is_some_and(|v| v.iter().any(|o| o == option))
    }

    pub fn toggle_option(&mut self, key: &str, option: &str, checked: bool) {
        let selected = self.multi_values.entry(key.to_string()).or_default();
        selected.retain(|o| o != option);
        if checked {
            selected.push(option.to_string());
        }
    }

    /// `custom_data` object sent with the person
    pub fn custom_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        for def in &self.definitions {
            let value = if def.field_type == FieldType::Multiselect {
                self.multi_values
                    .get(&def.key_name)
                    .filter(|v| !v.is_empty())
                    .map(|v| Value::from(v.clone()))
            } else {
                self.values
                    .get(&def.key_name)
                    .and_then(|raw| custom_value(def.field_type, raw))
            };
            if let Some(value) = value {
                data.insert(def.key_name.clone(), value);
            }
        }
        data
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name is required".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("Email is required".to_string());
        }

        let data = self.custom_data();
        let missing = self
            .definitions
            .iter()
            .filter(|d| d.is_required() && d.field_type != FieldType::Checkbox)
            .find(|d| !data.contains_key(&d.key_name));
        if let Some(def) = missing {
            return Err(format!("{} is required", def.label));
        }
        Ok(())
    }

    /// Validate and build the request body; `None` when busy or invalid
    pub fn begin_submit(&mut self) -> Option<PersonCreate> {
        if self.is_submitting {
            return None;
        }
        if let Err(msg) = self.validate() {
            self.error = Some(msg);
            return None;
        }

        self.is_submitting = true;
        self.error = None;
        self.notice = None;
        Some(PersonCreate::new(
            self.name.trim().to_string(),
            self.email.trim().to_string(),
            &self.custom_data(),
        ))
    }

    pub fn finish_submit(&mut self, result: Result<Person, ApiError>) {
        self.is_submitting = false;
        match result {
            Ok(person) => {
                let definitions = std::mem::take(&mut self.definitions);
                *self = Self {
                    definitions,
                    notice: Some(format!("{} saved (id {})", person.name, person.id)),
                    ..Self::default()
                };
            }
            Err(e) => self.error = Some(e.user_message(GENERIC_SAVE_ERROR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_person::api::{MockPeopleApi, PeopleApi};
    use pretty_assertions::assert_eq;

    fn definition(key: &str, field_type: FieldType, required: bool) -> CustomFieldDefinition {
        CustomFieldDefinition {
            id: 1,
            entity_type: "person".to_string(),
            key_name: key.to_string(),
            label: key.to_uppercase(),
            field_type,
            options: vec!["a".to_string(), "b".to_string()],
            validation_rules: if required {
                serde_json::json!({ "required": true })
            } else {
                serde_json::json!({})
            },
            is_active: true,
        }
    }

    fn filled() -> PersonCreateState {
        PersonCreateState {
            name: "Test User".to_string(),
            email: "duplicate@example.com".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_custom_value_conversion() {
        assert_eq!(custom_value(FieldType::Number, "42"), Some(Value::from(42)));
        assert_eq!(custom_value(FieldType::Number, "4.5"), Some(Value::from(4.5)));
        assert_eq!(custom_value(FieldType::Number, "n/a"), Some(Value::from("n/a")));
        assert_eq!(custom_value(FieldType::Checkbox, "true"), Some(Value::Bool(true)));
        assert_eq!(custom_value(FieldType::Checkbox, ""), Some(Value::Bool(false)));
        assert_eq!(custom_value(FieldType::Text, "  "), None);
        assert_eq!(custom_value(FieldType::Date, "2024-03-15"), Some(Value::from("2024-03-15")));
    }

    #[test]
    fn test_custom_data_collects_answers() {
        let mut state = filled();
        state.definitions = vec![
            definition("age", FieldType::Number, false),
            definition("langs", FieldType::Multiselect, false),
            definition("nick", FieldType::Text, false),
        ];
        state.set_value("age", "31".to_string());
        state.toggle_option("langs", "b", true);
        state.toggle_option("langs", "a", true);
        state.toggle_option("langs", "b", false);

        let data = state.custom_data();
        assert_eq!(
            Value::Object(data),
            serde_json::json!({ "age": 31, "langs": ["a"] })
        );
        assert!(state.is_option_checked("langs", "a"));
        assert!(!state.is_option_checked("langs", "b"));
    }

    #[test]
    fn test_presence_checks() {
        let mut state = PersonCreateState::default();
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.error.as_deref(), Some("Name is required"));

        state.name = "Ann".to_string();
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.error.as_deref(), Some("Email is required"));

        state.email = "ann@example.com".to_string();
        state.definitions = vec![definition("age", FieldType::Number, true)];
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.error.as_deref(), Some("AGE is required"));
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_conflict_detail_rendered_and_fields_kept() {
        let mut state = filled();

        let mut api = MockPeopleApi::new();
        api.expect_create_person().times(1).returning(|_| {
            Err(ApiError::from_response_text(
                400,
                r#"{"detail":"A person with this email already exists."}"#,
            ))
        });

        let dto = state.begin_submit().unwrap();
        assert!(state.is_submitting);
        let result = tokio_test::block_on(api.create_person(&dto));
        state.finish_submit(result);

        assert_eq!(
            state.error.as_deref(),
            Some("A person with this email already exists.")
        );
        assert_eq!(state.name, "Test User");
        assert_eq!(state.email, "duplicate@example.com");
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_success_resets_form_but_keeps_definitions() {
        let mut state = filled();
        state.definitions = vec![definition("nick", FieldType::Text, false)];
        state.set_value("nick", "tu".to_string());

        let dto = state.begin_submit().unwrap();
        assert_eq!(dto.custom_data, r#"{"nick":"tu"}"#);

        state.finish_submit(Ok(Person {
            id: 5,
            name: dto.name.clone(),
            email: dto.email.clone(),
            custom_data: serde_json::json!({ "nick": "tu" }),
        }));

        assert_eq!(state.name, "");
        assert!(state.values.is_empty());
        assert_eq!(state.definitions.len(), 1);
        assert_eq!(state.notice.as_deref(), Some("Test User saved (id 5)"));
    }
}
