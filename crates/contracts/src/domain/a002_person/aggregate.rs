use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Person record as returned by `/api/people/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub email: String,

    /// Values of dynamic fields keyed by `key_name`
    #[serde(default)]
    pub custom_data: Value,
}

/// Body of `POST /api/people/`.
///
/// The backend declares `custom_data` as a JSON-encoded string, so the map is
/// serialized before it goes on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonCreate {
    pub name: String,
    pub email: String,
    pub custom_data: String,
}

impl PersonCreate {
    pub fn new(name: String, email: String, custom_data: &Map<String, Value>) -> Self {
        Self {
            name,
            email,
            custom_data: Value::Object(custom_data.clone()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_data_is_encoded_as_string() {
        let mut data = Map::new();
        data.insert("fav_color".to_string(), Value::from("blue"));
        let dto = PersonCreate::new("Ann".into(), "ann@example.com".into(), &data);

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["custom_data"], Value::from(r#"{"fav_color":"blue"}"#));
    }

    #[test]
    fn test_person_response_with_object_custom_data() {
        let json = r#"{"id":3,"name":"Ann","email":"ann@example.com","custom_data":{"age":31}}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.custom_data["age"], Value::from(31));
    }
}
