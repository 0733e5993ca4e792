use serde::{Deserialize, Serialize};

/// Input type of a custom field, as stored by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Date,
    Select,
    Multiselect,
    Checkbox,
    Radio,
}

impl FieldType {
    /// Wire code, e.g. "multiselect"
    pub fn code(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Select => "select",
            FieldType::Multiselect => "multiselect",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::Select => "Select",
            FieldType::Multiselect => "Multi-select",
            FieldType::Checkbox => "Checkbox",
            FieldType::Radio => "Radio",
        }
    }

    pub fn all() -> Vec<FieldType> {
        vec![
            FieldType::Text,
            FieldType::Number,
            FieldType::Date,
            FieldType::Select,
            FieldType::Multiselect,
            FieldType::Checkbox,
            FieldType::Radio,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "text" => Some(FieldType::Text),
            "number" => Some(FieldType::Number),
            "date" => Some(FieldType::Date),
            "select" => Some(FieldType::Select),
            "multiselect" => Some(FieldType::Multiselect),
            "checkbox" => Some(FieldType::Checkbox),
            "radio" => Some(FieldType::Radio),
            _ => None,
        }
    }

    /// Whether the field offers a fixed list of options
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            FieldType::Select | FieldType::Multiselect | FieldType::Radio
        )
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
