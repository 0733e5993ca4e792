use crate::shared::api_error::ApiError;
use contracts::domain::a003_field_definition::aggregate::{
    CustomFieldDefinition, CustomFieldDefinitionCreate, CustomFieldDefinitionDto,
};

pub const GENERIC_SAVE_ERROR: &str = "Failed to create field. Please try again.";

/// State of the custom field admin page
#[derive(Debug, Clone, Default)]
pub struct FieldAdminState {
    pub entity_type: String,
    pub form: CustomFieldDefinitionDto,
    pub definitions: Vec<CustomFieldDefinition>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub is_saving: bool,
}

impl FieldAdminState {
    pub fn new(entity_type: &str) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            form: CustomFieldDefinitionDto::new_for(entity_type),
            ..Default::default()
        }
    }

    fn validate(form: &CustomFieldDefinitionDto) -> Result<(), &'static str> {
        if form.key_name.trim().is_empty() {
            return Err("Key name is required");
        }
        if form.label.trim().is_empty() {
            return Err("Label is required");
        }
        if form.field_type.has_options() && form.option_list().is_empty() {
            return Err("At least one option is required");
        }
        Ok(())
    }

    pub fn is_form_valid(&self) -> bool {
        Self::validate(&self.form).is_ok()
    }

    /// Key already used by a loaded definition
    pub fn is_duplicate_key(&self) -> bool {
        let key = self.form.key_name.trim();
        self.definitions.iter().any(|d| d.key_name == key)
    }

    pub fn begin_save(&mut self) -> Option<CustomFieldDefinitionCreate> {
        if self.is_saving {
            return None;
        }
        if let Err(msg) = Self::validate(&self.form) {
            self.error = Some(msg.to_string());
            return None;
        }

        self.is_saving = true;
        self.error = None;
        self.notice = None;
        Some(self.form.to_create())
    }

    pub fn finish_save(&mut self, result: Result<CustomFieldDefinition, ApiError>) {
        self.is_saving = false;
        match result {
            Ok(def) => {
                self.notice = Some(format!("Field \"{}\" created", def.label));
                self.definitions.push(def);
                self.form = CustomFieldDefinitionDto::new_for(&self.entity_type);
            }
            Err(e) => self.error = Some(e.user_message(GENERIC_SAVE_ERROR)),
        }
    }
}
