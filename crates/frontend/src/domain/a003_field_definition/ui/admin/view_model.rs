use crate::domain::a003_field_definition::api::{create_definition, fetch_definitions};
use crate::domain::a003_field_definition::state::FieldAdminState;
use leptos::prelude::*;

/// ViewModel for the custom field admin page
#[derive(Clone, Copy)]
pub struct FieldDefinitionAdminViewModel {
    pub state: RwSignal<FieldAdminState>,
}

impl FieldDefinitionAdminViewModel {
    pub fn new(entity_type: &str) -> Self {
        Self {
            state: RwSignal::new(FieldAdminState::new(entity_type)),
        }
    }

    pub fn load_command(&self) {
        let state = self.state;
        let entity_type = state.with_untracked(|s| s.entity_type.clone());
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_definitions(&entity_type).await {
                Ok(defs) => {
                    log::info!("Loaded {} field definition(s) for {}", defs.len(), entity_type);
                    state.update(|s| s.definitions = defs);
                }
                Err(e) => {
                    log::error!("Failed to load field definitions: {}", e);
                    state.update(|s| s.error = Some(e));
                }
            }
        });
    }

    pub fn save_command(&self) {
        let state = self.state;
        let Some(Some(dto)) = state.try_update(|s| s.begin_save()) else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = create_definition(&dto).await;
            if let Err(e) = &result {
                log::warn!("Create field '{}' failed: {}", dto.key_name, e);
            }
            state.update(|s| s.finish_save(result));
        });
    }
}
