use crate::domain::a002_person::api::{HttpPeopleApi, PeopleApi};
use crate::domain::a002_person::state::PersonCreateState;
use crate::domain::a003_field_definition::api::fetch_definitions;
use contracts::domain::a003_field_definition::aggregate::ENTITY_PERSON;
use leptos::prelude::*;

/// ViewModel for the person create form
#[derive(Clone, Copy)]
pub struct PersonCreateViewModel {
    pub state: RwSignal<PersonCreateState>,
}

impl PersonCreateViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PersonCreateState::default()),
        }
    }

    /// Load the custom fields to render below name and email
    pub fn load_definitions(&self) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_definitions(ENTITY_PERSON).await {
                Ok(defs) => state.update(|s| s.definitions = defs),
                Err(e) => {
                    log::error!("Failed to load custom fields: {}", e);
                    state.update(|s| s.error = Some(format!("Failed to load custom fields: {}", e)));
                }
            }
        });
    }

    pub fn save_command(&self) {
        let state = self.state;
        let Some(Some(dto)) = state.try_update(|s| s.begin_submit()) else {
            return;
        };

        log::info!("Creating person '{}'", dto.email);
        wasm_bindgen_futures::spawn_local(async move {
            let result = HttpPeopleApi.create_person(&dto).await;
            match &result {
                Ok(person) => log::info!("Person created with id {}", person.id),
                Err(e) => log::warn!("Create person failed: {}", e),
            }
            state.update(|s| s.finish_submit(result));
        });
    }
}
