use crate::domain::a001_form::api::{FormsApi, HttpFormsApi};
use crate::domain::a001_form::draft::DraftError;
use crate::domain::a001_form::submit::{send_payload, FormBuilderState};
use contracts::enums::field_type::FieldType;
use leptos::prelude::*;
use uuid::Uuid;

/// How long the "form created" notice stays visible
const NOTICE_MS: u32 = 4_000;

/// ViewModel for the form builder.
///
/// All builder state sits in one `RwSignal`; every mutation goes through
/// `update`, so the view closures reading it re-render on change.
#[derive(Clone, Copy)]
pub struct FormBuilderViewModel {
    pub state: RwSignal<FormBuilderState>,
}

impl FormBuilderViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(FormBuilderState::default()),
        }
    }

    pub fn set_name(&self, name: String) {
        self.state.update(|s| s.draft.rename(name));
    }

    pub fn set_description(&self, description: String) {
        self.state.update(|s| s.draft.description = description);
    }

    pub fn set_new_section_name(&self, name: String) {
        self.state.update(|s| s.new_section_name = name);
    }

    pub fn add_section(&self) {
        self.state.update(|s| {
            if let Ok(index) = s.add_section_from_input() {
                log::debug!("Draft section #{} added", index);
            }
        });
    }

    pub fn remove_section(&self, key: Uuid) {
        self.state.update(|s| {
            if let Some(index) = s.draft.section_index(key) {
                let _ = s.draft.remove_section(index);
            }
        });
    }

    /// Add a field to the section with render key `key`
    pub fn add_field(&self, key: Uuid, label: &str, field_type: FieldType) -> Result<(), DraftError> {
        self.state
            .try_update(|s| {
                let index = s
                    .draft
                    .section_index(key)
                    .ok_or(DraftError::SectionOutOfRange(s.draft.section_count()))?;
                s.draft.add_field(index, label, field_type).map(|_| ())
            })
            .unwrap_or(Ok(()))
    }

    pub fn remove_field(&self, section_key: Uuid, field_key: Uuid) {
        self.state.update(|s| {
            let Some(section_index) = s.draft.section_index(section_key) else {
                return;
            };
            let field_index = s.draft.sections()[section_index]
                .fields
                .iter()
                .position(|f| f.key == field_key);
            if let Some(field_index) = field_index {
                let _ = s.draft.remove_field(section_index, field_index);
            }
        });
    }

    /// Load existing forms into the templates list
    pub fn load_templates(&self) {
        let state = self.state;
        wasm_bindgen_futures::spawn_local(async move {
            match HttpFormsApi.list_forms().await {
                Ok(forms) => {
                    log::info!("Loaded {} form template(s)", forms.len());
                    state.update(|s| s.templates = forms);
                }
                Err(e) => {
                    log::error!("Failed to load form templates: {}", e);
                    state.update(|s| s.error = Some(format!("Failed to load templates: {}", e)));
                }
            }
        });
    }

    /// Send the draft; ignored while a previous submit is outstanding
    pub fn submit_command(&self) {
        let state = self.state;
        let Some(Ok(payload)) = state.try_update(|s| s.begin_submit()) else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = send_payload(&HttpFormsApi, &payload).await;
            let created = result.is_ok();
            state.update(|s| {
                s.finish_submit(&payload, result);
            });

            if created {
                gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
                state.update(|s| s.notice = None);
            }
        });
    }
}
