//! One request/response cycle of the form builder.
//!
//! [`FormBuilderState::begin_submit`] assembles the payload and marks the
//! builder busy, the caller sends it, and [`FormBuilderState::finish_submit`]
//! folds the response back into the state. On failure the draft is kept so
//! the user can fix and resend without retyping.

use super::api::FormsApi;
use super::draft::{DraftError, FormDraft};
use super::payload::assemble;
use crate::shared::api_error::ApiError;
use contracts::domain::a001_form::aggregate::{FormCreate, FormCreated, FormSummary};

/// Shown when the backend gives no usable explanation
pub const GENERIC_SUBMIT_ERROR: &str = "Failed to save form. Please try again.";

/// Everything the builder view renders
#[derive(Debug, Clone, Default)]
pub struct FormBuilderState {
    pub draft: FormDraft,
    /// Text of the "New Section Name" input
    pub new_section_name: String,
    /// Validation hint under the section input
    pub section_hint: Option<String>,
    /// Existing forms; a created form is appended here
    pub templates: Vec<FormSummary>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub is_submitting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Created(FormCreated),
    /// Request sent and rejected, or never completed; carries the shown message
    Failed(String),
    /// Stopped by client-side validation, nothing was sent
    Invalid(DraftError),
    /// A previous submit is still outstanding
    Busy,
}

impl FormBuilderState {
    /// Add a section named after the "New Section Name" input
    pub fn add_section_from_input(&mut self) -> Result<usize, DraftError> {
        match self.draft.add_section(&self.new_section_name) {
            Ok(index) => {
                self.new_section_name.clear();
                self.section_hint = None;
                Ok(index)
            }
            Err(e) => {
                self.section_hint = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Validate and assemble the payload; on success the builder is busy until
    /// [`finish_submit`](Self::finish_submit).
    pub fn begin_submit(&mut self) -> Result<FormCreate, SubmitOutcome> {
        if self.is_submitting {
            return Err(SubmitOutcome::Busy);
        }

        match assemble(&self.draft) {
            Ok(payload) => {
                self.is_submitting = true;
                self.error = None;
                self.notice = None;
                Ok(payload)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(SubmitOutcome::Invalid(e))
            }
        }
    }

    pub fn finish_submit(
        &mut self,
        payload: &FormCreate,
        result: Result<FormCreated, ApiError>,
    ) -> SubmitOutcome {
        self.is_submitting = false;

        match result {
            Ok(created) => {
                self.templates.push(FormSummary {
                    id: created.id,
                    name: payload.name.clone(),
                    description: payload.description.clone(),
                });
                self.draft.clear();
                self.new_section_name.clear();
                self.section_hint = None;
                self.error = None;
                self.notice = Some(format!(
                    "Form \"{}\" created (id {})",
                    payload.name, created.id
                ));
                SubmitOutcome::Created(created)
            }
            Err(e) => {
                let message = e.user_message(GENERIC_SUBMIT_ERROR);
                self.error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }
}

/// Send an assembled payload to the backend
pub async fn send_payload<A: FormsApi + ?Sized>(
    api: &A,
    payload: &FormCreate,
) -> Result<FormCreated, ApiError> {
    log::info!(
        "Submitting form '{}' with {} section(s)",
        payload.name,
        payload.sections.len()
    );
    let result = api.create_form(payload).await;
    if let Err(e) = &result {
        log::error!("Create form failed: {}", e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_form::api::MockFormsApi;
    use contracts::enums::field_type::FieldType;
    use pretty_assertions::assert_eq;

    fn submit_draft(state: &mut FormBuilderState, api: &MockFormsApi) -> SubmitOutcome {
        let payload = match state.begin_submit() {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };
        let result = tokio_test::block_on(send_payload(api, &payload));
        state.finish_submit(&payload, result)
    }

    fn state_with(name: &str, sections: &[&str]) -> FormBuilderState {
        let mut state = FormBuilderState::default();
        state.draft.rename(name);
        for section in sections {
            state.new_section_name = section.to_string();
            state.add_section_from_input().unwrap();
        }
        state
    }

    #[test]
    fn test_add_section_from_input() {
        let mut state = FormBuilderState::default();
        state.new_section_name = "Personal Info".to_string();

        assert_eq!(state.add_section_from_input(), Ok(0));
        assert_eq!(state.draft.section_count(), 1);
        assert_eq!(state.draft.sections()[0].name, "Personal Info");
        assert!(state.new_section_name.is_empty());
        assert_eq!(state.section_hint, None);
    }

    #[test]
    fn test_blank_section_input_sets_hint() {
        let mut state = FormBuilderState::default();
        state.new_section_name = "   ".to_string();

        assert_eq!(
            state.add_section_from_input(),
            Err(DraftError::EmptySectionName)
        );
        assert_eq!(state.draft.section_count(), 0);
        assert_eq!(state.section_hint.as_deref(), Some("Section name is required"));
        assert_eq!(state.new_section_name, "   ");
    }

    #[test]
    fn test_submit_sends_single_request_with_draft() {
        let mut state = state_with("Test Form", &["Section A"]);

        let mut api = MockFormsApi::new();
        api.expect_create_form()
            .withf(|payload: &FormCreate| {
                payload.name == "Test Form"
                    && payload.sections.len() == 1
                    && payload.sections[0].name == "Section A"
            })
            .times(1)
            .returning(|_| Ok(FormCreated { id: 1 }));

        let outcome = submit_draft(&mut state, &api);

        assert_eq!(outcome, SubmitOutcome::Created(FormCreated { id: 1 }));
        assert!(state.draft.is_empty());
        assert!(!state.is_submitting);
        assert_eq!(
            state.templates,
            vec![FormSummary {
                id: 1,
                name: "Test Form".to_string(),
                description: None
            }]
        );
        assert_eq!(state.notice.as_deref(), Some("Form \"Test Form\" created (id 1)"));
    }

    #[test]
    fn test_conflict_detail_shown_and_draft_kept() {
        let mut state = state_with("Test Form", &["Section A"]);
        state.draft.add_field(0, "Email", FieldType::Text).unwrap();
        let draft_before = state.draft.clone();

        let mut api = MockFormsApi::new();
        api.expect_create_form().times(1).returning(|_| {
            Err(ApiError::from_response_text(
                400,
                r#"{"detail":"A person with this email already exists."}"#,
            ))
        });

        let outcome = submit_draft(&mut state, &api);

        assert_eq!(
            outcome,
            SubmitOutcome::Failed("A person with this email already exists.".to_string())
        );
        assert_eq!(
            state.error.as_deref(),
            Some("A person with this email already exists.")
        );
        assert_eq!(state.draft, draft_before);
        assert!(state.templates.is_empty());
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_transport_failure_shows_generic_message() {
        let mut state = state_with("Test Form", &[]);

        let mut api = MockFormsApi::new();
        api.expect_create_form()
            .times(1)
            .returning(|_| Err(ApiError::Transport("NetworkError".to_string())));

        let outcome = submit_draft(&mut state, &api);

        assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_SUBMIT_ERROR.to_string()));
        assert_eq!(state.draft.name, "Test Form");
    }

    #[test]
    fn test_invalid_draft_never_reaches_backend() {
        let mut state = state_with("  ", &["Section A"]);

        let mut api = MockFormsApi::new();
        api.expect_create_form().times(0);

        let outcome = submit_draft(&mut state, &api);

        assert_eq!(outcome, SubmitOutcome::Invalid(DraftError::EmptyFormName));
        assert_eq!(state.error.as_deref(), Some("Form name is required"));
        assert!(!state.is_submitting);
        assert_eq!(state.draft.section_count(), 1);
    }

    #[test]
    fn test_second_submit_refused_while_pending() {
        let mut state = state_with("Test Form", &["Section A"]);

        let payload = state.begin_submit().unwrap();
        assert!(state.is_submitting);
        assert_eq!(state.begin_submit(), Err(SubmitOutcome::Busy));

        let outcome = state.finish_submit(&payload, Ok(FormCreated { id: 9 }));
        assert_eq!(outcome, SubmitOutcome::Created(FormCreated { id: 9 }));
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_retry_after_failure_sends_same_payload() {
        let mut state = state_with("Test Form", &["Section A", "Section B"]);

        let first = state.begin_submit().unwrap();
        state.finish_submit(&first, Err(ApiError::Transport("offline".to_string())));

        let second = state.begin_submit().unwrap();
        assert_eq!(first, second);
        assert_eq!(state.error, None);
    }
}
