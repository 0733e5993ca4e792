use super::draft::{DraftError, FormDraft};
use contracts::domain::a001_form::aggregate::{FieldCreate, FormCreate, SectionCreate};

/// Build the create-form request body from the current draft.
///
/// Pure: the draft is only read. Sections and fields keep their authoring
/// order and `order_index` mirrors the section's position.
pub fn assemble(draft: &FormDraft) -> Result<FormCreate, DraftError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(DraftError::EmptyFormName);
    }

    let description = draft.description.trim();
    let sections = draft
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| SectionCreate {
            name: section.name.clone(),
            order_index: index as u32,
            fields: section
                .fields
                .iter()
                .map(|field| FieldCreate {
                    label: field.label.clone(),
                    field_type: field.field_type,
                })
                .collect(),
        })
        .collect();

    Ok(FormCreate {
        name: name.to_string(),
        description: (!description.is_empty()).then(|| description.to_string()),
        sections,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::field_type::FieldType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_follows_authoring_order() {
        let mut draft = FormDraft::new();
        draft.rename(" Employee Onboarding ");
        draft.add_section("Personal Details").unwrap();
        draft.add_section("Employment").unwrap();
        draft.add_field(1, "Start date", FieldType::Date).unwrap();
        draft.add_field(0, "Full name", FieldType::Text).unwrap();
        draft.add_field(1, "Salary", FieldType::Number).unwrap();
        draft.add_field(0, "Nickname", FieldType::Text).unwrap();

        let payload = assemble(&draft).unwrap();

        assert_eq!(payload.name, "Employee Onboarding");
        assert_eq!(payload.description, None);
        let sections: Vec<(&str, u32, Vec<&str>)> = payload
            .sections
            .iter()
            .map(|s| {
                (
                    s.name.as_str(),
                    s.order_index,
                    s.fields.iter().map(|f| f.label.as_str()).collect(),
                )
            })
            .collect();
        assert_eq!(
            sections,
            vec![
                ("Personal Details", 0, vec!["Full name", "Nickname"]),
                ("Employment", 1, vec!["Start date", "Salary"]),
            ]
        );
        assert_eq!(payload.sections[1].fields[1].field_type, FieldType::Number);
    }

    #[test]
    fn test_assemble_does_not_touch_draft() {
        let mut draft = FormDraft::new();
        draft.rename("Test Form");
        draft.description = "  Used for tests ".to_string();
        draft.add_section("Section A").unwrap();
        let before = draft.clone();

        let first = assemble(&draft).unwrap();
        let second = assemble(&draft).unwrap();

        assert_eq!(draft, before);
        assert_eq!(first, second);
        assert_eq!(first.description.as_deref(), Some("Used for tests"));
    }

    #[test]
    fn test_blank_form_name_is_rejected() {
        let mut draft = FormDraft::new();
        draft.rename("   ");
        draft.add_section("Section A").unwrap();
        assert_eq!(assemble(&draft), Err(DraftError::EmptyFormName));
    }

    #[test]
    fn test_form_without_sections() {
        let mut draft = FormDraft::new();
        draft.rename("Empty");
        let payload = assemble(&draft).unwrap();
        assert!(payload.sections.is_empty());
    }
}
