//! Authoring-time state of a form definition that has not been saved yet.
//!
//! A [`FormDraft`] owns its sections and every [`SectionDraft`] owns its
//! fields; positions are significant and define both rendering and
//! submission order. All operations are synchronous.

use contracts::enums::field_type::FieldType;
use thiserror::Error;
use uuid::Uuid;

/// Client-side validation failures; never reach the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Section name is required")]
    EmptySectionName,

    #[error("Field label is required")]
    EmptyFieldLabel,

    #[error("Form name is required")]
    EmptyFormName,

    #[error("Section index {0} is out of range")]
    SectionOutOfRange(usize),

    #[error("Field index {field} is out of range in section {section}")]
    FieldOutOfRange { section: usize, field: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDraft {
    /// Stable identity for keyed rendering; not submitted
    pub key: Uuid,
    pub label: String,
    pub field_type: FieldType,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDraft {
    /// Stable identity for keyed rendering; not submitted
    pub key: Uuid,
    pub name: String,
    pub fields: Vec<FieldDraft>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormDraft {
    pub name: String,
    pub description: String,
    sections: Vec<SectionDraft>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn sections(&self) -> &[SectionDraft] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// No name, no description and no sections
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.description.is_empty() && self.sections.is_empty()
    }

    /// Position of the section with the given render key
    pub fn section_index(&self, key: Uuid) -> Option<usize> {
        self.sections.iter().position(|s| s.key == key)
    }

    /// Append a section with an empty field list; returns its index.
    ///
    /// The name is trimmed; a blank name leaves the draft untouched.
    pub fn add_section(&mut self, name: &str) -> Result<usize, DraftError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DraftError::EmptySectionName);
        }

        self.sections.push(SectionDraft {
            key: Uuid::new_v4(),
            name: name.to_string(),
            fields: Vec::new(),
        });
        Ok(self.sections.len() - 1)
    }

    /// Append a field to the section at `section_index`; returns the field's index
    pub fn add_field(
        &mut self,
        section_index: usize,
        label: &str,
        field_type: FieldType,
    ) -> Result<usize, DraftError> {
        let section = self
            .sections
            .get_mut(section_index)
            .ok_or(DraftError::SectionOutOfRange(section_index))?;

        let label = label.trim();
        if label.is_empty() {
            return Err(DraftError::EmptyFieldLabel);
        }

        section.fields.push(FieldDraft {
            key: Uuid::new_v4(),
            label: label.to_string(),
            field_type,
        });
        Ok(section.fields.len() - 1)
    }

    pub fn remove_section(&mut self, section_index: usize) -> Result<SectionDraft, DraftError> {
        if section_index >= self.sections.len() {
            return Err(DraftError::SectionOutOfRange(section_index));
        }
        Ok(self.sections.remove(section_index))
    }

    pub fn remove_field(
        &mut self,
        section_index: usize,
        field_index: usize,
    ) -> Result<FieldDraft, DraftError> {
        let section = self
            .sections
            .get_mut(section_index)
            .ok_or(DraftError::SectionOutOfRange(section_index))?;

        if field_index >= section.fields.len() {
            return Err(DraftError::FieldOutOfRange {
                section: section_index,
                field: field_index,
            });
        }
        Ok(section.fields.remove(field_index))
    }

    /// Drop everything; used after a successful submit
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
