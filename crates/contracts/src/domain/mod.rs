pub mod a001_form;
pub mod a002_person;
pub mod a003_field_definition;
