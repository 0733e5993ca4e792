//! Custom Field Definitions admin UI Module
//!
//! - view_model.rs: ViewModel with commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::FieldDefinitionAdmin;
pub use view_model::FieldDefinitionAdminViewModel;
