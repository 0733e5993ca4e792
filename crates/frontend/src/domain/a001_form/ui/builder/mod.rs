//! Form Builder UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos components (pure UI)

mod view;
mod view_model;

pub use view::FormBuilder;
pub use view_model::FormBuilderViewModel;
