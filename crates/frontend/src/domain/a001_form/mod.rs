//! Form builder: draft store, payload assembly and submission.

pub mod api;
pub mod draft;
pub mod payload;
pub mod submit;
pub mod ui;
