//! DTOs shared between the person registry front end and its REST backend.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
