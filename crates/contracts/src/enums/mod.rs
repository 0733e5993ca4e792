pub mod field_type;
