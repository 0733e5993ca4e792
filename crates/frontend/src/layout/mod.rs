pub mod navbar;
pub mod pages;
