//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_form--builder"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_form/` directory.

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Analytical dashboard view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration page.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Free-form page (home, not found).
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_form--builder"));
        assert!(!is_valid_page_id("a001_form"));
        assert!(!is_valid_page_id("--builder"));
    }
}
