//! Query mode → generation model identifier.

use sift_core::config::defaults::{DEFAULT_DEEP_MODEL, DEFAULT_FAST_MODEL, DEFAULT_GENERAL_MODEL};
use sift_core::config::ModelTable;
use sift_core::models::QueryMode;

/// Built-in model for a mode. Absent resolves like `General`.
pub fn resolve_model(mode: Option<QueryMode>) -> &'static str {
    match mode.unwrap_or_default() {
        QueryMode::General => DEFAULT_GENERAL_MODEL,
        QueryMode::Fast => DEFAULT_FAST_MODEL,
        QueryMode::Deep => DEFAULT_DEEP_MODEL,
    }
}

/// Resolve a raw, possibly unrecognized selector against a configured table.
pub fn resolve_model_str<'t>(table: &'t ModelTable, raw: Option<&str>) -> &'t str {
    table.model_for(Some(QueryMode::parse(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_mode_has_its_model() {
        assert_eq!(resolve_model(Some(QueryMode::General)), "gpt-5");
        assert_eq!(resolve_model(Some(QueryMode::Fast)), "gpt-5-nano");
        assert_eq!(resolve_model(Some(QueryMode::Deep)), "o4-mini-deep-research");
    }

    #[test]
    fn absent_unrecognized_and_general_agree() {
        let table = ModelTable::default();
        let general = resolve_model(Some(QueryMode::General));
        assert_eq!(resolve_model(None), general);
        assert_eq!(resolve_model_str(&table, None), general);
        assert_eq!(resolve_model_str(&table, Some("general")), general);
        assert_eq!(resolve_model_str(&table, Some("unrecognized-value")), general);
    }

    #[test]
    fn configured_table_overrides_builtins() {
        let table = ModelTable {
            general: "local-large".into(),
            fast: "local-small".into(),
            deep: "local-reasoning".into(),
        };
        assert_eq!(resolve_model_str(&table, Some("fast")), "local-small");
        assert_eq!(resolve_model_str(&table, Some("bogus")), "local-large");
    }
}
