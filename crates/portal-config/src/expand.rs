//! `${VAR}` and `${VAR:-default}` references in integration keys.

use crate::ConfigError;

/// Replace references in `value` with values from the process environment.
///
/// `field` names the setting in error messages.
pub(crate) fn expand_in_place(value: &mut String, field: &str) -> Result<(), ConfigError> {
    expand_in_place_with(value, field, |var| std::env::var(var).ok())
}

/// Like [`expand_in_place`], resolving variables through `lookup`.
///
/// Only the braced form is recognised; a bare `$` (common in ad keys) is
/// kept as written. Untouched values are not reallocated.
fn expand_in_place_with<F>(value: &mut String, field: &str, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), |var| {
        lookup(var).map(Some).ok_or_else(|| Unset(var.to_owned()))
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })?
    .into_owned();

    *value = expanded;
    Ok(())
}

/// Variable referenced without a default and missing from the environment.
struct Unset(String);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env(var: &str) -> Option<String> {
        match var {
            "ALGOLIA_KEY" => Some("abc123".to_owned()),
            "CARBON_SERVE" => Some("CEBDT27Y".to_owned()),
            _ => None,
        }
    }

    fn expand(value: &str, field: &str) -> Result<String, ConfigError> {
        let mut value = value.to_owned();
        expand_in_place_with(&mut value, field, env)?;
        Ok(value)
    }

    #[test]
    fn test_expand_api_key() {
        assert_eq!(expand("${ALGOLIA_KEY}", "theme.algolia.api_key").unwrap(), "abc123");
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand("${PLACEMENT:-vuejsorg}", "theme.carbon_ads.placement").unwrap(),
            "vuejsorg"
        );
        assert_eq!(
            expand("${ALGOLIA_KEY:-none}", "theme.algolia.api_key").unwrap(),
            "abc123"
        );
    }

    #[test]
    fn test_embedded_reference() {
        assert_eq!(
            expand("//cdn.carbonads.com/carbon.js?serve=${CARBON_SERVE}", "theme.carbon_ads.custom")
                .unwrap(),
            "//cdn.carbonads.com/carbon.js?serve=CEBDT27Y"
        );
    }

    #[test]
    fn test_missing_var_names_field() {
        let err = expand("${APP_ID}", "theme.algolia.app_id").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in theme.algolia.app_id: ${APP_ID} not set"
        );
    }

    #[test]
    fn test_literals_unchanged() {
        assert_eq!(expand("BH4D9OD16A", "theme.algolia.app_id").unwrap(), "BH4D9OD16A");
        assert_eq!(expand("$VAR", "theme.carbon_ads.custom").unwrap(), "$VAR");
    }

    #[test]
    fn test_process_environment_lookup() {
        let mut value = "${PORTAL_SURELY_UNSET_VARIABLE:-fallback}".to_owned();
        expand_in_place(&mut value, "theme.carbon_ads.carbon").unwrap();
        assert_eq!(value, "fallback");
    }
}
