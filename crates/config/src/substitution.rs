use anyhow::Result;
use regex::Regex;
use std::env;
use tracing::{debug, warn};

fn placeholder_regex() -> Regex {
    // ${VAR_NAME} or $VAR_NAME
    Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("valid regex")
}

/// Substitute environment variables in the format ${VAR_NAME} or $VAR_NAME.
///
/// Unset variables keep their placeholder so the validator can report them.
pub fn substitute_env_vars(content: &str) -> Result<String> {
    let re = placeholder_regex();
    let mut result = content.to_string();

    for caps in re.captures_iter(content) {
        let var_name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        let placeholder = caps.get(0).map(|m| m.as_str()).unwrap_or_default();

        match env::var(var_name) {
            Ok(value) => {
                debug!("Substituting environment variable: {}", var_name);
                result = result.replace(placeholder, &value);
            }
            Err(_) => {
                warn!("Environment variable '{}' not set", var_name);
            }
        }
    }

    Ok(result)
}

/// Check if a string still contains unresolved ${VAR} placeholders.
pub fn has_unresolved_env_vars(content: &str) -> bool {
    placeholder_regex().is_match(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_known_var() {
        env::set_var("PRICEGATE_TEST_KEY", "topsecret");
        let out = substitute_env_vars("api_key: ${PRICEGATE_TEST_KEY}").unwrap();
        assert_eq!(out, "api_key: topsecret");
        env::remove_var("PRICEGATE_TEST_KEY");
    }

    #[test]
    fn test_unset_var_keeps_placeholder() {
        env::remove_var("PRICEGATE_MISSING_VAR");
        let out = substitute_env_vars("key: ${PRICEGATE_MISSING_VAR}").unwrap();
        assert!(has_unresolved_env_vars(&out));
    }

}
