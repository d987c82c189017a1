//! Environment override handling.
//!
//! `BIVISTA_*` variables take precedence over file and default values for
//! immediate CLI use.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(key) = env_lookup("BIVISTA_API_KEY") {
        config.ai.api_key = key;
    }
    if let Some(model) = env_lookup("BIVISTA_AI_MODEL") {
        config.ai.model = model;
    }
    if let Some(theme) = env_lookup("BIVISTA_THEME") {
        config.display.theme = theme;
    }
    if let Some(size) = env_lookup("BIVISTA_MAX_FILE_SIZE_MB") {
        let parsed = size.parse::<u64>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid BIVISTA_MAX_FILE_SIZE_MB value `{size}`: expected positive integer megabytes"
            ))
        })?;
        // Clamp to at least 1 MB so an override cannot disable uploads.
        config.upload.max_file_size_mb = parsed.max(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn overrides_apply_when_present() {
        let mut config = Config::default();
        let env = env_from(&[
            ("BIVISTA_API_KEY", "sk-test"),
            ("BIVISTA_THEME", "executive"),
            ("BIVISTA_MAX_FILE_SIZE_MB", "50"),
        ]);
        apply_env_overrides(&mut config, &env).expect("apply");
        assert_eq!(config.ai.api_key, "sk-test");
        assert_eq!(config.display.theme, "executive");
        assert_eq!(config.upload.max_file_size_mb, 50);
    }

    #[test]
    fn absent_vars_leave_config_untouched() {
        let mut config = Config::default();
        let before = config.clone();
        apply_env_overrides(&mut config, &env_from(&[])).expect("apply");
        assert_eq!(config, before);
    }

    // Ensures a non-numeric size override fails loudly instead of being
    // silently ignored.
    #[test]
    fn invalid_size_override_is_rejected() {
        let mut config = Config::default();
        let env = env_from(&[("BIVISTA_MAX_FILE_SIZE_MB", "huge")]);
        let err = apply_env_overrides(&mut config, &env).expect_err("must reject");
        assert!(err.to_string().contains("BIVISTA_MAX_FILE_SIZE_MB"));
    }

    #[test]
    fn zero_size_override_clamps_to_one() {
        let mut config = Config::default();
        let env = env_from(&[("BIVISTA_MAX_FILE_SIZE_MB", "0")]);
        apply_env_overrides(&mut config, &env).expect("apply");
        assert_eq!(config.upload.max_file_size_mb, 1);
    }
}
