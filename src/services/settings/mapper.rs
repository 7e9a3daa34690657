use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};

/// Parse and validate settings from TOML text. Missing keys take defaults.
pub fn settings_from_toml(content: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(content).context("Failed to parse settings")?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    Ok(settings)
}

pub fn settings_to_toml(settings: &Settings) -> Result<String> {
    toml::to_string_pretty(settings).context("Failed to serialize settings")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ui::ViewType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings = settings_from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_document() {
        let settings = settings_from_toml(
            r#"
            first_day_of_week = 1
            time_format = "24h"
            default_view = "week"
            "#,
        )
        .unwrap();

        assert_eq!(settings.first_day_of_week, 1);
        assert!(settings.uses_24h_clock());
        assert_eq!(settings.default_view, ViewType::Week);
        assert_eq!(settings.default_event_start_time, "09:00");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = settings_from_toml("first_day_of_week = 9").unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_malformed_document_rejected() {
        assert!(settings_from_toml("first_day_of_week = ").is_err());
    }

    #[test]
    fn test_serialize_then_parse() {
        let settings = Settings {
            first_day_of_week: 1,
            default_event_duration: 45,
            ..Settings::default()
        };
        let text = settings_to_toml(&settings).unwrap();
        assert_eq!(settings_from_toml(&text).unwrap(), settings);
    }
}
