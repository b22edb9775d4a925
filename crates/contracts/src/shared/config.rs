use serde::Deserialize;

/// Widget configuration. Every field has a default, so an override document
/// only needs to name what it changes.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MenuConfig {
    pub data: DataConfig,
    pub search: SearchConfig,
    pub format: FormatConfig,
    pub labels: LabelsConfig,
    pub messages: MessagesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Relative path of the menu document
    pub path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before filtering
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FormatConfig {
    pub currency: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LabelsConfig {
    pub all_tab: String,
    pub search_placeholder: String,
    pub clear_title: String,
    pub result_singular: String,
    pub result_plural: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MessagesConfig {
    pub load_error: String,
    pub empty_title: String,
    pub empty_hint: String,
}

/// Parse a TOML override on top of the built-in defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<MenuConfig> {
    let config: MenuConfig = toml::from_str(contents)?;
    Ok(config)
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            search: SearchConfig::default(),
            format: FormatConfig::default(),
            labels: LabelsConfig::default(),
            messages: MessagesConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: "data/menu.json".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 120 }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            currency: "€".to_string(),
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            all_tab: "Alle".to_string(),
            search_placeholder: "Speisekarte durchsuchen …".to_string(),
            clear_title: "Suche zurücksetzen".to_string(),
            result_singular: "Gericht".to_string(),
            result_plural: "Gerichte".to_string(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            load_error:
                "Die Speisekarte konnte nicht geladen werden. Bitte später erneut versuchen."
                    .to_string(),
            empty_title: "Keine Treffer.".to_string(),
            empty_hint: "Bitte anderen Suchbegriff versuchen oder Filter zurücksetzen."
                .to_string(),
        }
    }
}

impl LabelsConfig {
    /// "1 Gericht", "12 Gerichte"
    pub fn result_count(&self, count: usize) -> String {
        let noun = if count == 1 {
            &self.result_singular
        } else {
            &self.result_plural
        };
        format!("{} {}", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_override_is_default() {
        let config = parse_config("");
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, MenuConfig::default());
        assert_eq!(config.data.path, "data/menu.json");
        assert_eq!(config.search.debounce_ms, 120);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = parse_config("[search]\ndebounce_ms = 300\n").unwrap();
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.format.currency, "€");
        assert_eq!(config.labels.all_tab, "Alle");
    }

    #[test]
    fn test_broken_override_is_an_error() {
        assert!(parse_config("[search\ndebounce_ms = ").is_err());
        assert!(parse_config("[search]\ndebounce_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_result_count() {
        let labels = LabelsConfig::default();
        assert_eq!(labels.result_count(1), "1 Gericht");
        assert_eq!(labels.result_count(0), "0 Gerichte");
        assert_eq!(labels.result_count(12), "12 Gerichte");
    }
}
