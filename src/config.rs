use serde::Deserialize;

use crate::validate::ValidationContext;

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub output: OutputFormat,
    /// Pretty-print JSON output. YAML is always block style.
    pub pretty: bool,
    /// Run designer validation before `outbound` and refuse to emit a request
    /// when any element has an issue.
    pub validate_before_save: bool,
    pub validation_context: ValidationContext,
}

impl Config {
    pub fn render<T: serde::Serialize>(&self, value: &T) -> anyhow::Result<String> {
        Ok(match (self.output, self.pretty) {
            (OutputFormat::Json, true) => serde_json::to_string_pretty(value)?,
            (OutputFormat::Json, false) => serde_json::to_string(value)?,
            (OutputFormat::Yaml, _) => serde_yaml::to_string(value)?,
        })
    }
}
