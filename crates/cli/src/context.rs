use anyhow::Result;
use bsl_common_types::{MultiName, ScriptVariant};

use crate::{
    config::{Config, get_config},
    options::FormatOptions,
};

/// Settings every command runs with: the configuration file merged with CLI flags.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: FormatOptions,
    pub script_variant: ScriptVariant,
}

impl CommandContext {
    /// # Errors
    /// Returns error if the current directory or its configuration cannot be read.
    pub async fn new(format: Option<FormatOptions>) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let config = get_config(&current_dir).await?;
        Ok(Self::from_config(config, format))
    }

    #[must_use]
    pub fn from_config(config: Config, format: Option<FormatOptions>) -> Self {
        let script_variant = ScriptVariant::value_by_name(&config.script_variant);
        Self {
            format: format.unwrap_or(config.format),
            script_variant,
        }
    }

    /// Spelling of `name` in the configured language, or the other one when it has none.
    #[must_use]
    pub fn spelling<'a>(&self, name: &'a MultiName) -> &'a str {
        let spelling = name.get_for(self.script_variant);
        if spelling.is_empty() { name.get() } else { spelling }
    }

    /// Prints `text` or the JSON form of `value`, whichever the format asks for.
    ///
    /// # Errors
    /// Returns error if `value` cannot be serialized.
    pub fn print<T: serde::Serialize>(&self, text: &str, value: &T) -> Result<()> {
        let json = match self.format {
            FormatOptions::Json => serde_json::to_string_pretty(value)?,
            FormatOptions::Stdout => String::new(),
        };
        self.format.print(text, &json);
        Ok(())
    }
}
