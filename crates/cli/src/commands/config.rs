use anyhow::Result;
use clap::Args;

use crate::{config::Config, context::CommandContext};

#[derive(Args, Debug)]
#[command(about = "Show bsl-common configuration")]
pub struct ConfigArgs {}

/// Configuration in effect once CLI flags are applied.
#[must_use]
pub fn effective_config(context: &CommandContext) -> Config {
    Config {
        script_variant: context.script_variant.short_name().to_string(),
        format: context.format,
    }
}

/// Display bsl-common configuration
///
/// # Errors
/// Returns error if serializing the configuration fails.
pub async fn handle_config(_args: &ConfigArgs, context: &CommandContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&effective_config(context))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FormatOptions;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ConfigArgs,
    }

    #[test]
    fn test_config_args_parsing() {
        let _cli = TestCli::parse_from(["test"]);
    }

    #[test]
    fn test_effective_config() {
        let config = Config {
            script_variant: "English".to_string(),
            format: FormatOptions::Stdout,
        };
        let context = CommandContext::from_config(config, Some(FormatOptions::Json));

        let effective = effective_config(&context);
        assert_eq!(effective.script_variant, "en");
        assert_eq!(effective.format, FormatOptions::Json);
    }
}
