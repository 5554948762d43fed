//! `squadgate config`: inspect configuration values.

use squadgate_core::domain::SQUAD_SIZE;

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            if output.format() == OutputFormat::Json {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = global.config.unwrap_or_else(AppConfig::config_path);
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "rules.budget_cap" => Ok(config.rules.budget_cap.to_string()),
        "rules.max_per_club" => Ok(config.rules.max_per_club.to_string()),
        "rules.min_name_len" => Ok(config.rules.min_name_len.to_string()),
        "rules.max_name_len" => Ok(config
            .rules
            .max_name_len
            .map_or_else(|| "none".to_string(), |max| max.to_string())),
        "rules.squad_size" => Ok(SQUAD_SIZE.to_string()),
        "roster.path" => Ok(config
            .roster
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "rules.budget_cap").unwrap(), "100");
        assert_eq!(get_config_value(&cfg, "rules.squad_size").unwrap(), "7");
        assert_eq!(get_config_value(&cfg, "rules.max_name_len").unwrap(), "none");
        assert_eq!(get_config_value(&cfg, "roster.path").unwrap(), "");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
