//! `stencil config` - inspect configuration values.

use serde_json::Value;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&render(&value))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                output.data(&config.to_toml()?)?;
            }
        }

        ConfigCommands::Path => {
            let path = config.source.unwrap_or_else(AppConfig::config_path);
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Walk a dotted key such as `conventions.fields.slug`.
fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Value> {
    let root = serde_json::to_value(config).with_cli_context(|| "Failed to serialise config")?;

    key.split('.')
        .try_fold(&root, |node, part| node.get(part))
        .cloned()
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })
}

/// Strings print bare; everything else as JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_nested_key() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "conventions.fields.navigation").unwrap();
        assert_eq!(render(&value), "showInNav");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "paths.nope"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn scalars_render_bare() {
        let cfg = AppConfig::default();
        assert_eq!(render(&get_config_value(&cfg, "output.no_color").unwrap()), "false");
        assert_eq!(
            render(&get_config_value(&cfg, "conventions.windows.type_window").unwrap()),
            "120"
        );
    }

    #[test]
    fn section_renders_as_object() {
        let cfg = AppConfig::default();
        let text = render(&get_config_value(&cfg, "paths").unwrap());
        assert!(text.contains("\"client_module\""));
    }
}
