//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `path` is the file named by `--config`, if any; otherwise the default
/// location is used.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: Option<&Path>,
    formatter: &Formatter,
) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::path()?,
    };

    match args.action {
        ConfigAction::Show => show_config(config, &path),
        ConfigAction::Init { force } => init_config(&path, force, formatter),
        ConfigAction::SetDampening { value } => set_dampening(config, &path, value, formatter),
    }
}

/// Print the effective configuration.
fn show_config(config: &Config, path: &Path) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        println!(
            "{}",
            formatter.warning(&format!("{} already exists, use --force to overwrite", path.display()))
        );
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!("{}", formatter.success(&format!("Wrote {}", path.display())));
    Ok(())
}

/// Update the risk dampening factor and persist it.
fn set_dampening(config: &mut Config, path: &Path, value: f64, formatter: &Formatter) -> Result<()> {
    let mut updated = config.clone();
    updated.scoring.risk_dampening = value;
    updated
        .validate()
        .map_err(|_| CliError::InvalidInput(format!("Dampening must be between 0.0 and 1.0, got {}", value)))?;

    updated.save_to(path)?;
    *config = updated;
    println!(
        "{}",
        formatter.success(&format!("Risk dampening set to {}", value))
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_set_dampening_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        set_dampening(&mut config, &path, 0.45, &formatter).unwrap();
        assert_eq!(config.scoring.risk_dampening, 0.45);
        assert_eq!(Config::load_from(&path).unwrap().scoring.risk_dampening, 0.45);
    }

    #[test]
    fn test_set_dampening_rejects_out_of_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = set_dampening(&mut config, &path, 1.5, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(!path.exists());
        assert_eq!(config.scoring.risk_dampening, 0.3);
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\ncolor = false\n").unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        init_config(&path, false, &formatter).unwrap();
        assert!(!Config::load_from(&path).unwrap().settings.color);

        init_config(&path, true, &formatter).unwrap();
        assert!(Config::load_from(&path).unwrap().settings.color);
    }

    #[test]
    fn test_init_force_repairs_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[scoring\nrisk_dampening = ").unwrap();
        assert!(Config::load_from(&path).is_err());

        let formatter = Formatter::new(OutputFormat::Table, false);
        let mut config = Config::default();
        let args = ConfigArgs {
            action: ConfigAction::Init { force: true },
        };
        execute_config(args, &mut config, Some(&path), &formatter).unwrap();

        assert_eq!(Config::load_from(&path).unwrap().scoring, Config::default().scoring);
    }
}
