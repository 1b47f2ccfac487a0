use std::io::Write;
use std::path::Path;

use binedge_core::Credential;
use tracing::info;

use crate::cli::ConfigArgs;
use crate::config::{load_config_file, save_config_file, ConfigError};
use crate::error::CliError;
use crate::output::JsonPrinter;

/// Store `--key` when given, then show the config file.
pub fn run<W: Write>(
    args: &ConfigArgs,
    path: &Path,
    printer: &mut JsonPrinter<W>,
) -> Result<(), CliError> {
    if let Some(key) = args.key.as_deref() {
        Credential::new(key)?;
        let mut file = load_config_file(path)?.unwrap_or_default();
        file.key = Some(key.trim().to_owned());
        save_config_file(path, &file)?;
        info!(path = %path.display(), "stored API key");
    }

    let out = printer.writer_mut();
    if !path.exists() {
        writeln!(out, "No configuration file, please use `binaryedge config --key <KEY>`")?;
        return Ok(());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    writeln!(out, "In {}:", path.display())?;
    write!(out, "{contents}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{printed, printer};

    #[test]
    fn key_is_stored_and_file_is_shown() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("binaryedge").join("config.toml");
        let mut out = printer();

        let args = ConfigArgs {
            key: Some(String::from("  abc-123 ")),
        };
        run(&args, &path, &mut out).expect("config should be written");

        let text = printed(out);
        assert!(text.starts_with(&format!("In {}:\n", path.display())));
        assert!(text.contains(r#"key = "abc-123""#));
    }

    #[test]
    fn storing_a_key_keeps_other_settings() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "key = \"old\"\nverify_tls = false\n").expect("seed");

        let args = ConfigArgs {
            key: Some(String::from("new")),
        };
        run(&args, &path, &mut printer()).expect("config should be written");

        let file = load_config_file(&path).expect("load").expect("present");
        assert_eq!(file.key.as_deref(), Some("new"));
        assert_eq!(file.verify_tls, Some(false));
    }

    #[test]
    fn missing_file_is_reported_without_failing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut out = printer();

        run(&ConfigArgs { key: None }, &dir.path().join("none.toml"), &mut out)
            .expect("showing a missing file is not an error");

        assert!(printed(out).starts_with("No configuration file"));
    }

    #[test]
    fn blank_key_is_rejected() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");

        let error = run(
            &ConfigArgs {
                key: Some(String::from("   ")),
            },
            &path,
            &mut printer(),
        )
        .expect_err("blank key");

        assert_eq!(error.exit_code(), 2);
        assert!(!path.exists());
    }
}
