//! Publishing the computed version to the CI runner.
//!
//! The runner hands out two files through the environment: one collecting step
//! outputs, one collecting variables for later steps. Both take `key=value`
//! lines appended at the end.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::OutputsConfig;
use crate::error::{NextVersionError, Result};

/// Environment variable naming the step output file.
pub const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";

/// Environment variable naming the job environment file.
pub const ENV_FILE_VAR: &str = "GITHUB_ENV";

/// Where outputs go. A missing path means "print to stdout".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutputTargets {
    pub output_file: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

impl OutputTargets {
    /// Reads the target files from the runner environment.
    pub fn from_env() -> Self {
        OutputTargets {
            output_file: path_from_env(OUTPUT_FILE_VAR),
            env_file: path_from_env(ENV_FILE_VAR),
        }
    }

    /// Writes `{output_name}={version}` and `{env_name}={version}`.
    ///
    /// Both target files are opened before either line is written, and
    /// stdout lines are printed only once the file writes went through.
    ///
    /// # Returns
    /// * `Ok(())` - Both lines delivered
    /// * `Err` - If a target file cannot be opened or written
    pub fn publish(&self, version: &str, names: &OutputsConfig) -> Result<()> {
        let deliveries = [
            (self.output_file.as_deref(), &names.output_name),
            (self.env_file.as_deref(), &names.env_name),
        ];

        let mut files = Vec::new();
        let mut stdout_lines = Vec::new();
        for (target, key) in deliveries {
            let line = format!("{}={}", key, version);
            match target {
                Some(path) => files.push((open_target(path, key)?, line)),
                None => stdout_lines.push(line),
            }
        }

        for (mut file, line) in files {
            writeln!(file, "{}", line)?;
        }
        for line in stdout_lines {
            println!("{}", line);
        }

        Ok(())
    }
}

fn path_from_env(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn open_target(path: &Path, key: &str) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            NextVersionError::output(format!(
                "Cannot open '{}' for '{}': {}",
                path.display(),
                key,
                e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_publish_appends_to_files() {
        let dir = tempdir().unwrap();
        let output_file = dir.path().join("output");
        let env_file = dir.path().join("env");
        fs::write(&env_file, "EXISTING=1\n").unwrap();

        let targets = OutputTargets {
            output_file: Some(output_file.clone()),
            env_file: Some(env_file.clone()),
        };
        targets
            .publish("1.4.0", &OutputsConfig::default())
            .unwrap();

        assert_eq!(fs::read_to_string(output_file).unwrap(), "version=1.4.0\n");
        assert_eq!(
            fs::read_to_string(env_file).unwrap(),
            "EXISTING=1\nNEW_VERSION=1.4.0\n"
        );
    }

    #[test]
    fn test_publish_with_custom_names() {
        let dir = tempdir().unwrap();
        let output_file = dir.path().join("output");

        let targets = OutputTargets {
            output_file: Some(output_file.clone()),
            env_file: None,
        };
        let names = OutputsConfig {
            output_name: "tag".to_string(),
            env_name: "RELEASE_TAG".to_string(),
        };
        targets.publish("1.5.0-develop.3", &names).unwrap();

        assert_eq!(
            fs::read_to_string(output_file).unwrap(),
            "tag=1.5.0-develop.3\n"
        );
    }

    #[test]
    fn test_publish_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let targets = OutputTargets {
            output_file: Some(dir.path().join("no-such-dir").join("output")),
            env_file: None,
        };

        let err = targets
            .publish("1.0.0", &OutputsConfig::default())
            .unwrap_err();
        assert!(err.to_string().starts_with("Output error"));
    }

    #[test]
    fn test_failed_env_file_leaves_output_file_untouched() {
        let dir = tempdir().unwrap();
        let output_file = dir.path().join("output");
        let targets = OutputTargets {
            output_file: Some(output_file.clone()),
            env_file: Some(dir.path().join("missing").join("env")),
        };

        let err = targets
            .publish("1.4.0", &OutputsConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("NEW_VERSION"));
        assert_eq!(fs::read_to_string(&output_file).unwrap_or_default(), "");
    }

    #[test]
    #[serial]
    fn test_from_env() {
        std::env::set_var(OUTPUT_FILE_VAR, "/tmp/out");
        std::env::set_var(ENV_FILE_VAR, "");

        let targets = OutputTargets::from_env();
        assert_eq!(targets.output_file, Some(PathBuf::from("/tmp/out")));
        assert_eq!(targets.env_file, None);

        std::env::remove_var(OUTPUT_FILE_VAR);
        std::env::remove_var(ENV_FILE_VAR);
        assert_eq!(OutputTargets::from_env(), OutputTargets::default());
    }
}
