// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use llmsindex::SiteConfig;

/// Environment variable naming a default config file.
pub const CONFIG_ENV_VAR: &str = "LLMS_INDEX_CONFIG";

/// Command-line overrides layered on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub domain: Option<String>,
}

/// Get the config file with an optional override, falling back to LLMS_INDEX_CONFIG.
/// `None` means run on built-in defaults.
pub fn get_config_path_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
}

/// Build the effective configuration: defaults, then file, then flags.
pub fn resolve_config(overrides: &ConfigOverrides) -> Result<SiteConfig> {
    let mut config = match get_config_path_with_override(overrides.config.clone()) {
        Some(path) => SiteConfig::from_yaml_file(&path)?,
        None => SiteConfig::default(),
    };

    if let Some(input) = &overrides.input {
        config.input = input.clone();
    }
    if let Some(dir) = &overrides.output_dir {
        config = config.with_output_dir(dir);
    }
    if let Some(domain) = &overrides.domain {
        if !domain.starts_with("http://") && !domain.starts_with("https://") {
            return Err(anyhow!("domain must be an absolute http(s) URL, got '{}'", domain));
        }
        config.site.domain = domain.trim_end_matches('/').to_string();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() -> Result<()> {
        let config = resolve_config(&ConfigOverrides {
            config: None,
            input: Some(PathBuf::from("data/catalog.json")),
            output_dir: Some(PathBuf::from("dist")),
            domain: Some("https://example.org/".to_string()),
        })?;
        assert_eq!(config.input, PathBuf::from("data/catalog.json"));
        assert_eq!(config.outputs.text, PathBuf::from("dist/llms.txt"));
        assert_eq!(config.site.domain, "https://example.org");
        Ok(())
    }

    #[test]
    fn test_rejects_relative_domain() {
        let result = resolve_config(&ConfigOverrides {
            domain: Some("example.org".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_config_file_then_flags() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("site.yaml");
        std::fs::write(&path, "site:\n  title: \"From File\"\ninput: \"from-file.json\"\n")?;

        let config = resolve_config(&ConfigOverrides {
            config: Some(path),
            input: Some(PathBuf::from("from-flag.json")),
            ..Default::default()
        })?;
        assert_eq!(config.site.title, "From File");
        assert_eq!(config.input, PathBuf::from("from-flag.json"));
        Ok(())
    }
}
