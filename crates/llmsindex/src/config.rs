// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration — compiled-in defaults, optionally overridden by a YAML file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every key is optional; missing keys keep the built-in defaults.
///
/// ```yaml
/// site:
///   title: "Layar Kosong"
///   domain: "https://dalam.web.id"
///   author: "Fakhrul Rijal"
///
/// input: "artikel.json"
///
/// outputs:
///   text: "llms.txt"
///   markdown: "llms.md"
///   html: "llms-index.html"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    /// Catalog JSON to read.
    pub input: PathBuf,
    pub outputs: OutputPaths,
}

/// Site-wide metadata interpolated into the header and the HTML page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    pub title: String,
    /// Absolute site origin without a trailing slash, e.g. `https://example.org`
    pub domain: String,
    pub author: String,
    pub location: String,
    /// Path segment articles live under (`{domain}/{article_path}/{slug}`)
    pub article_path: String,
    /// Path of the sitemap linked from the header
    pub sitemap_path: String,
    /// Path the HTML index is served from, used as its canonical URL
    pub canonical_path: String,
    /// One bullet per topic in the header
    pub topics: Vec<String>,
}

/// Destinations of the three rendered targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub text: PathBuf,
    pub markdown: PathBuf,
    pub html: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path:?}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteMeta::default(),
            input: PathBuf::from("artikel.json"),
            outputs: OutputPaths::default(),
        }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Layar Kosong".to_string(),
            domain: "https://dalam.web.id".to_string(),
            author: "Fakhrul Rijal".to_string(),
            location: "Balikpapan, Kalimantan Timur 🇮🇩".to_string(),
            article_path: "artikel".to_string(),
            sitemap_path: "sitemap.xml".to_string(),
            canonical_path: "llms-index".to_string(),
            topics: vec![
                "Tutorial Linux, open source, & tech web/AI 🐧🖥️".to_string(),
                "Opini sosial, refleksi agama Islam & hadits 📢📚".to_string(),
                "Multimedia editing, fotografi 📸".to_string(),
                "Kuliner, travelling, & gaya hidup sehari-hari 🍜🔆".to_string(),
            ],
        }
    }
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            text: PathBuf::from("llms.txt"),
            markdown: PathBuf::from("llms.md"),
            html: PathBuf::from("llms-index.html"),
        }
    }
}

impl SiteConfig {
    /// Load a YAML config file on top of the defaults.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml_ng::from_str(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Re-root every output path under `dir`, keeping file names.
    pub fn with_output_dir(mut self, dir: &Path) -> Self {
        for path in [
            &mut self.outputs.text,
            &mut self.outputs.markdown,
            &mut self.outputs.html,
        ] {
            if let Some(name) = path.file_name() {
                *path = dir.join(name);
            }
        }
        self
    }
}

impl SiteMeta {
    /// Origin with any trailing slash removed.
    pub fn origin(&self) -> &str {
        self.domain.trim_end_matches('/')
    }

    pub fn article_url(&self, slug: &str) -> String {
        format!("{}/{}/{}", self.origin(), self.article_path.trim_matches('/'), slug)
    }

    pub fn sitemap_url(&self) -> String {
        format!("{}/{}", self.origin(), self.sitemap_path.trim_start_matches('/'))
    }

    pub fn canonical_url(&self) -> String {
        format!("{}/{}", self.origin(), self.canonical_path.trim_start_matches('/'))
    }

    pub fn home_url(&self) -> String {
        format!("{}/", self.origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_site() {
        let config = SiteConfig::default();
        assert_eq!(config.input, PathBuf::from("artikel.json"));
        assert_eq!(config.outputs.text, PathBuf::from("llms.txt"));
        assert_eq!(config.outputs.markdown, PathBuf::from("llms.md"));
        assert_eq!(config.outputs.html, PathBuf::from("llms-index.html"));
        assert_eq!(
            config.site.article_url("intro-x"),
            "https://dalam.web.id/artikel/intro-x"
        );
        assert_eq!(config.site.sitemap_url(), "https://dalam.web.id/sitemap.xml");
        assert_eq!(config.site.canonical_url(), "https://dalam.web.id/llms-index");
        assert_eq!(config.site.home_url(), "https://dalam.web.id/");
    }

    #[test]
    fn parse_partial_yaml_keeps_defaults() {
        let yaml = r#"
site:
  title: "Test Site"
  domain: "https://example.org/"
outputs:
  html: "public/index.html"
"#;
        let config: SiteConfig = serde_yaml_ng::from_str(yaml).expect("parse config");
        assert_eq!(config.site.title, "Test Site");
        assert_eq!(config.site.author, "Fakhrul Rijal");
        assert_eq!(config.site.article_url("a"), "https://example.org/artikel/a");
        assert_eq!(config.input, PathBuf::from("artikel.json"));
        assert_eq!(config.outputs.text, PathBuf::from("llms.txt"));
        assert_eq!(config.outputs.html, PathBuf::from("public/index.html"));
    }

    #[test]
    fn output_dir_rebases_file_names() {
        let config = SiteConfig::default().with_output_dir(Path::new("/tmp/site"));
        assert_eq!(config.outputs.text, PathBuf::from("/tmp/site/llms.txt"));
        assert_eq!(config.outputs.html, PathBuf::from("/tmp/site/llms-index.html"));
    }
}
