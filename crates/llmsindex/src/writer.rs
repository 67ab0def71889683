// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Writes the rendered targets.
//!
//! All three targets are rendered before anything touches the disk. Each
//! file is then written to a temporary sibling and renamed over the
//! destination, so readers never observe a half-written index.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::document::Document;
use crate::render::{Html, Markdown, PlainText, Renderer};

#[derive(Debug, thiserror::Error)]
#[error("cannot write {path:?}: {source}")]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A rendered target waiting to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTarget {
    pub renderer: &'static str,
    pub path: PathBuf,
    pub content: String,
}

/// Render every configured target in memory.
pub fn render_targets(doc: &Document, config: &SiteConfig) -> Vec<RenderedTarget> {
    let html = Html { site: &config.site };
    let targets: [(&dyn Renderer, &PathBuf); 3] = [
        (&PlainText, &config.outputs.text),
        (&Markdown, &config.outputs.markdown),
        (&html, &config.outputs.html),
    ];

    targets
        .into_iter()
        .map(|(renderer, path)| RenderedTarget {
            renderer: renderer.name(),
            path: path.clone(),
            content: renderer.render(doc),
        })
        .collect()
}

/// Render and write all targets, calling `report` after each file lands.
///
/// Rendering finishes before the first write, but the replace is per file:
/// if a later target fails, earlier targets already hold the new content.
pub fn write_outputs(
    doc: &Document,
    config: &SiteConfig,
    mut report: impl FnMut(&Path),
) -> Result<Vec<PathBuf>, WriteError> {
    let targets = render_targets(doc, config);
    let mut written = Vec::with_capacity(targets.len());

    for target in &targets {
        replace_file(&target.path, target.content.as_bytes())?;
        let bytes = target.content.len();
        diagnostics::info!(
            "wrote {renderer} target {path} ({bytes} bytes)",
            renderer: target.renderer,
            path: target.path.display().to_string(),
            bytes: bytes
        );
        report(target.path.as_path());
        written.push(target.path.clone());
    }

    Ok(written)
}

/// Mode for newly created targets; they are served to other users.
#[cfg(unix)]
const DEFAULT_MODE: u32 = 0o644;

/// Replace `path` with `data` as a whole-file swap.
///
/// The replacement keeps the permissions of the file it replaces, or gets
/// [`DEFAULT_MODE`] when `path` is new.
pub fn replace_file(path: &Path, data: &[u8]) -> Result<(), WriteError> {
    let err = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(err)?;
    tmp.write_all(data).map_err(err)?;
    tmp.flush().map_err(err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path)
            .map(|meta| meta.permissions().mode() & 0o7777)
            .unwrap_or(DEFAULT_MODE);
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(mode))
            .map_err(err)?;
    }

    tmp.persist(path).map_err(|e| err(e.error))?;
    Ok(())
}
