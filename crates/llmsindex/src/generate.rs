// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The whole run: load → index → compose → write.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::catalog::{Catalog, CatalogError};
use crate::config::SiteConfig;
use crate::document::{self, ComposeError};
use crate::index::build_index;
use crate::writer::{self, WriteError};

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Write(#[from] WriteError),
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// All targets were written.
    Written { total: usize, paths: Vec<PathBuf> },
    /// Nothing in the catalog is listable; no file was touched.
    NoArticles,
}

/// Generate every target described by `config`, dated `today`.
///
/// `report` is called with each output path as soon as it is written.
pub fn generate(
    config: &SiteConfig,
    today: NaiveDate,
    report: impl FnMut(&Path),
) -> Result<Outcome, GenerateError> {
    let input = config.input.display().to_string();
    diagnostics::info!("loading catalog {input}", input: input.as_str());

    let catalog = Catalog::load(&config.input)?;
    if catalog.is_empty() {
        diagnostics::debug!("catalog {input} has no non-empty categories", input: input.as_str());
    }
    let index = build_index(&catalog, &config.site);

    let sections = index.sections.len();
    let total = index.total;
    diagnostics::info!("indexed {total} articles in {sections} categories", total: total, sections: sections);

    let doc = match document::compose(&index, &config.site, today) {
        Ok(doc) => doc,
        Err(ComposeError::NoArticles) => {
            diagnostics::warn!("no articles with a summary in {input}", input: input.as_str());
            return Ok(Outcome::NoArticles);
        }
    };

    let paths = writer::write_outputs(&doc, config, report)?;
    Ok(Outcome::Written {
        total: doc.total,
        paths,
    })
}
