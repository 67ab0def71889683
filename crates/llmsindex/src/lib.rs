// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # llmsindex — LLM-friendly index generator
//!
//! Reads an article catalog (`artikel.json`) and writes `llms.txt`,
//! `llms.md` and `llms-index.html` for language-model crawlers.
//!
//! ## Usage
//!
//! ```bash
//! llms-index --config site.yaml --output-dir ./dist
//! ```

pub mod catalog;
pub mod config;
pub mod document;
mod generate;
pub mod index;
mod layouts;
pub mod render;
pub mod writer;

pub use catalog::{ArticleRecord, Catalog, CatalogError};
pub use config::{ConfigError, SiteConfig};
pub use document::{ComposeError, Document};
pub use generate::{GenerateError, Outcome, generate};
pub use index::{Index, build_index};
