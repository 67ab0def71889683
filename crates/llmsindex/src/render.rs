// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Output renderers. Each one turns the same [`Document`] into one target.

use crate::config::SiteMeta;
use crate::document::Document;
use crate::layouts::{self, LayoutContext};

pub trait Renderer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn render(&self, doc: &Document) -> String;
}

/// `llms.txt`: the document text as is.
pub struct PlainText;

/// `llms.md`: identical bytes to [`PlainText`]; the document is already Markdown.
pub struct Markdown;

/// `llms-index.html`: the document inside a styled page.
pub struct Html<'a> {
    pub site: &'a SiteMeta,
}

impl Renderer for PlainText {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, doc: &Document) -> String {
        doc.text()
    }
}

impl Renderer for Markdown {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn render(&self, doc: &Document) -> String {
        doc.text()
    }
}

impl Renderer for Html<'_> {
    fn name(&self) -> &'static str {
        "html"
    }

    fn render(&self, doc: &Document) -> String {
        let canonical_url = self.site.canonical_url();
        let home_url = self.site.home_url();
        let content = doc.text();
        layouts::index_page(&LayoutContext {
            site_title: &self.site.title,
            date: &doc.date,
            total: doc.total,
            canonical_url: &canonical_url,
            home_url: &home_url,
            content: &content,
        })
    }
}
