// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML layout for the browsable index page.
//!
//! The page wraps the plain-text document in a `<pre>` block so humans and
//! crawlers see exactly what `llms.txt` contains.

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Crate version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 2em auto; padding: 1em; line-height: 1.6; }
pre { background: #f8f8f8; padding: 1.5em; border-radius: 12px; overflow-x: auto; white-space: pre-wrap; }
a { color: #0066cc; }
@media (prefers-color-scheme: dark) { body { background: #111; color: #eee; } pre { background: #222; } a { color: #66aaff; } }";

/// Context passed to the layout.
pub struct LayoutContext<'a> {
    /// Site title (from config)
    pub site_title: &'a str,
    /// Generation date, long form
    pub date: &'a str,
    /// Listed article count
    pub total: usize,
    /// Canonical URL of the page itself
    pub canonical_url: &'a str,
    /// Site home page, for the back-link
    pub home_url: &'a str,
    /// Plain-text document shown in the `<pre>` block
    pub content: &'a str,
}

/// Render the complete index page.
pub fn index_page(ctx: &LayoutContext) -> String {
    page(ctx).into_string()
}

fn page(ctx: &LayoutContext) -> Markup {
    let title = format!("{} - LLM-Friendly Index ({})", ctx.site_title, ctx.date);
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content=(format!("llms-index v{}", VERSION));
                title { (title) }
                link rel="canonical" href=(ctx.canonical_url);
                style { (PreEscaped(STYLE)) }
            }
            body {
                h1 { (title) }
                p {
                    "Indeks curated buat AI crawlers 🤖 | Total " (ctx.total)
                    " artikel. Bilingual + linked sitemap!"
                }
                pre { (ctx.content) }
                p {
                    a href=(ctx.home_url) { "← Kembali ke blog utama " (ctx.site_title) }
                    " | Update otomatis 🚀"
                }
            }
        }
    }
}
