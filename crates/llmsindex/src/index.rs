// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Index building: order each category newest-first, keep listed entries,
//! and format one Markdown bullet per article.

use crate::catalog::{ArticleRecord, Catalog, Category};
use crate::config::SiteMeta;

/// Prefix placed before every category heading.
pub const HEADING_MARKER: &str = "📌";

/// One category's worth of formatted lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub category: String,
    /// `## 📌 Title Cased Name`
    pub heading: String,
    pub entries: Vec<String>,
}

/// All non-empty sections, in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Index {
    pub sections: Vec<Section>,
    /// Number of listed articles across all sections.
    pub total: usize,
}

impl Index {
    /// Flatten into document body lines: heading, blank, entries, blank.
    pub fn body_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for section in &self.sections {
            lines.push(section.heading.clone());
            lines.push(String::new());
            lines.extend(section.entries.iter().cloned());
            lines.push(String::new());
        }
        lines
    }
}

/// Build the index for a whole catalog.
pub fn build_index(catalog: &Catalog, site: &SiteMeta) -> Index {
    let mut index = Index::default();

    for category in &catalog.categories {
        let Some(section) = build_section(category, site) else {
            diagnostics::debug!("category {name} has no listed articles", name: category.name.as_str());
            continue;
        };
        let count = section.entries.len();
        diagnostics::debug!("category {name}: {count} articles", name: category.name.as_str(), count: count);
        index.total += count;
        index.sections.push(section);
    }

    index
}

/// Build one section, or `None` when nothing in the category is listed.
pub fn build_section(category: &Category, site: &SiteMeta) -> Option<Section> {
    let entries: Vec<String> = newest_first(&category.records)
        .into_iter()
        .filter(|record| record.is_qualifying())
        .map(|record| format_entry(record, site))
        .collect();

    if entries.is_empty() {
        return None;
    }

    Some(Section {
        category: category.name.clone(),
        heading: format!("## {} {}", HEADING_MARKER, title_case(&category.name)),
        entries,
    })
}

/// Records ordered by descending sort key. The sort is stable, so records
/// with equal keys (including all undated ones) keep catalog order.
pub fn newest_first(records: &[ArticleRecord]) -> Vec<&ArticleRecord> {
    let mut keyed: Vec<_> = records.iter().map(|r| (r.sort_key(), r)).collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().map(|(_, r)| r).collect()
}

/// `- [**Title**](https://site/artikel/slug): 2024-01-05 — Summary`
pub fn format_entry(record: &ArticleRecord, site: &SiteMeta) -> String {
    let title = record.title.as_deref().unwrap_or_default().trim();
    let slug = record.slug.as_deref().unwrap_or_default().trim();
    let summary = record.summary.as_deref().unwrap_or_default().trim();
    format!(
        "- [**{}**]({}): {} — {}",
        title,
        site.article_url(slug),
        record.date_prefix(),
        summary
    )
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// `tech news` → `Tech News`, `linux-tips` → `Linux-Tips`.
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_word = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: serde_json::Value) -> Catalog {
        Catalog::from_value(value).expect("decode catalog")
    }

    fn titles(section: &Section) -> Vec<String> {
        section
            .entries
            .iter()
            .map(|line| {
                let start = line.find("[**").map(|i| i + 3).unwrap_or(0);
                let end = line.find("**]").unwrap_or(line.len());
                line[start..end].to_string()
            })
            .collect()
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("tech"), "Tech");
        assert_eq!(title_case("tech news"), "Tech News");
        assert_eq!(title_case("LINUX-tips"), "Linux-Tips");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("web3 stuff"), "Web3 Stuff");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_newer_articles_first() {
        let cat = catalog(json!({"tech": [
            ["Old post", "old-post", "", "2023-01-01", "Older summary"],
            ["Intro to X", "intro-x", "", "2024-01-05T10:00:00Z", "A summary."],
        ]}));
        let index = build_index(&cat, &SiteMeta::default());
        assert_eq!(index.total, 2);
        assert_eq!(index.sections.len(), 1);
        let section = &index.sections[0];
        assert_eq!(section.heading, "## 📌 Tech");
        assert_eq!(
            section.entries,
            vec![
                "- [**Intro to X**](https://dalam.web.id/artikel/intro-x): 2024-01-05 — A summary.",
                "- [**Old post**](https://dalam.web.id/artikel/old-post): 2023-01-01 — Older summary",
            ]
        );
    }

    #[test]
    fn test_undated_sort_last_and_stay_stable() {
        let cat = catalog(json!({"misc": [
            ["Undated A", "a", "", "", "x"],
            ["Dated", "d", "", "2020-06-01", "x"],
            ["Garbage B", "b", "", "someday", "x"],
            ["Undated C", "c", "", null, "x"],
        ]}));
        let index = build_index(&cat, &SiteMeta::default());
        assert_eq!(
            titles(&index.sections[0]),
            vec!["Dated", "Undated A", "Garbage B", "Undated C"]
        );
        assert!(index.sections[0].entries[1].contains(": N/A — "));
        assert!(index.sections[0].entries[2].contains(": someday — "));
    }

    #[test]
    fn test_equal_timestamps_keep_catalog_order() {
        let cat = catalog(json!({"misc": [
            ["First", "a", "", "2024-01-01T00:00:00Z", "x"],
            ["Second", "b", "", "2024-01-01", "x"],
            ["Third", "c", "", "2024-01-01T00:00:00.999", "x"],
        ]}));
        let index = build_index(&cat, &SiteMeta::default());
        assert_eq!(titles(&index.sections[0]), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_unlisted_records_are_dropped() {
        let cat = catalog(json!({"tech": [
            ["No Summary", "no-sum", "", "2024-01-01", ""],
            ["Blank", "blank", "", "2024-01-02", "   \t"],
            ["Short", "short", "", "2024-01-03"],
            ["  Kept  ", " kept ", "", "2024-01-04", "  Trimmed.  "],
        ]}));
        let index = build_index(&cat, &SiteMeta::default());
        assert_eq!(index.total, 1);
        assert_eq!(
            index.sections[0].entries,
            vec!["- [**Kept**](https://dalam.web.id/artikel/kept): 2024-01-04 — Trimmed."]
        );
    }

    #[test]
    fn test_category_order_and_empty_sections() {
        let cat = catalog(json!({
            "zeta": [["Z", "z", "", "2020-01-01", "x"]],
            "nothing listed": [["N", "n", "", "2024-01-01", ""]],
            "alpha": [["A", "a", "", "2024-01-01", "x"]],
        }));
        let index = build_index(&cat, &SiteMeta::default());
        let headings: Vec<_> = index.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["## 📌 Zeta", "## 📌 Alpha"]);
        assert_eq!(index.total, 2);
    }

    #[test]
    fn test_body_lines_layout() {
        let cat = catalog(json!({"tech": [["A", "a", "", "2024-01-01", "x"]]}));
        let body = build_index(&cat, &SiteMeta::default()).body_lines();
        assert_eq!(body.len(), 4);
        assert_eq!(body[0], "## 📌 Tech");
        assert_eq!(body[1], "");
        assert!(body[2].starts_with("- [**A**]"));
        assert_eq!(body[3], "");
    }

    #[test]
    fn test_empty_catalog_has_no_sections() {
        let index = build_index(&catalog(json!({})), &SiteMeta::default());
        assert_eq!(index, Index::default());
        assert!(index.body_lines().is_empty());
    }
}
