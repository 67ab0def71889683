// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use chrono::NaiveDate;
use llmsindex::{GenerateError, Outcome};

use crate::common::{ConfigOverrides, resolve_config};

/// Generate the index files. Progress lines go to `out`.
///
/// A catalog that loads but lists nothing is not an error: the run ends
/// with [`Outcome::NoArticles`] and no file is written.
pub fn generate_command(
    overrides: &ConfigOverrides,
    today: NaiveDate,
    mut out: impl FnMut(String),
) -> Result<Outcome> {
    let config = resolve_config(overrides)?;

    out("🔄 Generating LLM-friendly index (bilingual + linked sitemap)".to_string());

    let result = llmsindex::generate(&config, today, |path| {
        out(format!("✅ {} generated", path.display()));
    });

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(GenerateError::Catalog(e)) => {
            let message = e.to_string();
            diagnostics::error!("catalog load failed: {message}", message: message.as_str());
            out(format!("❌ {}", message));
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    match &outcome {
        Outcome::Written { total, paths } => {
            out(format!("📚 {} articles indexed into {} files", total, paths.len()));
        }
        Outcome::NoArticles => {
            out(format!(
                "❌ No articles with a summary found, check {}",
                config.input.display()
            ));
        }
    }

    Ok(outcome)
}
