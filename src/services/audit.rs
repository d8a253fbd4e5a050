use sha2::{Digest, Sha256};

use crate::catalog::{self, Catalog};
use crate::domain::models::{CheckItem, ValidateReport};

/// SHA-256 over the canonical JSON serialization of the whole catalog.
pub fn catalog_fingerprint(catalog: &Catalog) -> anyhow::Result<String> {
    let canonical = serde_json::to_vec(catalog)?;
    let mut hasher = Sha256::new();
    hasher.update(&canonical);
    Ok(hex::encode(hasher.finalize()))
}

/// Nothing here fails the command: the view layer degrades gracefully on
/// every violation except duplicate slugs, which make lookups ambiguous
/// and are reported as a failed check.
pub fn build_validate_report(catalog: &Catalog) -> anyhow::Result<ValidateReport> {
    let dupes = catalog::duplicate_slugs(catalog);
    let dangling = catalog::dangling_brand_refs(catalog);
    let out_of_range = catalog::out_of_range_scores(catalog);
    let bad_dates = catalog::invalid_publish_dates(catalog);

    let mut warnings = Vec::new();
    for slug in &dupes {
        warnings.push(format!("duplicate slug `{}` (first match wins on lookup)", slug));
    }
    for slug in &dangling {
        warnings.push(format!(
            "article `{}` references an unknown brand (teaser will be omitted)",
            slug
        ));
    }
    for slug in &out_of_range {
        warnings.push(format!(
            "article `{}` has a score outside 0..=5 (display clamps)",
            slug
        ));
    }
    for slug in &bad_dates {
        warnings.push(format!(
            "article `{}` has a non-ISO publish date (rendered verbatim)",
            slug
        ));
    }

    let checks = vec![
        check("unique_slugs", dupes.is_empty(), "failed"),
        check("brand_refs", dangling.is_empty(), "warn"),
        check("score_ranges", out_of_range.is_empty(), "warn"),
        check("publish_dates", bad_dates.is_empty(), "warn"),
    ];

    let overall = if checks.iter().all(|c| c.status == "ok") {
        "ok"
    } else {
        "needs_attention"
    }
    .to_string();

    Ok(ValidateReport {
        overall,
        articles: catalog.articles.len(),
        brands: catalog.brands.len(),
        checks,
        warnings,
        fingerprint: catalog_fingerprint(catalog)?,
    })
}

fn check(name: &str, ok: bool, bad_status: &str) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        status: if ok { "ok" } else { bad_status }.to_string(),
    }
}
