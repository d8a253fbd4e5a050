/// Upper bound of every rating and criterion score; display math divides by this.
pub const MAX_SCORE: f64 = 5.0;

/// The four fixed evaluation criteria, keyed as they appear in JSON output.
pub const SCORE_LABELS: [(&str, &str); 4] = [
    ("ingredients", "Ingredients"),
    ("nutrition", "Nutrition"),
    ("palatability", "Palatability"),
    ("price_quality", "Price/Quality"),
];

pub fn score_label(key: &'static str) -> &'static str {
    SCORE_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(key)
}

/// Shown on the not-found fallback view as the path back to the listing.
pub const LISTING_HINT: &str = "run `kibble list` to browse available reviews";
