use chrono::NaiveDate;

use crate::domain::constants::MAX_SCORE;
use crate::domain::models::{ArticleDetail, ArticleView, BrandDetail};
use crate::services::config::DisplaySettings;

pub fn score_percent(score: f64) -> f64 {
    (score.clamp(0.0, MAX_SCORE) / MAX_SCORE) * 100.0
}

/// Star rating at half-star granularity, e.g. 4.5 → `★★★★½`.
pub fn stars(rating: f64, settings: &DisplaySettings) -> String {
    let halves = (rating.clamp(0.0, MAX_SCORE) * 2.0).round() as usize;
    let full = halves / 2;
    let half = halves % 2 == 1;
    let empty = 5 - full - usize::from(half);
    let (on, half_glyph, off) = if settings.ascii {
        ("*", "~", ".")
    } else {
        ("★", "½", "☆")
    };
    let mut out = on.repeat(full);
    if half {
        out.push_str(half_glyph);
    }
    out.push_str(&off.repeat(empty));
    out
}

/// Proportional meter: the filled share equals score/MAX_SCORE.
pub fn meter(score: f64, settings: &DisplaySettings) -> String {
    let width = settings.bar_width.max(1);
    let filled = ((score.clamp(0.0, MAX_SCORE) / MAX_SCORE) * width as f64).round() as usize;
    let filled = filled.min(width);
    let (on, off) = if settings.ascii { ("#", "-") } else { ("█", "░") };
    format!("[{}{}]", on.repeat(filled), off.repeat(width - filled))
}

/// `4` → `4/5`, `4.5` → `4.5/5`.
pub fn score_readout(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{}/5", score as i64)
    } else {
        format!("{:.1}/5", score)
    }
}

/// ISO `2024-03-15` → `March 15, 2024`. Timezone-free and idempotent;
/// an unparseable input is rendered verbatim.
pub fn format_long_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

pub fn render_article(view: &ArticleView, settings: &DisplaySettings) -> String {
    match view {
        ArticleView::Found(detail) => render_detail(detail, settings),
        ArticleView::NotFound { slug, hint } => format!("article not found: {}\n{}\n", slug, hint),
    }
}

fn render_detail(d: &ArticleDetail, settings: &DisplaySettings) -> String {
    let mut out = String::new();
    out.push_str(&format!("[{}] {}\n", d.pet_type.badge(), d.category));
    out.push_str(&format!("{}\n", d.title));
    out.push_str(&format!("{}\n\n", d.excerpt));
    out.push_str(&format!(
        "published {} · {} min read\n\n",
        d.published, d.read_time
    ));
    out.push_str(&format!(
        "{}  {}  {} overall\n",
        d.image,
        stars(d.rating, settings),
        score_readout(d.rating)
    ));
    if let Some(brand) = &d.brand {
        out.push_str(&format!(
            "brand: {} {} ({})\n",
            brand.logo, brand.name, brand.price_range
        ));
    }
    out.push('\n');
    out.push_str("pros:\n");
    for pro in &d.pros {
        out.push_str(&format!("  + {}\n", pro));
    }
    out.push_str("cons:\n");
    for con in &d.cons {
        out.push_str(&format!("  - {}\n", con));
    }
    out.push('\n');
    out.push_str("nutritional analysis:\n");
    out.push_str(&format!(
        "  protein {}%  fat {}%  fiber {}%\n",
        d.nutrition.protein_pct, d.nutrition.fat_pct, d.nutrition.fiber_pct
    ));
    out.push_str(&format!(
        "  main ingredients: {}\n\n",
        d.nutrition.main_ingredients.join(", ")
    ));
    out.push_str("verdict:\n");
    out.push_str(&format!("  {}\n\n", d.verdict));
    out.push_str("detailed scores:\n");
    for row in &d.scores {
        out.push_str(&format!(
            "  {:<14} {:>5} {} {:.0}%\n",
            row.label,
            score_readout(row.score),
            meter(row.score, settings),
            row.percent
        ));
    }
    out
}

pub fn render_brand(b: &BrandDetail, settings: &DisplaySettings) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {} ({})\n", b.logo, b.name, b.price_range));
    if b.reviews.is_empty() {
        out.push_str("no reviews yet\n");
    } else {
        out.push_str("reviews:\n");
        for r in &b.reviews {
            out.push_str(&format!(
                "  {}\t{}\t{}\n",
                r.slug,
                stars(r.rating, settings),
                r.title
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{format_long_date, meter, score_percent, score_readout, stars};
    use crate::services::config::DisplaySettings;

    fn settings(bar_width: usize, ascii: bool) -> DisplaySettings {
        DisplaySettings { bar_width, ascii }
    }

    #[test]
    fn percent_is_proportional_to_score() {
        assert_eq!(score_percent(4.0), 80.0);
        assert_eq!(score_percent(0.0), 0.0);
        assert_eq!(score_percent(5.0), 100.0);
        assert_eq!(score_percent(2.5), 50.0);
    }

    #[test]
    fn percent_clamps_out_of_range_input() {
        assert_eq!(score_percent(6.3), 100.0);
        assert_eq!(score_percent(-1.0), 0.0);
    }

    #[test]
    fn stars_render_at_half_granularity() {
        let s = settings(20, false);
        assert_eq!(stars(4.5, &s), "★★★★½");
        assert_eq!(stars(4.0, &s), "★★★★☆");
        assert_eq!(stars(0.0, &s), "☆☆☆☆☆");
        assert_eq!(stars(5.0, &s), "★★★★★");
    }

    #[test]
    fn meter_fill_matches_score_share() {
        let s = settings(10, false);
        assert_eq!(meter(4.0, &s), "[████████░░]");
        let ascii = settings(10, true);
        assert_eq!(meter(4.0, &ascii), "[########--]");
        assert_eq!(meter(0.0, &ascii), "[----------]");
        assert_eq!(meter(5.0, &ascii), "[##########]");
    }

    #[test]
    fn readout_drops_trailing_zero() {
        assert_eq!(score_readout(4.0), "4/5");
        assert_eq!(score_readout(4.5), "4.5/5");
    }

    #[test]
    fn long_date_is_stable_across_calls() {
        assert_eq!(format_long_date("2024-03-15"), "March 15, 2024");
        assert_eq!(format_long_date("2024-03-15"), "March 15, 2024");
        assert_eq!(format_long_date("2023-11-27"), "November 27, 2023");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_long_date("coming soon"), "coming soon");
    }
}
