use crate::cli::PetType;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize, Clone)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub category: String,
    pub pet_type: PetType,
    pub rating: f64,
    pub publish_date: String,
    pub read_time: u32,
}

/// Outcome of an article lookup. Not-found is a rendered page state,
/// not an error: both variants serialize inside the success envelope.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ArticleView {
    Found(ArticleDetail),
    NotFound { slug: String, hint: String },
}

#[derive(Serialize)]
pub struct ArticleDetail {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub pet_type: PetType,
    pub image: String,
    pub publish_date: String,
    /// Long-form rendering of `publish_date`.
    pub published: String,
    pub read_time: u32,
    pub rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandTeaser>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub nutrition: NutritionView,
    pub verdict: String,
    pub scores: Vec<ScoreRow>,
}

#[derive(Serialize)]
pub struct BrandTeaser {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub price_range: String,
}

#[derive(Serialize)]
pub struct NutritionView {
    pub protein_pct: f64,
    pub fat_pct: f64,
    pub fiber_pct: f64,
    pub main_ingredients: Vec<String>,
}

#[derive(Serialize)]
pub struct ScoreRow {
    pub key: String,
    pub label: String,
    pub score: f64,
    pub percent: f64,
}

#[derive(Serialize)]
pub struct BrandSummary {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub price_range: String,
    pub review_count: usize,
}

#[derive(Serialize)]
pub struct BrandDetail {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub price_range: String,
    pub reviews: Vec<ArticleSummary>,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct ValidateReport {
    pub overall: String,
    pub articles: usize,
    pub brands: usize,
    pub checks: Vec<CheckItem>,
    pub warnings: Vec<String>,
    pub fingerprint: String,
}

#[derive(Serialize)]
pub struct FingerprintOut {
    pub fingerprint: String,
}
