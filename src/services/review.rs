use crate::catalog::{self, Article, Catalog, CatalogError};
use crate::cli::PetType;
use crate::domain::constants::{score_label, LISTING_HINT};
use crate::domain::models::{
    ArticleDetail, ArticleSummary, ArticleView, BrandDetail, BrandSummary, BrandTeaser,
    NutritionView, ScoreRow,
};
use crate::services::render::{format_long_date, score_percent};

pub fn article_summaries(
    catalog: &Catalog,
    query: Option<&str>,
    pet: Option<PetType>,
) -> Vec<ArticleSummary> {
    catalog::search(catalog, query, pet)
        .into_iter()
        .map(summarize)
        .collect()
}

pub fn article_view(catalog: &Catalog, slug: &str) -> ArticleView {
    match catalog::find_article(catalog, slug) {
        Some(article) => ArticleView::Found(article_detail(catalog, article)),
        None => ArticleView::NotFound {
            slug: slug.to_string(),
            hint: LISTING_HINT.to_string(),
        },
    }
}

pub fn brand_detail(catalog: &Catalog, id: &str) -> anyhow::Result<BrandDetail> {
    let brand = catalog::find_brand(catalog, id)
        .ok_or_else(|| CatalogError::BrandNotFound(id.to_string()))?;
    Ok(BrandDetail {
        id: brand.id.clone(),
        name: brand.name.clone(),
        logo: brand.logo.clone(),
        price_range: brand.price_range.clone(),
        reviews: catalog::brand_articles(catalog, id)
            .into_iter()
            .map(summarize)
            .collect(),
    })
}

pub fn brand_summaries(catalog: &Catalog) -> Vec<BrandSummary> {
    catalog
        .brands
        .iter()
        .map(|b| BrandSummary {
            id: b.id.clone(),
            name: b.name.clone(),
            logo: b.logo.clone(),
            price_range: b.price_range.clone(),
            review_count: catalog::brand_articles(catalog, &b.id).len(),
        })
        .collect()
}

fn summarize(a: &Article) -> ArticleSummary {
    ArticleSummary {
        slug: a.slug.clone(),
        title: a.title.clone(),
        category: a.category.clone(),
        pet_type: a.pet_type,
        rating: a.rating,
        publish_date: a.publish_date.clone(),
        read_time: a.read_time,
    }
}

/// Pure and total for a found article: every field projects directly; the
/// brand teaser is the only optional section and is omitted when the
/// referenced brand is absent.
fn article_detail(catalog: &Catalog, a: &Article) -> ArticleDetail {
    let brand = a
        .brand_id
        .as_deref()
        .and_then(|id| catalog::find_brand(catalog, id))
        .map(|b| BrandTeaser {
            id: b.id.clone(),
            name: b.name.clone(),
            logo: b.logo.clone(),
            price_range: b.price_range.clone(),
        });

    let scores = a
        .scores
        .entries()
        .into_iter()
        .map(|(key, value)| ScoreRow {
            key: key.to_string(),
            label: score_label(key).to_string(),
            score: value,
            percent: score_percent(value),
        })
        .collect();

    ArticleDetail {
        slug: a.slug.clone(),
        title: a.title.clone(),
        excerpt: a.excerpt.clone(),
        category: a.category.clone(),
        pet_type: a.pet_type,
        image: a.image.clone(),
        publish_date: a.publish_date.clone(),
        published: format_long_date(&a.publish_date),
        read_time: a.read_time,
        rating: a.rating,
        brand,
        pros: a.pros.clone(),
        cons: a.cons.clone(),
        nutrition: NutritionView {
            protein_pct: a.ingredients.protein,
            fat_pct: a.ingredients.fat,
            fiber_pct: a.ingredients.fiber,
            main_ingredients: a.ingredients.main_ingredients.clone(),
        },
        verdict: a.verdict.clone(),
        scores,
    }
}
