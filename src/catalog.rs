use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::cli::PetType;
use crate::domain::constants::MAX_SCORE;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Catalog {
    pub articles: Vec<Article>,
    pub brands: Vec<Brand>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub pet_type: PetType,
    pub image: String,
    pub publish_date: String,
    pub read_time: u32,
    pub rating: f64,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    pub ingredients: Ingredients,
    pub scores: Scores,
    pub verdict: String,
    #[serde(default)]
    pub brand_id: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ingredients {
    pub protein: f64,
    pub fat: f64,
    pub fiber: f64,
    #[serde(default)]
    pub main_ingredients: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub ingredients: f64,
    pub nutrition: f64,
    pub palatability: f64,
    pub price_quality: f64,
}

impl Scores {
    /// The four fixed criteria in their rendering order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("ingredients", self.ingredients),
            ("nutrition", self.nutrition),
            ("palatability", self.palatability),
            ("price_quality", self.price_quality),
        ]
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub price_range: String,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("brand not found: {0}")]
    BrandNotFound(String),
}

pub fn bundled_catalog() -> anyhow::Result<Catalog> {
    let articles = serde_json::from_str(include_str!("../data/articles.json"))?;
    let brands = serde_json::from_str(include_str!("../data/brands.json"))?;
    Ok(Catalog { articles, brands })
}

pub fn load_catalog(source: Option<&str>) -> anyhow::Result<Catalog> {
    let Some(source) = source else {
        return bundled_catalog();
    };
    let path = Path::new(source);
    if path.is_dir() {
        let articles = serde_json::from_str(&std::fs::read_to_string(path.join("articles.json"))?)?;
        let brands = serde_json::from_str(&std::fs::read_to_string(path.join("brands.json"))?)?;
        return Ok(Catalog { articles, brands });
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// First match wins; slug uniqueness is a data convention, not enforced here.
pub fn find_article<'a>(catalog: &'a Catalog, slug: &str) -> Option<&'a Article> {
    catalog.articles.iter().find(|a| a.slug == slug)
}

pub fn find_brand<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Brand> {
    catalog.brands.iter().find(|b| b.id == id)
}

pub fn search<'a>(
    catalog: &'a Catalog,
    query: Option<&str>,
    pet: Option<PetType>,
) -> Vec<&'a Article> {
    catalog
        .articles
        .iter()
        .filter(|a| pet.map(|p| a.pet_type == p).unwrap_or(true))
        .filter(|a| match query {
            None => true,
            Some(q) => {
                let q = q.to_ascii_lowercase();
                a.title.to_ascii_lowercase().contains(&q)
                    || a.excerpt.to_ascii_lowercase().contains(&q)
                    || a.category.to_ascii_lowercase().contains(&q)
            }
        })
        .collect()
}

pub fn brand_articles<'a>(catalog: &'a Catalog, id: &str) -> Vec<&'a Article> {
    catalog
        .articles
        .iter()
        .filter(|a| a.brand_id.as_deref() == Some(id))
        .collect()
}

pub fn duplicate_slugs(catalog: &Catalog) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dupes = Vec::new();
    for a in &catalog.articles {
        if !seen.insert(a.slug.as_str()) && !dupes.contains(&a.slug) {
            dupes.push(a.slug.clone());
        }
    }
    dupes
}

pub fn dangling_brand_refs(catalog: &Catalog) -> Vec<String> {
    catalog
        .articles
        .iter()
        .filter(|a| matches!(&a.brand_id, Some(id) if find_brand(catalog, id).is_none()))
        .map(|a| a.slug.clone())
        .collect()
}

pub fn out_of_range_scores(catalog: &Catalog) -> Vec<String> {
    catalog
        .articles
        .iter()
        .filter(|a| {
            std::iter::once(a.rating)
                .chain(a.scores.entries().into_iter().map(|(_, v)| v))
                .any(|v| !(0.0..=MAX_SCORE).contains(&v))
        })
        .map(|a| a.slug.clone())
        .collect()
}

pub fn invalid_publish_dates(catalog: &Catalog) -> Vec<String> {
    catalog
        .articles
        .iter()
        .filter(|a| NaiveDate::parse_from_str(&a.publish_date, "%Y-%m-%d").is_err())
        .map(|a| a.slug.clone())
        .collect()
}
