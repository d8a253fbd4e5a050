use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub catalog: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let catalog = tmp.path().join("catalog");
        write_catalog(
            &catalog,
            &json!([
                {
                    "slug": "salmon-feast-test",
                    "title": "Salmon Feast six-week trial",
                    "excerpt": "Single-protein salmon kibble fed for six weeks.",
                    "category": "Dry Food",
                    "petType": "dog",
                    "image": "🐟",
                    "publishDate": "2024-03-15",
                    "readTime": 8,
                    "rating": 4.5,
                    "pros": ["Rich in omega-3", "Single protein source"],
                    "cons": ["Premium price"],
                    "ingredients": {
                        "protein": 32,
                        "fat": 14,
                        "fiber": 4,
                        "mainIngredients": ["salmon", "sweet potato", "peas"]
                    },
                    "scores": {
                        "ingredients": 4,
                        "nutrition": 3.5,
                        "palatability": 5,
                        "priceQuality": 2
                    },
                    "verdict": "A strong recipe held back only by its price.",
                    "brandId": "np"
                },
                {
                    "slug": "orphan-brand-test",
                    "title": "Mystery pate with a vanished maker",
                    "excerpt": "The brand behind this pate no longer exists.",
                    "category": "Wet Food",
                    "petType": "cat",
                    "image": "🥫",
                    "publishDate": "2024-01-02",
                    "readTime": 4,
                    "rating": 3,
                    "pros": ["Cats liked it"],
                    "cons": ["Unavailable in most shops"],
                    "ingredients": {
                        "protein": 10,
                        "fat": 5,
                        "fiber": 1,
                        "mainIngredients": ["chicken"]
                    },
                    "scores": {
                        "ingredients": 3,
                        "nutrition": 3,
                        "palatability": 4,
                        "priceQuality": 3
                    },
                    "verdict": "Fine while stocks last.",
                    "brandId": "ghost"
                }
            ]),
            &json!([
                {
                    "id": "np",
                    "name": "NordicPaws",
                    "logo": "🐾",
                    "priceRange": "premium"
                }
            ]),
        );

        Self {
            _tmp: tmp,
            home,
            catalog,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("kibble").expect("binary under test");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_catalog(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .arg("--catalog")
            .arg(self.catalog.to_str().expect("catalog path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn write_catalog(dir: &Path, articles: &Value, brands: &Value) {
    fs::create_dir_all(dir).expect("create catalog dir");
    fs::write(
        dir.join("articles.json"),
        serde_json::to_string_pretty(articles).expect("serialize articles"),
    )
    .expect("write articles");
    fs::write(
        dir.join("brands.json"),
        serde_json::to_string_pretty(brands).expect("serialize brands"),
    )
    .expect("write brands");
}

/// Minimal valid article for tests that only care about slugs and keys.
pub fn article_json(slug: &str, brand_id: Option<&str>) -> Value {
    let mut article = json!({
        "slug": slug,
        "title": format!("{} review", slug),
        "excerpt": "Placeholder excerpt.",
        "category": "Dry Food",
        "petType": "dog",
        "image": "🍖",
        "publishDate": "2024-06-01",
        "readTime": 3,
        "rating": 3,
        "pros": ["It exists"],
        "cons": ["Nothing notable"],
        "ingredients": {
            "protein": 20,
            "fat": 10,
            "fiber": 3,
            "mainIngredients": ["chicken"]
        },
        "scores": {
            "ingredients": 3,
            "nutrition": 3,
            "palatability": 3,
            "priceQuality": 3
        },
        "verdict": "Unremarkable but complete."
    });
    if let Some(id) = brand_id {
        article["brandId"] = json!(id);
    }
    article
}
