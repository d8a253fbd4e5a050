use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "kibble", version, about = "Pet food review catalog CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog source (dir with articles.json + brands.json, or a combined catalog file)"
    )]
    pub catalog: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        #[arg(long, value_enum)]
        pet: Option<PetType>,
    },
    Search {
        query: String,
        #[arg(long, value_enum)]
        pet: Option<PetType>,
    },
    Show {
        slug: String,
    },
    Brand {
        id: String,
    },
    Brands,
    Validate,
    Fingerprint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
}

impl PetType {
    pub fn badge(&self) -> &'static str {
        match self {
            PetType::Dog => "DOG",
            PetType::Cat => "CAT",
        }
    }
}
