use clap::Parser;

mod catalog;
mod cli;
mod commands;
mod domain;
mod services;

pub use catalog::*;
pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::audit::*;
pub use services::config::*;
pub use services::output::*;
pub use services::render::*;
pub use services::review::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_display_settings()?;
    let catalog = load_catalog(cli.catalog.as_deref())?;

    if handle_admin_commands(&cli, &catalog)? {
        return Ok(());
    }
    handle_runtime_commands(&cli, &catalog, &settings)
}
