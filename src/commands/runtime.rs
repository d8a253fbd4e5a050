use crate::*;

pub fn handle_runtime_commands(
    cli: &Cli,
    catalog: &Catalog,
    settings: &DisplaySettings,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::List { pet } => {
            let items = article_summaries(catalog, None, *pet);
            print_out(cli.json, &items, |a| {
                format!(
                    "{}\t{}\t{}\t{}",
                    a.slug,
                    a.pet_type.badge(),
                    a.category,
                    a.title
                )
            })?;
        }
        Commands::Search { query, pet } => {
            let items = article_summaries(catalog, Some(query), *pet);
            print_out(cli.json, &items, |a| {
                format!(
                    "{}\t{}\t{}\t{}",
                    a.slug,
                    a.pet_type.badge(),
                    a.category,
                    a.title
                )
            })?;
        }
        Commands::Show { slug } => {
            let view = article_view(catalog, slug);
            print_view(cli.json, view, |v| render_article(v, settings))?;
        }
        Commands::Brand { id } => {
            let detail = brand_detail(catalog, id)?;
            print_view(cli.json, detail, |b| render_brand(b, settings))?;
        }
        Commands::Brands => {
            let items = brand_summaries(catalog);
            print_out(cli.json, &items, |b| {
                format!(
                    "{}\t{}\t{}\t{} reviews",
                    b.id, b.name, b.price_range, b.review_count
                )
            })?;
        }
        Commands::Validate | Commands::Fingerprint => {
            unreachable!("handled before runtime dispatch")
        }
    }

    Ok(())
}
