use crate::*;

pub fn handle_admin_commands(cli: &Cli, catalog: &Catalog) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Validate => {
            let report = build_validate_report(catalog)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("overall: {}", report.overall);
                println!("articles: {}  brands: {}", report.articles, report.brands);
                for c in &report.checks {
                    println!("check:{}\t{}", c.name, c.status);
                }
                for w in &report.warnings {
                    println!("warning: {}", w);
                }
                println!("fingerprint: {}", report.fingerprint);
            }
            Ok(true)
        }
        Commands::Fingerprint => {
            let fingerprint = catalog_fingerprint(catalog)?;
            print_view(cli.json, FingerprintOut { fingerprint }, |f| {
                format!("{}\n", f.fingerprint)
            })?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
