//! Catalog browsing commands.
//!
//! `impact-explorer list`, `impact-explorer show <id>`, `impact-explorer validate <file>`.

use std::path::Path;

use anyhow::Result;
use explorer_catalog::{Catalog, TableSort};
use explorer_ir::{ParamKind, ParameterSpec};

/// Print the endpoint table in the given order.
pub fn list(catalog: &Catalog, sort: TableSort, output_json: bool) -> Result<()> {
    let endpoints = catalog.sorted(sort);

    if output_json {
        println!("{}", serde_json::to_string_pretty(&endpoints)?);
        return Ok(());
    }

    if endpoints.is_empty() {
        println!("No endpoints in catalog.");
        return Ok(());
    }

    println!("{:28} {:7} {:40} {}", "NAME", "METHOD", "PATH", "ID");
    for ep in endpoints {
        println!("{:28} {:7} {:40} {}", ep.name, ep.method, ep.path, ep.id);
    }
    Ok(())
}

/// Print one endpoint with its parameter specs.
pub fn show(catalog: &Catalog, id: &str, output_json: bool) -> Result<()> {
    let ep = catalog.select(id)?;

    if output_json {
        println!("{}", serde_json::to_string_pretty(ep)?);
        return Ok(());
    }

    println!("{} ({})", ep.name, ep.id);
    println!("  {} {}", ep.method, ep.path);
    println!("  {}", ep.description);

    if ep.takes_no_parameters() {
        println!();
        println!("This endpoint does not require any parameters.");
        return Ok(());
    }

    for (kind, title) in [(ParamKind::Path, "URL Parameters"), (ParamKind::Body, "Body Parameters")] {
        let params = ep.params(kind);
        if params.is_empty() {
            continue;
        }
        println!();
        println!("{}:", title);
        println!("  {:20} {:8} {:3} {:30} {}", "NAME", "TYPE", "REQ", "PLACEHOLDER", "DESCRIPTION");
        for spec in params {
            print_param(spec);
        }
    }
    Ok(())
}

fn print_param(spec: &ParameterSpec) {
    let required = if spec.required { "*" } else { "" };
    let placeholder = spec.placeholder.as_deref().unwrap_or("-");
    println!(
        "  {:20} {:8} {:3} {:30} {}",
        spec.name, spec.ty, required, placeholder, spec.description
    );
}

/// Load and validate a catalog file.
pub fn validate(path: &Path) -> Result<()> {
    let catalog = Catalog::load(path)
        .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
    println!("{}: {} endpoints OK.", path.display(), catalog.len());
    Ok(())
}
