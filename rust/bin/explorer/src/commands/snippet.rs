//! `impact-explorer snippet <id>`: fill the form and print the fetch snippet.

use anyhow::Result;
use explorer_catalog::Catalog;
use explorer_codegen_lib::{try_plan_request, ExplorerSession, SnippetOptions};
use explorer_ir::ParamKind;

/// Parsed command-line overrides for one snippet.
#[derive(Debug, Default)]
pub struct Overrides {
    pub path: Vec<(String, String)>,
    pub body: Vec<(String, String)>,
}

/// Split `name=value`. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("expected name=value, got \"{}\"", raw))?;
    if name.is_empty() {
        anyhow::bail!("empty parameter name in \"{}\"", raw);
    }
    Ok((name.to_string(), value.to_string()))
}

/// Select `id` (placeholder defaults) and apply the overrides on top.
fn prepare<'c>(
    catalog: &'c Catalog,
    id: &str,
    overrides: &Overrides,
    options: SnippetOptions,
) -> Result<ExplorerSession<'c>> {
    let mut session = ExplorerSession::new(catalog, options);
    let ep = session.select(id)?;

    for (kind, values) in [(ParamKind::Path, &overrides.path), (ParamKind::Body, &overrides.body)] {
        for (name, value) in values {
            if ep.param(kind, name).is_none() {
                let list = match kind {
                    ParamKind::Path => "URL",
                    ParamKind::Body => "body",
                };
                anyhow::bail!("{} has no {} parameter \"{}\"", ep.id, list, name);
            }
            session.set_value(kind, name, value);
        }
    }
    Ok(session)
}

/// Generate the snippet text for `id`.
pub fn render(
    catalog: &Catalog,
    id: &str,
    overrides: &Overrides,
    options: SnippetOptions,
    strict: bool,
) -> Result<String> {
    let mut session = prepare(catalog, id, overrides, options)?;
    let snippet = if strict {
        session.try_generate()?
    } else {
        session.generate()
    };
    snippet
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("no endpoint selected"))
}

/// Resolved request plan as pretty JSON. With `strict`, an undecodable
/// structured literal is an error here too.
pub fn render_plan(
    catalog: &Catalog,
    id: &str,
    overrides: &Overrides,
    options: SnippetOptions,
    strict: bool,
) -> Result<String> {
    let session = prepare(catalog, id, overrides, options)?;
    let ep = session
        .selected()
        .ok_or_else(|| anyhow::anyhow!("no endpoint selected"))?;
    let plan = if strict {
        try_plan_request(ep, session.values(), session.options())?
    } else {
        session
            .plan()
            .ok_or_else(|| anyhow::anyhow!("no endpoint selected"))?
    };
    Ok(serde_json::to_string_pretty(&plan)?)
}

/// Print the snippet, or the resolved request plan as JSON.
pub fn run(
    catalog: &Catalog,
    id: &str,
    overrides: &Overrides,
    options: SnippetOptions,
    strict: bool,
    output_json: bool,
) -> Result<()> {
    if output_json {
        println!("{}", render_plan(catalog, id, overrides, options, strict)?);
        return Ok(());
    }

    println!("{}", render(catalog, id, overrides, options, strict)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(parse_assignment("a=b").unwrap(), ("a".to_string(), "b".to_string()));
        assert_eq!(parse_assignment("q=x=y").unwrap(), ("q".to_string(), "x=y".to_string()));
        assert_eq!(parse_assignment("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=v").is_err());
    }

    #[test]
    fn test_render_with_overrides() {
        let catalog = Catalog::builtin();
        let overrides = Overrides {
            path: vec![("productId".into(), "prod_42".into())],
            body: vec![("quantity".into(), "7".into())],
        };
        let snippet = render(&catalog, "update-inventory", &overrides, SnippetOptions::default(), false).unwrap();
        assert!(snippet.contains("/v1/products/prod_42/inventory"));
        assert!(snippet.contains("\"quantity\": 7,"));
    }

    #[test]
    fn test_unknown_parameter_is_rejected() {
        let catalog = Catalog::builtin();
        let overrides = Overrides {
            path: vec![("nope".into(), "x".into())],
            body: vec![],
        };
        let err = render(&catalog, "get-user-details", &overrides, SnippetOptions::default(), false).unwrap_err();
        assert!(err.to_string().contains("no URL parameter \"nope\""));
    }

    #[test]
    fn test_unknown_endpoint() {
        let catalog = Catalog::builtin();
        let err = render(&catalog, "nope", &Overrides::default(), SnippetOptions::default(), false).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_strict_rejects_bad_literal() {
        let catalog = Catalog::builtin();
        let overrides = Overrides {
            path: vec![],
            body: vec![("items".into(), "[oops]".into())],
        };
        assert!(render(&catalog, "create-order", &overrides, SnippetOptions::default(), true).is_err());
        let lenient = render(&catalog, "create-order", &overrides, SnippetOptions::default(), false).unwrap();
        assert!(lenient.contains("\"items\": \"[oops]\""));
    }

    #[test]
    fn test_strict_json_plan_rejects_bad_literal() {
        let catalog = Catalog::builtin();
        let overrides = Overrides {
            path: vec![],
            body: vec![("items".into(), "[oops]".into())],
        };
        let err = render_plan(&catalog, "create-order", &overrides, SnippetOptions::default(), true).unwrap_err();
        assert!(err.to_string().contains("items"), "{}", err);
        assert!(run(&catalog, "create-order", &overrides, SnippetOptions::default(), true, true).is_err());

        let lenient = render_plan(&catalog, "create-order", &overrides, SnippetOptions::default(), false).unwrap();
        let plan: serde_json::Value = serde_json::from_str(&lenient).unwrap();
        assert_eq!(plan["body"]["items"], "[oops]");
        assert_eq!(plan["method"], "POST");
    }
}
