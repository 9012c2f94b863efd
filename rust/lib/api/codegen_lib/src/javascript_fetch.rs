//! JavaScript `fetch` snippet generator

use crate::request::RequestPlan;

/// Render a self-contained `async function callApi()` snippet for `plan`.
///
/// The output is always complete JavaScript: the URL and header values are
/// escaped for single-quoted strings and the body is a literal.
pub fn generate(plan: &RequestPlan) -> String {
    let mut output = String::new();

    output.push_str("async function callApi() {\n");
    output.push_str(&format!(
        "  const url = {}; // Replace with your actual API domain\n",
        single_quoted(&plan.url)
    ));
    if let Some(body) = &plan.body {
        output.push_str(&format!("  const body = {};\n", body.to_js_literal(1)));
    }
    output.push('\n');

    output.push_str("  const options = {\n");
    output.push_str(&format!("    method: {},\n", single_quoted(plan.method.as_str())));
    output.push_str("    headers: {\n");
    for (i, (name, value)) in plan.headers.iter().enumerate() {
        output.push_str(&format!("      {}: {}", single_quoted(name), single_quoted(value)));
        if i + 1 < plan.headers.len() {
            output.push(',');
        }
        if name.eq_ignore_ascii_case("authorization") {
            output.push_str(" // Replace with your actual token");
        }
        output.push('\n');
    }
    output.push_str("    }");
    if plan.body.is_some() {
        output.push_str(",\n    body: JSON.stringify(body)");
    }
    output.push_str("\n  };\n\n");

    output.push_str("  try {\n");
    output.push_str("    const response = await fetch(url, options);\n");
    output.push_str("    if (!response.ok) {\n");
    output.push_str("      throw new Error(`HTTP error! status: ${response.status}`);\n");
    output.push_str("    }\n");
    output.push_str("    const data = await response.json();\n");
    output.push_str("    console.log('API Response:', data);\n");
    output.push_str("    return data;\n");
    output.push_str("  } catch (error) {\n");
    output.push_str("    console.error('Error calling API:', error);\n");
    output.push_str("    throw error;\n");
    output.push_str("  }\n");
    output.push_str("}\n\n");
    output.push_str("callApi();");

    output
}

fn single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}
