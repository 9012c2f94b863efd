use explorer_catalog::{Catalog, CatalogError};
use explorer_ir::{EndpointDescriptor, ParamKind};
use tracing::debug;

use crate::coerce::DecodeError;
use crate::javascript_fetch;
use crate::request::{plan_request, try_plan_request, RequestPlan, SnippetOptions};
use crate::values::ParameterValues;

/// ExplorerSession owns the state of one snippet-generator view: the
/// selected endpoint, the raw values of its fields and the last snippet.
///
/// Selecting another endpoint resets every field to that endpoint's
/// placeholders and clears the last snippet.
pub struct ExplorerSession<'c> {
    catalog: &'c Catalog,
    options: SnippetOptions,
    selected: Option<&'c EndpointDescriptor>,
    values: ParameterValues,
    last_snippet: Option<String>,
}

impl<'c> ExplorerSession<'c> {
    pub fn new(catalog: &'c Catalog, options: SnippetOptions) -> Self {
        Self {
            catalog,
            options,
            selected: None,
            values: ParameterValues::default(),
            last_snippet: None,
        }
    }

    /// Select an endpoint by id. An unknown id leaves the session untouched.
    pub fn select(&mut self, id: &str) -> Result<&'c EndpointDescriptor, CatalogError> {
        let ep = self.catalog.select(id)?;
        self.values.initialize(ep);
        self.selected = Some(ep);
        self.last_snippet = None;
        debug!("ExplorerSession: selected {}", id);
        Ok(ep)
    }

    pub fn selected(&self) -> Option<&'c EndpointDescriptor> {
        self.selected
    }

    /// Overwrite one raw field value (one keystroke in the form).
    pub fn set_value(&mut self, kind: ParamKind, name: &str, raw: &str) {
        self.values.set(kind, name, raw);
    }

    pub fn value(&self, kind: ParamKind, name: &str) -> Option<&str> {
        self.values.get(kind, name)
    }

    pub fn values(&self) -> &ParameterValues {
        &self.values
    }

    pub fn options(&self) -> &SnippetOptions {
        &self.options
    }

    /// Resolved request for the current state, if an endpoint is selected.
    pub fn plan(&self) -> Option<RequestPlan> {
        self.selected
            .map(|ep| plan_request(ep, &self.values, &self.options))
    }

    /// Generate the snippet for the current state and keep it as the last
    /// snippet. `None` when no endpoint is selected.
    pub fn generate(&mut self) -> Option<&str> {
        let plan = self.plan()?;
        self.last_snippet = Some(javascript_fetch::generate(&plan));
        self.last_snippet.as_deref()
    }

    /// Like [`generate`](Self::generate), but an undecodable structured
    /// literal is an error instead of being kept as a string.
    pub fn try_generate(&mut self) -> Result<Option<&str>, DecodeError> {
        let Some(ep) = self.selected else {
            return Ok(None);
        };
        let plan = try_plan_request(ep, &self.values, &self.options)?;
        self.last_snippet = Some(javascript_fetch::generate(&plan));
        Ok(self.last_snippet.as_deref())
    }

    /// Snippet handed to a copy-to-clipboard collaborator.
    pub fn last_snippet(&self) -> Option<&str> {
        self.last_snippet.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_selected_generates_nothing() {
        let catalog = Catalog::builtin();
        let mut session = ExplorerSession::new(&catalog, SnippetOptions::default());
        assert!(session.generate().is_none());
        assert!(session.try_generate().unwrap().is_none());
        assert!(session.plan().is_none());
    }

    #[test]
    fn unknown_id_keeps_state() {
        let catalog = Catalog::builtin();
        let mut session = ExplorerSession::new(&catalog, SnippetOptions::default());
        session.select("get-user-details").unwrap();
        session.set_value(ParamKind::Path, "userId", "u9");

        assert!(matches!(session.select("nope"), Err(CatalogError::NotFound(_))));
        assert_eq!(session.selected().unwrap().id, "get-user-details");
        assert_eq!(session.value(ParamKind::Path, "userId"), Some("u9"));
    }

    #[test]
    fn reselect_resets_values_and_snippet() {
        let catalog = Catalog::builtin();
        let mut session = ExplorerSession::new(&catalog, SnippetOptions::default());
        session.select("create-order").unwrap();
        session.set_value(ParamKind::Body, "customerId", "cust_1");
        assert!(session.generate().is_some());

        session.select("update-inventory").unwrap();
        assert!(session.last_snippet().is_none());
        assert_eq!(session.value(ParamKind::Body, "customerId"), None);
        assert_eq!(session.value(ParamKind::Body, "quantity"), Some("100"));
        assert_eq!(session.value(ParamKind::Path, "productId"), Some("prod_xyz"));

        // Re-selecting the same endpoint also resets edits.
        session.set_value(ParamKind::Body, "quantity", "5");
        session.select("update-inventory").unwrap();
        assert_eq!(session.value(ParamKind::Body, "quantity"), Some("100"));
    }

    #[test]
    fn generate_uses_current_values() {
        let catalog = Catalog::builtin();
        let mut session = ExplorerSession::new(&catalog, SnippetOptions::default());
        session.select("update-inventory").unwrap();
        session.set_value(ParamKind::Path, "productId", "prod_42");
        session.set_value(ParamKind::Body, "quantity", "7");

        let snippet = session.generate().unwrap().to_string();
        assert!(snippet.contains("'https://your-api-domain.com/v1/products/prod_42/inventory'"));
        assert!(snippet.contains("\"quantity\": 7,"));
        assert_eq!(session.last_snippet(), Some(snippet.as_str()));
    }

    #[test]
    fn strict_generation_keeps_previous_snippet_on_error() {
        let catalog = Catalog::builtin();
        let mut session = ExplorerSession::new(&catalog, SnippetOptions::default());
        session.select("create-order").unwrap();
        let first = session.generate().unwrap().to_string();

        session.set_value(ParamKind::Body, "items", "[oops]");
        assert!(session.try_generate().is_err());
        assert_eq!(session.last_snippet(), Some(first.as_str()));
    }
}
