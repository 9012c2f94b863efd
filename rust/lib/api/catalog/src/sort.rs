//! Table ordering for endpoint listings.

use std::cmp::Ordering;

use explorer_ir::EndpointDescriptor;

/// Column an endpoint listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Method,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Current sort state of an endpoint table. Starts at name, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSort {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Default for TableSort {
    fn default() -> Self {
        Self {
            key: SortKey::Name,
            order: SortOrder::Asc,
        }
    }
}

impl TableSort {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Clicking a column header: same column flips the order,
    /// another column becomes active in ascending order.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.order = match self.order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
        } else {
            self.key = key;
            self.order = SortOrder::Asc;
        }
    }

    /// Sort endpoints. Descending is the exact reverse of ascending.
    pub fn apply<'a>(&self, endpoints: &'a [EndpointDescriptor]) -> Vec<&'a EndpointDescriptor> {
        let mut sorted: Vec<&EndpointDescriptor> = endpoints.iter().collect();
        sorted.sort_by(|a, b| match self.key {
            SortKey::Name => compare_text(&a.name, &b.name),
            SortKey::Method => compare_text(a.method.as_str(), b.method.as_str()),
        });
        if self.order == SortOrder::Desc {
            sorted.reverse();
        }
        sorted
    }
}

/// Case-insensitive; among names equal up to case, lowercase sorts first.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use explorer_ir::HttpMethod;

    fn ep(name: &str, method: HttpMethod) -> EndpointDescriptor {
        EndpointDescriptor {
            id: name.to_lowercase(),
            name: name.into(),
            description: String::new(),
            method,
            path: "/".into(),
            parameters: vec![],
            body_parameters: vec![],
        }
    }

    fn names(sorted: &[&EndpointDescriptor]) -> Vec<String> {
        sorted.iter().map(|e| e.name.clone()).collect()
    }

    #[test]
    fn toggle_flips_then_switches() {
        let mut sort = TableSort::default();
        sort.toggle(SortKey::Name);
        assert_eq!(sort, TableSort::new(SortKey::Name, SortOrder::Desc));
        sort.toggle(SortKey::Method);
        assert_eq!(sort, TableSort::new(SortKey::Method, SortOrder::Asc));
        sort.toggle(SortKey::Method);
        sort.toggle(SortKey::Method);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let eps = vec![
            ep("list Products", HttpMethod::Get),
            ep("Create Order", HttpMethod::Post),
            ep("Delete Customer", HttpMethod::Delete),
        ];
        let asc = TableSort::default().apply(&eps);
        assert_eq!(names(&asc), vec!["Create Order", "Delete Customer", "list Products"]);

        let desc = TableSort::new(SortKey::Name, SortOrder::Desc).apply(&eps);
        assert_eq!(names(&desc), vec!["list Products", "Delete Customer", "Create Order"]);
    }

    #[test]
    fn lowercase_first_on_case_ties() {
        let eps = vec![
            ep("Get Payouts", HttpMethod::Get),
            ep("get payouts", HttpMethod::Get),
            ep("A", HttpMethod::Get),
            ep("a", HttpMethod::Get),
        ];
        let asc = TableSort::default().apply(&eps);
        assert_eq!(names(&asc), vec!["a", "A", "get payouts", "Get Payouts"]);

        let desc = TableSort::new(SortKey::Name, SortOrder::Desc).apply(&eps);
        assert_eq!(names(&desc), vec!["Get Payouts", "get payouts", "A", "a"]);
    }

    #[test]
    fn method_sort() {
        let eps = vec![
            ep("A", HttpMethod::Put),
            ep("B", HttpMethod::Get),
            ep("C", HttpMethod::Delete),
            ep("D", HttpMethod::Post),
        ];
        let sorted = TableSort::new(SortKey::Method, SortOrder::Asc).apply(&eps);
        assert_eq!(names(&sorted), vec!["C", "B", "D", "A"]);
    }
}
