//! Built-in endpoint catalog shipped with the explorer.

use explorer_ir::*;

use explorer_ir::ParamType::{Array, Number, String as Str};

fn endpoint(
    id: &str,
    name: &str,
    description: &str,
    method: HttpMethod,
    path: &str,
) -> EndpointDescriptor {
    EndpointDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        method,
        path: path.to_string(),
        parameters: Vec::new(),
        body_parameters: Vec::new(),
    }
}

fn param(name: &str, ty: ParamType, required: bool, description: &str, placeholder: &str) -> ParameterSpec {
    let spec = ParameterSpec::new(name, ty)
        .describe(description)
        .placeholder(placeholder);
    if required {
        spec.required()
    } else {
        spec
    }
}

/// All built-in endpoints, in display order.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor {
            parameters: vec![
                param("CampaignId", Str, true, "The unique identifier for the campaign.", "1234"),
                param("StartDate", Str, true, "Start date for the report.", "YYYY-MM-DD"),
                param("EndDate", Str, true, "End date for the report.", "YYYY-MM-DD"),
                param("SubAID", Str, false, "Filter by a specific SubAID.", "sub_id_1"),
            ],
            ..endpoint(
                "get-performance-report",
                "Get Performance Report",
                "Retrieves performance reports from Impact.com (clicks, conversions, revenue).",
                HttpMethod::Get,
                "/Advertisers/{CampaignId}/Reports",
            )
        },
        EndpointDescriptor {
            parameters: vec![
                param("PageSize", Number, false, "The number of results to return per page.", "100"),
                param("Page", Number, false, "The page number of the results.", "1"),
            ],
            ..endpoint(
                "list-media-partners",
                "List Media Partners",
                "Retrieves a list of all media partners from Impact.com.",
                HttpMethod::Get,
                "/MediaPartners",
            )
        },
        EndpointDescriptor {
            parameters: vec![
                param("StartDate", Str, true, "Start date and time for the conversion data.", "YYYY-MM-DDTHH:MM:SSZ"),
                param("EndDate", Str, true, "End date and time for the conversion data.", "YYYY-MM-DDTHH:MM:SSZ"),
                param("ActionTrackerId", Str, false, "Filter by a specific Action Tracker ID.", "5678"),
            ],
            ..endpoint(
                "get-conversions",
                "Get Conversions",
                "Retrieves conversion data from Impact.com for a specified date range.",
                HttpMethod::Get,
                "/Conversions",
            )
        },
        EndpointDescriptor {
            parameters: vec![
                param("StartDate", Str, true, "The start date for the payout period.", "YYYY-MM-DD"),
                param("EndDate", Str, true, "The end date for the payout period.", "YYYY-MM-DD"),
            ],
            ..endpoint(
                "get-payouts",
                "Get Payouts",
                "Retrieves payout and commission information from Impact.com.",
                HttpMethod::Get,
                "/Payouts",
            )
        },
        EndpointDescriptor {
            parameters: vec![param("userId", Str, true, "The unique identifier for the user.", "user_123")],
            ..endpoint(
                "get-user-details",
                "Get User Details",
                "Retrieves details for a specific user.",
                HttpMethod::Get,
                "/v1/users/{userId}",
            )
        },
        EndpointDescriptor {
            parameters: vec![
                param("limit", Number, false, "Maximum number of products to return.", "10"),
                param("offset", Number, false, "Number of products to skip before returning results.", "0"),
                param("category", Str, false, "Filter products by category.", "electronics"),
            ],
            ..endpoint(
                "list-products",
                "List Products",
                "Retrieves a list of available products.",
                HttpMethod::Get,
                "/v1/products",
            )
        },
        EndpointDescriptor {
            body_parameters: vec![
                param("customerId", Str, true, "The ID of the customer placing the order.", "cust_abc"),
                param(
                    "items",
                    Array,
                    true,
                    "An array of items to include in the order. Each item object should have productId and quantity.",
                    r#"[{ "productId": "prod_xyz", "quantity": 2 }]"#,
                ),
                param("shippingAddress", Str, true, "The shipping address for the order.", "123 Main St, Anytown USA"),
            ],
            ..endpoint(
                "create-order",
                "Create Order",
                "Creates a new order with the specified items.",
                HttpMethod::Post,
                "/v1/orders",
            )
        },
        EndpointDescriptor {
            parameters: vec![param("productId", Str, true, "The unique identifier for the product.", "prod_xyz")],
            body_parameters: vec![
                param("quantity", Number, true, "The new stock quantity.", "100"),
                param("locationId", Str, false, "Warehouse location ID.", "wh_1"),
            ],
            ..endpoint(
                "update-inventory",
                "Update Inventory",
                "Updates the stock level for a product.",
                HttpMethod::Put,
                "/v1/products/{productId}/inventory",
            )
        },
        EndpointDescriptor {
            parameters: vec![param(
                "customerId",
                Str,
                true,
                "The unique identifier for the customer to delete.",
                "cust_abc",
            )],
            ..endpoint(
                "delete-customer",
                "Delete Customer",
                "Deletes a specific customer account.",
                HttpMethod::Delete,
                "/v1/customers/{customerId}",
            )
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_endpoints;

    #[test]
    fn builtin_catalog_is_valid() {
        let eps = endpoints();
        assert_eq!(eps.len(), 9);
        let errors = validate_endpoints(&eps);
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn only_post_and_put_define_bodies() {
        for ep in endpoints() {
            if !ep.body_parameters.is_empty() {
                assert!(ep.method.carries_body(), "{}", ep.id);
            }
        }
    }
}
