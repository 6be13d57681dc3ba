//! OpenAPI documentation for the product API.
//!
//! The document is served as JSON at `/api-docs/openapi.json` and rendered
//! with Scalar at `/docs`.

use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::handlers::products::create_product,
        api::handlers::products::list_products,
        api::handlers::products::get_product,
        api::handlers::products::update_product,
        api::handlers::products::delete_product,
    ),
    components(
        schemas(
            api::models::products::Product,
        )
    ),
    tags(
        (name = "products", description = "Create, list, fetch, replace and delete stock items.

Updates replace the whole record: any field omitted from the request body is reset to its zero value, and an omitted `expiry_date` clears the stored one."),
    ),
    info(
        title = "Inventory API",
        version = "1.0.0",
        description = "CRUD API over the `products` table.

## Errors

Errors are returned as plain text with an appropriate status code:

- `400` malformed JSON body or non-integer product ID
- `404` product not found (single-product fetch only)
- `500` the store failed; details are logged, not returned

Updating or deleting a product that does not exist is not an error."
    )
)]
pub struct ApiDoc;
