use crate::api::models::products::Product;
use crate::db::errors::DbError;
use crate::db::models::products::{ProductCreateDBRequest, ProductUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::types::ProductId;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

#[utoipa::path(
    post,
    path = "/api/v1/products",
    tag = "products",
    summary = "Create product",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Request body is not valid product JSON"),
        (status = 500, description = "Failed to create product")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_product(
    State(state): State<AppState>,
    body: std::result::Result<Json<Product>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>)> {
    let Json(product) = body?;

    let created = state.products.create(&ProductCreateDBRequest::from(&product)).await?;
    tracing::info!(product_id = created.id, "Created product");

    Ok((StatusCode::CREATED, Json(Product::from(created))))
}

#[utoipa::path(
    get,
    path = "/api/v1/products",
    tag = "products",
    summary = "List products",
    responses(
        (status = 200, description = "All products, possibly none", body = Vec<Product>),
        (status = 500, description = "Failed to retrieve products")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.products.list().await?;
    Ok(Json(products.into_iter().map(Product::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    tag = "products",
    summary = "Get product",
    params(
        ("id" = i64, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Product details", body = Product),
        (status = 400, description = "ID is not an integer"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Failed to retrieve product")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;

    let product = state.products.get_by_id(id).await.map_err(|e| match e {
        DbError::NotFound => Error::NotFound {
            resource: "Product".to_string(),
            id: id.to_string(),
        },
        other => other.into(),
    })?;

    Ok(Json(Product::from(product)))
}

/// Replaces every field of the product. The response echoes the request body
/// with the id taken from the path; it is not read back from the store.
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    tag = "products",
    summary = "Update product",
    request_body = Product,
    params(
        ("id" = i64, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid ID or request body"),
        (status = 500, description = "Failed to update product")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
    body: std::result::Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    let Json(mut product) = body?;

    let matched = state.products.update(id, &ProductUpdateDBRequest::from(&product)).await?;
    if !matched {
        tracing::debug!(product_id = id, "Update matched no product");
    }

    product.id = id;
    Ok(Json(product))
}

#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    tag = "products",
    summary = "Delete product",
    params(
        ("id" = i64, Path, description = "Product ID"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "ID is not an integer"),
        (status = 500, description = "Failed to delete product")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_product(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<StatusCode> {
    let Path(id) = id?;

    if state.products.delete(id).await? {
        tracing::info!(product_id = id, "Deleted product");
    } else {
        tracing::debug!(product_id = id, "Delete matched no product");
    }

    Ok(StatusCode::NO_CONTENT)
}
