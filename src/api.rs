//! HTTP Requests
//!
//! Read-only call to the public product catalog used by the products page.

use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("products request failed: {0}")]
    Status(u16),
}

/// GET the product list from `url`
pub async fn fetch_products(url: &str) -> Result<Vec<Product>, ApiError> {
    let resp = gloo_net::http::Request::get(url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json::<Vec<Product>>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        assert_eq!(ApiError::Status(503).to_string(), "products request failed: 503");
    }
}
