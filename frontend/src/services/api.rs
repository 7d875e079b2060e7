//! HTTP client for the listing backend.
//!
//! [`ListingApi`] is the seam between the controller and the network;
//! [`HttpListingApi`] is the browser implementation on top of `gloo-net`.

use std::collections::BTreeMap;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    AppError, AppResult, ExportResponse, Marketplace, SkuImages, SkuLookupRequest,
    SkuLookupResponse, Variant, VariantRequest, VariantResponse, BACKEND_URL,
};

/// Backend operations used by the listing form.
///
/// Business refusals come back as [`AppError::Rejected`]; transport and
/// decoding problems as [`AppError::Network`] / [`AppError::Decode`].
#[allow(async_fn_in_trait)]
pub trait ListingApi {
    /// `POST /api/validate-sku`
    async fn validate_sku(&self, sku: &str) -> AppResult<SkuImages>;

    /// `POST /api/generate-variants`
    async fn generate_variants(&self, sku: &str, product_type: &str) -> AppResult<Vec<Variant>>;

    /// `POST /export_<marketplace>` with the flattened form.
    ///
    /// Returns the backend confirmation message, if any.
    async fn export(
        &self,
        marketplace: Marketplace,
        form_data: &BTreeMap<String, String>,
    ) -> AppResult<Option<String>>;
}

/// `gloo-net` implementation, stateless apart from the base URL.
#[derive(Clone, Debug)]
pub struct HttpListingApi {
    base_url: String,
}

impl Default for HttpListingApi {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl HttpListingApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST a JSON body and decode the JSON answer.
    ///
    /// Error statuses still carry a JSON body with a message, so the body is
    /// decoded regardless of the status code.
    async fn post_json<B, R>(&self, path: &str, body: &B) -> AppResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let response = Request::post(&url)
            .json(body)
            .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !response.ok() {
            log::warn!("{} answered HTTP {}", path, status);
        }

        response
            .json::<R>()
            .await
            .map_err(|e| AppError::Decode(format!("HTTP {} from {}: {}", status, path, e)))
    }
}

impl ListingApi for HttpListingApi {
    async fn validate_sku(&self, sku: &str) -> AppResult<SkuImages> {
        let body = SkuLookupRequest { sku: sku.to_string() };
        self.post_json::<_, SkuLookupResponse>("/api/validate-sku", &body)
            .await?
            .into_result()
    }

    async fn generate_variants(&self, sku: &str, product_type: &str) -> AppResult<Vec<Variant>> {
        let body = VariantRequest {
            sku: sku.to_string(),
            product_type: product_type.to_string(),
        };
        self.post_json::<_, VariantResponse>("/api/generate-variants", &body)
            .await?
            .into_result()
    }

    async fn export(
        &self,
        marketplace: Marketplace,
        form_data: &BTreeMap<String, String>,
    ) -> AppResult<Option<String>> {
        self.post_json::<_, ExportResponse>(marketplace.endpoint(), form_data)
            .await?
            .into_result()
    }
}
