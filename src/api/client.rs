// ABOUTME: HTTP client for the storefront aggregator API
// One method per remote operation; envelope quirks are normalized before returning.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::types::{
    Envelope, OnboardingSubmission, SellerRecord, SuccessEnvelope, UploadReceipt,
};
use crate::models::{Cue, Personality};

/// Transport-agnostic surface the panels and wizard talk to. Tests swap in
/// a mock; production uses [`StorefrontClient`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreApi: Send + Sync {
    async fn fetch_seller(&self, seller_id: &str) -> Result<SellerRecord, ApiError>;
    async fn update_title(&self, seller_id: &str, title: &str) -> Result<(), ApiError>;
    async fn update_theme(&self, seller_id: &str, theme: &str) -> Result<(), ApiError>;
    async fn update_cues(&self, seller_id: &str, cues: &[Cue]) -> Result<(), ApiError>;
    async fn generate_cues(&self, seller_id: &str) -> Result<Vec<Cue>, ApiError>;
    async fn update_loader_texts(&self, seller_id: &str, texts: &[String]) -> Result<(), ApiError>;
    async fn generate_loader_texts(&self, seller_id: &str) -> Result<Vec<String>, ApiError>;
    async fn update_personalities(
        &self,
        seller_id: &str,
        personalities: &[Personality],
    ) -> Result<(), ApiError>;
    async fn upload_logo(&self, seller_id: &str, file: &Path) -> Result<String, ApiError>;
    async fn submit_onboarding(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<String, ApiError>;
}

/// Reqwest-backed implementation of [`StoreApi`].
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: Client,
    base_url: String,
}

impl StorefrontClient {
    /// Build a client against the given API base URL (no trailing slash
    /// required), e.g. `https://aggregator.gobbl.ai/api/shopify`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("shoptalk-console/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    async fn get_json<D: DeserializeOwned>(
        &self,
        name: &str,
        query: &[(&str, &str)],
    ) -> Result<D, ApiError> {
        debug!(endpoint = name, "GET");
        let response = self.http.get(self.endpoint(name)).query(query).send().await?;
        Self::decode(response).await
    }

    async fn post_json<D: DeserializeOwned, B: Serialize + Sync>(
        &self,
        name: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        debug!(endpoint = name, "POST");
        let response = self.http.post(self.endpoint(name)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<D: DeserializeOwned>(response: reqwest::Response) -> Result<D, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }
        Ok(response.json().await?)
    }

    /// MIME type the upload endpoint expects for a local logo file.
    fn mime_for(path: &Path) -> &'static str {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("svg") => "image/svg+xml",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl StoreApi for StorefrontClient {
    async fn fetch_seller(&self, seller_id: &str) -> Result<SellerRecord, ApiError> {
        let envelope: Envelope<SellerRecord> = self
            .get_json("getSellerData", &[("sellerId", seller_id)])
            .await?;
        envelope.into_result()
    }

    async fn update_title(&self, seller_id: &str, title: &str) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> = self
            .post_json(
                "updateBotTitle",
                &serde_json::json!({ "sellerId": seller_id, "title": title }),
            )
            .await?;
        envelope.into_ack()
    }

    async fn update_theme(&self, seller_id: &str, theme: &str) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> = self
            .post_json(
                "updateTheme",
                &serde_json::json!({ "sellerId": seller_id, "theme": theme }),
            )
            .await?;
        envelope.into_ack()
    }

    async fn update_cues(&self, seller_id: &str, cues: &[Cue]) -> Result<(), ApiError> {
        // This endpoint acknowledges with {success:true} rather than
        // {error:false}; SuccessEnvelope absorbs the drift.
        let envelope: SuccessEnvelope = self
            .post_json(
                "updateCues",
                &serde_json::json!({ "sellerId": seller_id, "cues": cues }),
            )
            .await?;
        envelope.into_ack()
    }

    async fn generate_cues(&self, seller_id: &str) -> Result<Vec<Cue>, ApiError> {
        let envelope: Envelope<Envelope<Vec<Cue>>> = self
            .get_json("generateCues", &[("sellerId", seller_id)])
            .await?;
        envelope.into_result()?.into_result()
    }

    async fn update_loader_texts(&self, seller_id: &str, texts: &[String]) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> = self
            .post_json(
                "updateLoaderTexts",
                &serde_json::json!({ "sellerId": seller_id, "loaderTexts": texts }),
            )
            .await?;
        envelope.into_ack()
    }

    async fn generate_loader_texts(&self, seller_id: &str) -> Result<Vec<String>, ApiError> {
        let envelope: Envelope<Envelope<Vec<String>>> = self
            .get_json("generateLoaderTexts", &[("sellerId", seller_id)])
            .await?;
        envelope.into_result()?.into_result()
    }

    async fn update_personalities(
        &self,
        seller_id: &str,
        personalities: &[Personality],
    ) -> Result<(), ApiError> {
        let envelope: Envelope<serde_json::Value> = self
            .post_json(
                "updatePersonalities",
                &serde_json::json!({ "sellerId": seller_id, "personalities": personalities }),
            )
            .await?;
        envelope.into_ack()
    }

    async fn upload_logo(&self, seller_id: &str, file: &Path) -> Result<String, ApiError> {
        let bytes = tokio::fs::read(file)
            .await
            .map_err(|e| ApiError::Application(format!("could not read {}: {e}", file.display())))?;

        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "logo".to_string());

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(Self::mime_for(file))
            .map_err(ApiError::Transport)?;

        let form = multipart::Form::new()
            .part("file", part)
            .text("sellerId", seller_id.to_string());

        debug!(endpoint = "uploadImage", "POST multipart");
        let response = self
            .http
            .post(self.endpoint("uploadImage"))
            .multipart(form)
            .send()
            .await?;

        let receipt: UploadReceipt = Self::decode(response).await?;
        receipt.into_result()
    }

    async fn submit_onboarding(
        &self,
        submission: &OnboardingSubmission,
    ) -> Result<String, ApiError> {
        let envelope: Envelope<crate::api::types::OnboardingReceipt> =
            self.post_json("updateStore", submission).await?;
        Ok(envelope.into_result()?.seller_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client =
            StorefrontClient::new("https://aggregator.example/api/shop/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(
            client.endpoint("getSellerData"),
            "https://aggregator.example/api/shop/getSellerData"
        );
    }

    #[test]
    fn mime_inference_covers_accepted_types() {
        assert_eq!(StorefrontClient::mime_for(Path::new("a/logo.PNG")), "image/png");
        assert_eq!(StorefrontClient::mime_for(Path::new("logo.jpeg")), "image/jpeg");
        assert_eq!(StorefrontClient::mime_for(Path::new("logo.svg")), "image/svg+xml");
        assert_eq!(
            StorefrontClient::mime_for(Path::new("logo.bin")),
            "application/octet-stream"
        );
    }
}
