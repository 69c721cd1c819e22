//! HTTP client helpers (REST).

use crate::core::endpoint::ApiBase;
use crate::core::logic::{build_deps_health_path, build_gemini_ping_path};
use crate::models::{
    DepsHealth, GeminiModels, GeminiPing, HealthStatus, RunOutcome, RunRequest, SuggestResponse,
};
use gloo_net::http::{Request, Response};
use serde::Deserialize;

/// Error body the backend attaches to non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base: ApiBase,
}

impl ApiClient {
    pub(crate) const fn new(base: ApiBase) -> Self {
        Self { base }
    }

    /// Base address shared with callers that build artifact links.
    pub(crate) const fn base(&self) -> &ApiBase {
        &self.base
    }

    async fn decode<T: for<'de> serde::Deserialize<'de>>(resp: Response) -> anyhow::Result<T> {
        if !resp.ok() {
            let status = resp.status();
            return Err(resp.json::<ErrorBody>().await.map_or_else(
                |_| anyhow::anyhow!("request failed with status {status}"),
                |body| anyhow::anyhow!(body.detail),
            ));
        }
        Ok(resp.json::<T>().await?)
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(&self, path: &str) -> anyhow::Result<T> {
        let resp = Request::get(&self.base.resolve(path)).send().await?;
        Self::decode(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> anyhow::Result<T>
    where
        B: serde::Serialize,
        T: for<'de> serde::Deserialize<'de>,
    {
        let resp = Request::post(&self.base.resolve(path))
            .json(body)?
            .send()
            .await?;
        Self::decode(resp).await
    }

    async fn post_empty<T: for<'de> serde::Deserialize<'de>>(
        &self,
        path: &str,
    ) -> anyhow::Result<T> {
        let resp = Request::post(&self.base.resolve(path)).send().await?;
        Self::decode(resp).await
    }

    pub(crate) async fn fetch_health(&self) -> anyhow::Result<HealthStatus> {
        self.get_json("/api/health").await
    }

    pub(crate) async fn fetch_deps_health(&self, live: bool) -> anyhow::Result<DepsHealth> {
        self.get_json(&build_deps_health_path(live)).await
    }

    pub(crate) async fn fetch_gemini_models(&self) -> anyhow::Result<GeminiModels> {
        self.get_json("/api/providers/gemini/models").await
    }

    pub(crate) async fn ping_gemini(&self, model: &str) -> anyhow::Result<GeminiPing> {
        self.get_json(&build_gemini_ping_path(model)).await
    }

    pub(crate) async fn run_pipeline(&self, request: &RunRequest) -> anyhow::Result<RunOutcome> {
        self.post_json("/api/pipeline", request).await
    }

    pub(crate) async fn suggest_niche(&self) -> anyhow::Result<SuggestResponse> {
        self.post_empty("/api/pipeline/suggest").await
    }
}
